// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the student.
    pub text: String,

    /// Ordered choices. A selected answer is a zero-based index into this list.
    pub choices: Vec<String>,
}

/// The full question resource, as stored on disk.
///
/// `answers` is the answer key (one choice index per question). Only the
/// scoring service reads it; clients receive a `PublicQuestionSet`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: Vec<usize>,
}

/// DTO for sending the question set to clients (excludes the answer key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestionSet {
    pub questions: Vec<Question>,
}

impl From<&QuestionSet> for PublicQuestionSet {
    fn from(set: &QuestionSet) -> Self {
        Self {
            questions: set.questions.clone(),
        }
    }
}

impl QuestionSet {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_key_is_optional() {
        let set = QuestionSet::from_json(r#"{"questions":[{"text":"2+2?","choices":["3","4"]}]}"#)
            .unwrap();
        assert_eq!(set.questions.len(), 1);
        assert!(set.answers.is_empty());
    }

    #[test]
    fn public_set_drops_answer_key() {
        let set = QuestionSet::from_json(
            r#"{"questions":[{"text":"2+2?","choices":["3","4"]}],"answers":[1]}"#,
        )
        .unwrap();
        let public = serde_json::to_value(PublicQuestionSet::from(&set)).unwrap();
        assert!(public.get("answers").is_none());
        assert_eq!(public["questions"][0]["choices"][1], "4");
    }
}
