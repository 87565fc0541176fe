// src/quiz/collector.rs

use crate::{
    error::QuizError,
    models::question::Question,
    quiz::ruleset::{AnswerPolicy, Ruleset},
};

/// Answers gathered from the form, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedAnswers {
    /// Positionally aligned with the questions under `AllQuestions`,
    /// attempted answers only under `AttemptedOnly`.
    pub answers: Vec<Option<usize>>,
    pub attempted: usize,
    pub total: usize,
}

/// Returns the index of the last checked control, or `None` if nothing is checked.
pub fn last_checked(controls: &[bool]) -> Option<usize> {
    controls.iter().rposition(|&checked| checked)
}

/// Builds the answer list from the checked state of each question's choices.
///
/// `selections[i]` holds one flag per choice of question `i`. Missing rows
/// count as unattempted and flags past the last choice are ignored.
pub fn collect_answers(
    questions: &[Question],
    selections: &[Vec<bool>],
    ruleset: &Ruleset,
) -> Result<CollectedAnswers, QuizError> {
    let picked: Vec<Option<usize>> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            selections
                .get(i)
                .and_then(|row| last_checked(&row[..row.len().min(q.choices.len())]))
        })
        .collect();

    let attempted = picked.iter().filter(|a| a.is_some()).count();

    let answers = match ruleset.answers {
        AnswerPolicy::AllQuestions => picked,
        AnswerPolicy::AttemptedOnly => {
            if attempted == 0 {
                return Err(QuizError::NothingAttempted);
            }
            picked.into_iter().filter(Option::is_some).collect()
        }
    };

    Ok(CollectedAnswers {
        answers,
        attempted,
        total: questions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        vec![
            Question {
                text: "Q1".into(),
                choices: vec!["a".into(), "b".into()],
            },
            Question {
                text: "Q2".into(),
                choices: vec!["c".into(), "d".into()],
            },
        ]
    }

    #[test]
    fn last_checked_wins() {
        assert_eq!(last_checked(&[]), None);
        assert_eq!(last_checked(&[false, false]), None);
        assert_eq!(last_checked(&[true, false, true, false]), Some(2));
    }

    #[test]
    fn all_questions_keeps_nulls() {
        let selections = vec![vec![false, true], vec![false, false]];
        let got = collect_answers(&two_questions(), &selections, &Ruleset::standard()).unwrap();
        assert_eq!(got.answers, vec![Some(1), None]);
        assert_eq!(got.attempted, 1);
        assert_eq!(got.total, 2);
    }

    #[test]
    fn attempted_only_filters() {
        let selections = vec![vec![false, true], vec![false, false]];
        let got =
            collect_answers(&two_questions(), &selections, &Ruleset::attempted_only()).unwrap();
        assert_eq!(got.answers, vec![Some(1)]);
        assert_eq!(got.attempted, 1);
    }

    #[test]
    fn attempted_only_refuses_empty_form() {
        let err = collect_answers(&two_questions(), &[], &Ruleset::attempted_only()).unwrap_err();
        assert!(matches!(err, QuizError::NothingAttempted));
    }

    #[test]
    fn short_selections_stay_aligned() {
        let got = collect_answers(&two_questions(), &[vec![true]], &Ruleset::standard()).unwrap();
        assert_eq!(got.answers.len(), 2);
        assert_eq!(got.answers, vec![Some(0), None]);
    }

    #[test]
    fn flags_beyond_choices_ignored() {
        let got = collect_answers(
            &two_questions(),
            &[vec![true, false, true], vec![]],
            &Ruleset::standard(),
        )
        .unwrap();
        assert_eq!(got.answers, vec![Some(0), None]);
    }
}
