use chrono::{DateTime, Utc};

use crate::models::{
    question::Question,
    submission::{Identity, SessionToken},
};

/// One quiz attempt in progress.
///
/// Created only after the identity validated and the questions loaded;
/// read during collection and submission; dropped with the page.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub identity: Identity,
    pub grade: String,
    pub token: SessionToken,
    pub questions: Vec<Question>,
    pub started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(
        identity: Identity,
        grade: impl Into<String>,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let token = SessionToken::issue(&identity, started_at);
        Self {
            identity,
            grade: grade.into(),
            token,
            questions,
            started_at,
        }
    }
}
