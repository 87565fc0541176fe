use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::models::question::QuestionSet;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Questions plus answer key, loaded once at startup.
    pub questions: Arc<QuestionSet>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<QuestionSet> {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl AppState {
    /// Reads the question document. An unreadable document yields an empty
    /// set, which scores every attempt 0.
    pub async fn load_questions(path: &str) -> QuestionSet {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not load questions for scoring: {}", e);
                return QuestionSet::default();
            }
        };
        QuestionSet::from_json(&raw).unwrap_or_else(|e| {
            tracing::warn!("Could not parse questions for scoring: {}", e);
            QuestionSet::default()
        })
    }
}
