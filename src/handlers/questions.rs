// src/handlers/questions.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::models::question::{PublicQuestionSet, QuestionSet};

/// Serves the question document without its answer key.
pub async fn get_questions(State(questions): State<Arc<QuestionSet>>) -> impl IntoResponse {
    Json(PublicQuestionSet::from(questions.as_ref()))
}
