// src/handlers/scoring.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        question::QuestionSet,
        submission::{AttemptRecord, ScoreResponse, SubmitRequest},
    },
};

/// Counts positions where the submitted answer equals the key.
///
/// Only the overlapping prefix of the two lists is compared; null answers
/// never score.
fn score_answers(answers: &[Option<i64>], key: &[usize]) -> u32 {
    answers
        .iter()
        .zip(key)
        .filter(|(given, correct)| matches!(given, Some(g) if *g >= 0 && *g as usize == **correct))
        .count() as u32
}

/// Scores a submission and records the attempt.
///
/// * Rejects malformed JSON and invalid school codes with 400.
/// * Stores the attempt under a fresh UUID, partitioned by school.
/// * Returns `{ "attemptId", "score" }`.
pub async fn submit_attempt(
    State(pool): State<SqlitePool>,
    State(questions): State<Arc<QuestionSet>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected submission body: {}", e);
        AppError::BadRequest("Invalid JSON".to_string())
    })?;
    let req = req.without_blank_identity();

    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let score = score_answers(&req.answers, &questions.answers);
    let attempt_id = uuid::Uuid::new_v4().to_string();
    let answers_json = serde_json::to_string(&req.answers)?;

    sqlx::query(
        r#"
        INSERT INTO attempts (attempt_id, school, student, grade, session_token, answers, score, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&attempt_id)
    .bind(req.school.as_deref().unwrap_or("unknown"))
    .bind(req.student.as_deref().unwrap_or("unknown"))
    .bind(req.grade.as_deref())
    .bind(req.session_token.as_deref())
    .bind(&answers_json)
    .bind(score as i64)
    .bind(Utc::now())
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to write attempt: {:?}", e);
        AppError::StoreFailed
    })?;

    tracing::info!("Recorded attempt {} with score {}", attempt_id, score);

    Ok(Json(ScoreResponse {
        score,
        attempt_id: Some(attempt_id),
    }))
}

/// Lists recorded attempts for one school, newest first.
pub async fn list_attempts(
    State(pool): State<SqlitePool>,
    Path(school): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = sqlx::query_as::<_, AttemptRecord>(
        r#"
        SELECT attempt_id, school, student, grade, session_token, answers, score, created_at
        FROM attempts
        WHERE school = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(&school)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch attempts: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(attempts))
}
