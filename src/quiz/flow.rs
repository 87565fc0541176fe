// src/quiz/flow.rs

use chrono::Utc;

use crate::{
    error::QuizError,
    models::submission::SubmissionPayload,
    quiz::{
        collector::collect_answers,
        ruleset::Ruleset,
        session::QuizSession,
        source::QuestionSource,
        submitter::{Outcome, Submitter},
        validator::validate_identity,
    },
};

/// Raw values from the start form.
#[derive(Debug, Clone, Default)]
pub struct StartInput {
    pub school: String,
    pub student: String,
    pub grade: String,
}

/// Handles the start action.
///
/// Validates the identity, issues the session token and loads the
/// questions. On any failure no session exists.
pub async fn start_session(
    input: &StartInput,
    source: &dyn QuestionSource,
    ruleset: &Ruleset,
) -> Result<QuizSession, QuizError> {
    let identity = validate_identity(&input.school, &input.student, ruleset)?;
    let questions = source.load().await?;

    let session = QuizSession::new(identity, input.grade.trim(), questions, Utc::now());
    tracing::info!(
        "Session {} started with {} questions",
        session.token,
        session.questions.len()
    );
    Ok(session)
}

/// Handles the submit action.
///
/// Collection failures are raised before any network traffic. The request
/// itself is made exactly once; retrying is left to the caller.
pub async fn submit_answers(
    session: Option<&QuizSession>,
    selections: &[Vec<bool>],
    ruleset: &Ruleset,
    submitter: &Submitter,
) -> Result<Outcome, QuizError> {
    let session = session.ok_or(QuizError::NoSession)?;
    let collected = collect_answers(&session.questions, selections, ruleset)?;

    let payload = SubmissionPayload {
        session_token: session.token.clone(),
        school: session.identity.school.clone(),
        student: session.identity.student.clone(),
        grade: session.grade.clone(),
        answers: collected.answers.clone(),
    };

    tracing::info!(
        "Submitting {} answers ({} attempted) for session {}",
        payload.answers.len(),
        collected.attempted,
        session.token
    );
    let response = submitter.send(&payload).await?;

    Ok(Outcome::new(response, &collected, ruleset))
}
