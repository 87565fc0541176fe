// src/models/submission.rs

use std::{fmt, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// 3 uppercase city letters followed by 3 digits (e.g. BLR123).
pub static SCHOOL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("school code pattern"));

/// A validated student identity. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub school: String,
    pub student: String,
}

/// Opaque client-side marker for one quiz attempt. Not a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Derives the token from the identity and the moment the session started.
    pub fn issue(identity: &Identity, at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}#{}#{}",
            identity.school,
            identity.student,
            at.timestamp_millis()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body sent by the quiz client to the scoring endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub session_token: SessionToken,
    pub school: String,
    pub student: String,
    pub grade: String,
    /// Selected choice index per question, `None` when unattempted.
    pub answers: Vec<Option<usize>>,
}

/// Body accepted by the scoring endpoint.
///
/// Every field is optional on the wire; missing identity fields are stored
/// as "unknown".
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[validate(length(max = 200))]
    pub session_token: Option<String>,
    #[validate(regex(path = *SCHOOL_CODE_RE, message = "Invalid School Code."))]
    pub school: Option<String>,
    #[validate(length(max = 20))]
    pub student: Option<String>,
    #[validate(length(max = 20))]
    pub grade: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub answers: Vec<Option<i64>>,
}

impl SubmitRequest {
    /// Treats blank school and student values as missing.
    pub fn without_blank_identity(mut self) -> Self {
        self.school = self.school.filter(|s| !s.trim().is_empty());
        self.student = self.student.filter(|s| !s.trim().is_empty());
        self
    }
}

/// Scoring endpoint response. Older deployments may omit `attemptId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_id: Option<String>,
}

/// Represents the 'attempts' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub attempt_id: String,
    pub school: String,
    pub student: String,
    pub grade: Option<String>,
    pub session_token: Option<String>,
    /// JSON-encoded answer list, as received.
    pub answers: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn token_combines_identity_and_millis() {
        let identity = Identity {
            school: "BLR123".into(),
            student: "0042".into(),
        };
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let token = SessionToken::issue(&identity, at);
        assert_eq!(token.as_str(), "BLR123#0042#1700000000123");
        assert_eq!(token, SessionToken::issue(&identity, at));
    }

    #[test]
    fn payload_uses_camel_case_and_nulls() {
        let identity = Identity {
            school: "BLR123".into(),
            student: "0042".into(),
        };
        let payload = SubmissionPayload {
            session_token: SessionToken::issue(&identity, Utc::now()),
            school: identity.school,
            student: identity.student,
            grade: "7".into(),
            answers: vec![Some(1), None],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["sessionToken"].is_string());
        assert_eq!(json["answers"], serde_json::json!([1, null]));
    }

    #[test]
    fn score_response_without_attempt_id() {
        let resp: ScoreResponse = serde_json::from_str(r#"{"score":3}"#).unwrap();
        assert_eq!(resp.score, 3);
        assert!(resp.attempt_id.is_none());
    }

    #[test]
    fn submit_request_rejects_bad_school_code() {
        let req: SubmitRequest =
            serde_json::from_str(r#"{"school":"blr123","answers":[0]}"#).unwrap();
        assert!(req.validate().is_err());

        let req: SubmitRequest = serde_json::from_str(r#"{"answers":[0, null]}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_identity_counts_as_missing() {
        let req: SubmitRequest =
            serde_json::from_str(r#"{"school":"","student":"  ","answers":[]}"#).unwrap();
        let req = req.without_blank_identity();
        assert!(req.school.is_none());
        assert!(req.student.is_none());
        assert!(req.validate().is_ok());
    }
}
