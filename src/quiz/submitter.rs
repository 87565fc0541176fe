// src/quiz/submitter.rs

use std::{fmt, time::Duration};

use rand::Rng;
use url::Url;

use crate::{
    error::QuizError,
    models::submission::{ScoreResponse, SubmissionPayload},
    quiz::{
        collector::CollectedAnswers,
        ruleset::{AnswerPolicy, Ruleset},
    },
};

/// Upper bound of the pre-submit delay when none is configured.
pub const DEFAULT_JITTER_MAX: Duration = Duration::from_millis(8000);

/// Sends a finished attempt to the scoring endpoint.
///
/// Each submission waits a random delay in `0..=jitter_max` first so that a
/// classroom submitting at once does not hit the endpoint in one burst.
#[derive(Debug, Clone)]
pub struct Submitter {
    client: reqwest::Client,
    endpoint: Url,
    jitter_max: Duration,
}

impl Submitter {
    pub fn new(client: reqwest::Client, endpoint: Url, jitter_max: Duration) -> Self {
        Self {
            client,
            endpoint,
            jitter_max,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Picks this submission's delay.
    pub fn jitter(&self) -> Duration {
        let max_ms = self.jitter_max.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
    }

    /// Waits out the jitter, then performs exactly one POST.
    ///
    /// A non-success status is returned as `SubmitRejected` carrying the
    /// server's message: the `error` field of a JSON body, else the raw body.
    pub async fn send(&self, payload: &SubmissionPayload) -> Result<ScoreResponse, QuizError> {
        let delay = self.jitter();
        tracing::debug!("Delaying submission by {:?}", delay);
        tokio::time::sleep(delay).await;

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            tracing::warn!("Submission rejected with {}: {}", status, body);
            return Err(QuizError::SubmitRejected(rejection_message(body)));
        }

        Ok(res.json::<ScoreResponse>().await?)
    }
}

/// Unwraps `{"error": "..."}` bodies; anything else is shown as sent.
fn rejection_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error")?.as_str().map(str::to_string))
        .unwrap_or(body)
}

/// What the result panel shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub score: u32,
    pub denominator: usize,
    pub attempt_id: Option<String>,
}

impl Outcome {
    pub fn new(response: ScoreResponse, collected: &CollectedAnswers, ruleset: &Ruleset) -> Self {
        let denominator = match ruleset.answers {
            AnswerPolicy::AllQuestions => collected.total,
            AnswerPolicy::AttemptedOnly => collected.attempted,
        };
        Self {
            score: response.score,
            denominator,
            attempt_id: response.attempt_id.filter(|_| ruleset.show_attempt_id),
        }
    }

    /// Lines of the result panel.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            "Submitted".to_string(),
            format!("Score (server-calculated): {}", self),
        ];
        if let Some(id) = &self.attempt_id {
            lines.push(format!("AttemptId: {}", id));
        }
        lines
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.score, self.denominator)
    }
}
