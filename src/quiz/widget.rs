// src/quiz/widget.rs

use crate::{
    error::QuizError,
    quiz::{
        flow::{StartInput, start_session, submit_answers},
        ruleset::Ruleset,
        session::QuizSession,
        source::QuestionSource,
        submitter::{Outcome, Submitter},
    },
};

/// Which panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Quiz,
    Result,
}

/// View state of the quiz-taking widget.
///
/// Failed actions never move the widget forward: the phase, session and
/// result stay as they were and only `last_error` changes.
pub struct QuizWidget {
    ruleset: Ruleset,
    source: Box<dyn QuestionSource>,
    submitter: Submitter,
    session: Option<QuizSession>,
    result: Option<Outcome>,
    last_error: Option<String>,
    phase: Phase,
}

impl QuizWidget {
    pub fn new(ruleset: Ruleset, source: Box<dyn QuestionSource>, submitter: Submitter) -> Self {
        Self {
            ruleset,
            source,
            submitter,
            session: None,
            result: None,
            last_error: None,
            phase: Phase::Intro,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub async fn start(&mut self, input: &StartInput) -> Result<&QuizSession, QuizError> {
        match start_session(input, self.source.as_ref(), &self.ruleset).await {
            Ok(session) => {
                self.last_error = None;
                self.result = None;
                self.phase = Phase::Quiz;
                Ok(&*self.session.insert(session))
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, selections: &[Vec<bool>]) -> Result<&Outcome, QuizError> {
        let submitted = submit_answers(
            self.session.as_ref(),
            selections,
            &self.ruleset,
            &self.submitter,
        )
        .await;

        match submitted {
            Ok(outcome) => {
                self.last_error = None;
                self.phase = Phase::Result;
                Ok(&*self.result.insert(outcome))
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
