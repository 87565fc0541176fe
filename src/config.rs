// src/config.rs

use std::{env, time::Duration};

use dotenvy::dotenv;

use crate::quiz::{ruleset::Ruleset, submitter::DEFAULT_JITTER_MAX};

#[derive(Debug, Clone)]
pub struct Config {
    /// Scoring service: where attempts are stored.
    pub database_url: String,
    /// Scoring service: question document holding the answer key.
    pub questions_path: String,
    pub bind_addr: String,
    pub rust_log: String,
    /// Quiz client: base URL of the scoring service.
    pub api_base: String,
    pub jitter_max: Duration,
    pub ruleset: Ruleset,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://quiz.db?mode=rwc".to_string());

        let questions_path =
            env::var("QUESTIONS_PATH").unwrap_or_else(|_| "data/questions.json".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let api_base =
            env::var("QUIZ_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        let jitter_max = env::var("SUBMIT_JITTER_MAX_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_JITTER_MAX);

        let ruleset = match env::var("QUIZ_RULESET") {
            Ok(name) => name
                .parse::<Ruleset>()
                .expect("QUIZ_RULESET must be 'standard' or 'attempted-only'"),
            Err(_) => Ruleset::standard(),
        };

        Self {
            database_url,
            questions_path,
            bind_addr,
            rust_log,
            api_base,
            jitter_max,
            ruleset,
        }
    }
}
