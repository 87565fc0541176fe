// src/quiz/source.rs

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::{
    error::QuizError,
    models::question::{PublicQuestionSet, Question, QuestionSet},
};

/// Where the quiz client loads its questions from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Question>, QuizError>;
}

/// Reads a question document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn load(&self) -> Result<Vec<Question>, QuizError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::warn!("Failed to read {}: {:?}", self.path.display(), e);
            QuizError::QuestionLoad(e.to_string())
        })?;
        let set = QuestionSet::from_json(&raw)
            .map_err(|e| QuizError::QuestionLoad(e.to_string()))?;
        Ok(set.questions)
    }
}

/// Fetches the public question document over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn load(&self) -> Result<Vec<Question>, QuizError> {
        let res = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| QuizError::QuestionLoad(e.to_string()))?;

        if !res.status().is_success() {
            return Err(QuizError::QuestionLoad(format!(
                "{} returned {}",
                self.url,
                res.status()
            )));
        }

        let set: PublicQuestionSet = res
            .json()
            .await
            .map_err(|e| QuizError::QuestionLoad(e.to_string()))?;
        Ok(set.questions)
    }
}

/// Questions held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<Question>);

#[async_trait]
impl QuestionSource for StaticSource {
    async fn load(&self) -> Result<Vec<Question>, QuizError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_document() {
        let path = std::env::temp_dir().join(format!("questions-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(
            &path,
            r#"{"questions":[{"text":"Capital of France?","choices":["Paris","Rome"]}],"answers":[0]}"#,
        )
        .await
        .unwrap();

        let questions = FileSource::new(&path).load().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].choices[0], "Paris");

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let err = FileSource::new("/definitely/not/here.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::QuestionLoad(_)));
    }
}
