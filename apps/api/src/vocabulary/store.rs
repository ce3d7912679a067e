//! Key-value persistence for recruiter vocabulary (custom skills, positions, ...).
//!
//! Values are lists of strings. Redis holds them as JSON arrays; the in-memory
//! store is used when no Redis URL is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored vocabulary is not a JSON string array: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Missing keys read as an empty list.
    async fn get_list(&self, key: &str) -> Result<Vec<String>, VocabularyError>;

    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), VocabularyError>;
}

pub struct RedisVocabularyStore {
    client: redis::Client,
}

impl RedisVocabularyStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VocabularyStore for RedisVocabularyStore {
    async fn get_list(&self, key: &str) -> Result<Vec<String>, VocabularyError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(key).await?;
        match raw {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), VocabularyError> {
        let json = serde_json::to_string(values)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(key, json).await?;
        debug!(key, count = values.len(), "Vocabulary list saved to Redis");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryVocabularyStore {
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryVocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VocabularyStore for MemoryVocabularyStore {
    async fn get_list(&self, key: &str) -> Result<Vec<String>, VocabularyError> {
        Ok(self.lists.read().await.get(key).cloned().unwrap_or_default())
    }

    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), VocabularyError> {
        self.lists
            .write()
            .await
            .insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
