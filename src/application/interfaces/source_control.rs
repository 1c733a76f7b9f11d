use crate::error::AppError;
use crate::model::entity::EntityKey;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for source control operations
#[async_trait]
pub trait SourceControlService: Send + Sync {
    /// Commits `objects` with `summary`; every key is resolved before anything is sent
    async fn commit(&self, summary: &str, objects: &[EntityKey]) -> Result<Value, AppError>;

    /// Pulls `commit_hash`, optionally restricted to `objects`
    async fn pull(&self, commit_hash: &str, objects: &[EntityKey]) -> Result<Value, AppError>;

    /// Commit history, optionally of a single object, across all pages
    async fn commit_history(&self, object: Option<&EntityKey>) -> Result<Vec<Value>, AppError>;

    /// Details of one commit
    async fn commit_details(&self, commit_hash: &str) -> Result<Value, AppError>;
}
