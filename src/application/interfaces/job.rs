use crate::error::AppError;
use crate::model::entity::EntityKey;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for job control and monitoring
#[async_trait]
pub trait JobService: Send + Sync {
    /// Starts the task `task` of `task_type` (e.g. `MTT`)
    async fn start_job(&self, task: &EntityKey, task_type: &str) -> Result<Value, AppError>;

    /// Stops the running job of `task`
    async fn stop_job(&self, task: &EntityKey, task_type: &str) -> Result<Value, AppError>;

    /// Currently running jobs
    async fn running_jobs(&self) -> Result<Vec<Value>, AppError>;

    /// Activity log entries, optionally for one task, newest first
    async fn activity_log(
        &self,
        task: Option<&EntityKey>,
        row_limit: u32,
    ) -> Result<Vec<Value>, AppError>;
}
