use crate::application::client::Client;
use crate::application::services::JobService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::EntityKey;
use crate::model::requests::RequestSpec;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

#[async_trait]
impl JobService for Client {
    async fn start_job(&self, task: &EntityKey, task_type: &str) -> Result<Value, AppError> {
        let task_id = self.resolve(task).await?;
        info!("Starting {} job {}", task_type, task.search_key());
        let body = json!({ "@type": "job", "taskId": task_id, "taskType": task_type });
        let spec = RequestSpec::post(endpoints::JOB, body).ack("Job started");
        self.execute(&spec).await
    }

    async fn stop_job(&self, task: &EntityKey, task_type: &str) -> Result<Value, AppError> {
        let task_id = self.resolve(task).await?;
        info!("Stopping {} job {}", task_type, task.search_key());
        let body = json!({ "@type": "job", "taskId": task_id, "taskType": task_type });
        let spec = RequestSpec::post(endpoints::JOB, body)
            .at("stop")
            .ack("Job stopped");
        self.execute(&spec).await
    }

    async fn running_jobs(&self) -> Result<Vec<Value>, AppError> {
        self.list(&RequestSpec::get(endpoints::ACTIVITY_MONITOR))
            .await
    }

    async fn activity_log(
        &self,
        task: Option<&EntityKey>,
        row_limit: u32,
    ) -> Result<Vec<Value>, AppError> {
        let mut spec =
            RequestSpec::get(endpoints::ACTIVITY_LOG).query("rowLimit", row_limit.to_string());
        if let Some(task) = task {
            spec = spec.query("taskId", self.resolve(task).await?);
        }
        self.list(&spec).await
    }
}
