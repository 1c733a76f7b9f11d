use crate::application::client::Client;
use crate::application::services::SourceControlService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::EntityKey;
use crate::model::requests::{Filter, RequestSpec};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

impl Client {
    /// Resolves every key in order; nothing is sent if any key fails
    async fn object_refs(&self, objects: &[EntityKey]) -> Result<Vec<Value>, AppError> {
        let mut refs = Vec::with_capacity(objects.len());
        for object in objects {
            refs.push(json!({ "id": self.resolve(object).await? }));
        }
        Ok(refs)
    }
}

#[async_trait]
impl SourceControlService for Client {
    async fn commit(&self, summary: &str, objects: &[EntityKey]) -> Result<Value, AppError> {
        if objects.is_empty() {
            return Err(AppError::InvalidInput(
                "a commit needs at least one object".to_string(),
            ));
        }
        let refs = self.object_refs(objects).await?;
        info!("Committing {} objects", refs.len());
        let body = json!({ "summary": summary, "objects": refs });
        self.execute(&RequestSpec::post(endpoints::COMMIT, body)).await
    }

    async fn pull(&self, commit_hash: &str, objects: &[EntityKey]) -> Result<Value, AppError> {
        let mut body = json!({ "commitHash": commit_hash });
        if !objects.is_empty() {
            body["objects"] = Value::Array(self.object_refs(objects).await?);
        }
        info!("Pulling commit {}", commit_hash);
        self.execute(&RequestSpec::post(endpoints::PULL, body)).await
    }

    async fn commit_history(&self, object: Option<&EntityKey>) -> Result<Vec<Value>, AppError> {
        let mut filter = Filter::new();
        if let Some(object) = object {
            filter = filter.eq("id", self.resolve(object).await?);
        }
        self.list(&RequestSpec::get(endpoints::COMMIT_HISTORY).filter(&filter))
            .await
    }

    async fn commit_details(&self, commit_hash: &str) -> Result<Value, AppError> {
        self.execute(&RequestSpec::get(endpoints::COMMIT).at(commit_hash))
            .await
    }
}
