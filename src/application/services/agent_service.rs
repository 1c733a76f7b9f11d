use crate::application::client::Client;
use crate::application::services::AgentService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::EntityKey;
use crate::model::requests::RequestSpec;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl AgentService for Client {
    async fn list_agents(&self) -> Result<Vec<Value>, AppError> {
        self.list(&RequestSpec::get(endpoints::AGENTS)).await
    }

    async fn get_agent(&self, agent: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(agent).await?;
        self.execute(&RequestSpec::get(endpoints::AGENTS).at(format!("details/{id}")))
            .await
    }

    async fn delete_agent(&self, agent: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(agent).await?;
        info!("Deleting agent {}", agent.search_key());
        let spec = RequestSpec::delete(endpoints::AGENTS)
            .at(&id)
            .ack("Agent deleted");
        self.execute(&spec).await
    }

    async fn list_runtime_environments(&self) -> Result<Vec<Value>, AppError> {
        self.list(&RequestSpec::get(endpoints::RUNTIME_ENVIRONMENTS))
            .await
    }
}
