use crate::error::AppError;
use crate::model::entity::EntityKey;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for secure agents and runtime environments
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Lists secure agents
    async fn list_agents(&self) -> Result<Vec<Value>, AppError>;

    /// Gets one agent with its details
    async fn get_agent(&self, agent: &EntityKey) -> Result<Value, AppError>;

    /// Deletes an agent
    async fn delete_agent(&self, agent: &EntityKey) -> Result<Value, AppError>;

    /// Lists runtime environments
    async fn list_runtime_environments(&self) -> Result<Vec<Value>, AppError>;
}
