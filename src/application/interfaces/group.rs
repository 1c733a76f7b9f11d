use crate::error::AppError;
use crate::model::entity::EntityKey;
use crate::model::resources::NewGroup;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user group administration
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Lists user groups, optionally only the one named `name`
    async fn list_groups(&self, name: Option<&str>) -> Result<Vec<Value>, AppError>;

    /// Creates a user group; role and user names are resolved first
    async fn create_group(&self, group: &NewGroup) -> Result<Value, AppError>;

    /// Deletes a user group
    async fn delete_group(&self, group: &EntityKey) -> Result<Value, AppError>;
}
