use crate::error::AppError;
use crate::model::entity::EntityKey;
use crate::model::resources::NewRole;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for role administration
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Lists roles, optionally only the one named `name`
    async fn list_roles(&self, name: Option<&str>) -> Result<Vec<Value>, AppError>;

    /// Gets one role, privileges expanded
    async fn get_role(&self, role: &EntityKey) -> Result<Value, AppError>;

    /// Creates a role
    async fn create_role(&self, role: &NewRole) -> Result<Value, AppError>;

    /// Deletes a role
    async fn delete_role(&self, role: &EntityKey) -> Result<Value, AppError>;

    /// Adds privileges (by id) to a role
    async fn add_role_privileges(
        &self,
        role: &EntityKey,
        privileges: &[String],
    ) -> Result<Value, AppError>;

    /// Removes privileges (by id) from a role
    async fn remove_role_privileges(
        &self,
        role: &EntityKey,
        privileges: &[String],
    ) -> Result<Value, AppError>;
}
