use crate::error::AppError;
use crate::model::entity::EntityKey;
use crate::model::resources::NewUser;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user administration
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users, optionally only the one named `name`
    async fn list_users(&self, name: Option<&str>) -> Result<Vec<Value>, AppError>;

    /// Gets one user by id or name
    async fn get_user(&self, user: &EntityKey) -> Result<Value, AppError>;

    /// Creates a user; role and group names are resolved first and any unknown
    /// name aborts the creation
    async fn create_user(&self, user: &NewUser) -> Result<Value, AppError>;

    /// Deletes a user by id or name
    async fn delete_user(&self, user: &EntityKey) -> Result<Value, AppError>;
}
