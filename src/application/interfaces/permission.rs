use crate::error::AppError;
use crate::model::entity::EntityKey;
use crate::model::resources::{PermissionSet, Principal};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for object-level permissions
#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Gets the permission entries of an object
    async fn get_permissions(&self, object: &EntityKey) -> Result<Value, AppError>;

    /// Grants `permissions` on `object` to `principal`; the principal name is resolved first
    async fn grant_permissions(
        &self,
        object: &EntityKey,
        principal: &Principal,
        permissions: PermissionSet,
    ) -> Result<Value, AppError>;

    /// Removes the permission entry `acl_id` from `object`
    async fn revoke_permissions(&self, object: &EntityKey, acl_id: &str) -> Result<Value, AppError>;
}
