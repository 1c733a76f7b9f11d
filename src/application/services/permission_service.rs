use crate::application::client::Client;
use crate::application::services::PermissionService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::RequestSpec;
use crate::model::resources::{PermissionSet, Principal};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

#[async_trait]
impl PermissionService for Client {
    async fn get_permissions(&self, object: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(object).await?;
        self.execute(&RequestSpec::get(endpoints::OBJECTS).at(format!("{id}/permissions")))
            .await
    }

    async fn grant_permissions(
        &self,
        object: &EntityKey,
        principal: &Principal,
        permissions: PermissionSet,
    ) -> Result<Value, AppError> {
        let object_id = self.resolve(object).await?;
        let (principal_type, kind, name) = match principal {
            Principal::User(name) => ("USER", EntityKind::User, name),
            Principal::Group(name) => ("GROUP", EntityKind::Group, name),
        };
        let principal_id = self.resolver().resolve(&kind, name).await?;

        info!("Granting permissions on {} to {}", object.search_key(), name);
        let body = json!({
            "principal": { "type": principal_type, "id": principal_id, "name": name },
            "permissions": permissions,
        });
        let spec = RequestSpec::post(endpoints::OBJECTS, body)
            .at(format!("{object_id}/permissions"))
            .ack("Permissions granted");
        self.execute(&spec).await
    }

    async fn revoke_permissions(
        &self,
        object: &EntityKey,
        acl_id: &str,
    ) -> Result<Value, AppError> {
        let object_id = self.resolve(object).await?;
        let spec = RequestSpec::delete(endpoints::OBJECTS)
            .at(format!("{object_id}/permissions/{acl_id}"))
            .ack("Permissions revoked");
        self.execute(&spec).await
    }
}
