use crate::application::client::Client;
use crate::application::services::GroupService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::{Filter, RequestSpec};
use crate::model::resources::NewGroup;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

#[async_trait]
impl GroupService for Client {
    async fn list_groups(&self, name: Option<&str>) -> Result<Vec<Value>, AppError> {
        let spec = RequestSpec::get(endpoints::USER_GROUPS)
            .filter(&Filter::new().eq_opt("userGroupName", name));
        self.list(&spec).await
    }

    async fn create_group(&self, group: &NewGroup) -> Result<Value, AppError> {
        let roles = self.resolve_all(EntityKind::Role, &group.roles).await?;
        let users = self.resolve_all(EntityKind::User, &group.users).await?;

        info!("Creating user group {}", group.name);
        let body = json!({
            "name": group.name,
            "description": group.description,
            "roles": roles,
            "users": users,
        });
        self.execute(&RequestSpec::post(endpoints::USER_GROUPS, body))
            .await
    }

    async fn delete_group(&self, group: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(group).await?;
        let spec = RequestSpec::delete(endpoints::USER_GROUPS)
            .at(&id)
            .ack("Group deleted");
        self.execute(&spec).await
    }
}
