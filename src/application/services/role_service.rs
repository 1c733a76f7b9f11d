use crate::application::client::Client;
use crate::application::services::{RoleService, first_record};
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::{Filter, RequestSpec};
use crate::model::resources::NewRole;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

#[async_trait]
impl RoleService for Client {
    async fn list_roles(&self, name: Option<&str>) -> Result<Vec<Value>, AppError> {
        info!("Listing roles");
        let spec =
            RequestSpec::get(endpoints::ROLES).filter(&Filter::new().eq_opt("roleName", name));
        let roles = self.list(&spec).await?;
        debug!("Roles obtained: {}", roles.len());
        Ok(roles)
    }

    async fn get_role(&self, role: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(role).await?;
        let spec = RequestSpec::get(endpoints::ROLES)
            .filter(&Filter::new().eq("roleId", &id))
            .query("expand", "privileges");
        let payload = self.execute(&spec).await?;
        first_record(&endpoints::ROLES, payload, &EntityKind::Role, role.search_key())
    }

    async fn create_role(&self, role: &NewRole) -> Result<Value, AppError> {
        info!("Creating role {}", role.name);
        let body = json!({
            "name": role.name,
            "description": role.description,
            "privileges": role.privileges,
        });
        self.execute(&RequestSpec::post(endpoints::ROLES, body)).await
    }

    async fn delete_role(&self, role: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(role).await?;
        let spec = RequestSpec::delete(endpoints::ROLES)
            .at(&id)
            .ack("Role deleted");
        self.execute(&spec).await
    }

    async fn add_role_privileges(
        &self,
        role: &EntityKey,
        privileges: &[String],
    ) -> Result<Value, AppError> {
        let id = self.resolve(role).await?;
        let spec = RequestSpec::put(endpoints::ROLES, json!({ "privileges": privileges }))
            .at(format!("{id}/addPrivileges"))
            .ack("Privileges added");
        self.execute(&spec).await
    }

    async fn remove_role_privileges(
        &self,
        role: &EntityKey,
        privileges: &[String],
    ) -> Result<Value, AppError> {
        let id = self.resolve(role).await?;
        let spec = RequestSpec::put(endpoints::ROLES, json!({ "privileges": privileges }))
            .at(format!("{id}/removePrivileges"))
            .ack("Privileges removed");
        self.execute(&spec).await
    }
}
