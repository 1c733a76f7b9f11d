use crate::application::client::Client;
use crate::application::services::{UserService, first_record};
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::{Filter, RequestSpec};
use crate::model::resources::NewUser;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

#[async_trait]
impl UserService for Client {
    async fn list_users(&self, name: Option<&str>) -> Result<Vec<Value>, AppError> {
        info!("Listing users");
        let spec =
            RequestSpec::get(endpoints::USERS).filter(&Filter::new().eq_opt("userName", name));
        let users = self.list(&spec).await?;
        debug!("Users obtained: {}", users.len());
        Ok(users)
    }

    async fn get_user(&self, user: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(user).await?;
        let spec = RequestSpec::get(endpoints::USERS).filter(&Filter::new().eq("userId", &id));
        let payload = self.execute(&spec).await?;
        first_record(&endpoints::USERS, payload, &EntityKind::User, user.search_key())
    }

    async fn create_user(&self, user: &NewUser) -> Result<Value, AppError> {
        let roles = self.resolve_all(EntityKind::Role, &user.roles).await?;
        let groups = self.resolve_all(EntityKind::Group, &user.groups).await?;

        info!("Creating user {}", user.name);
        let body = json!({
            "name": user.name,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "email": user.email,
            "description": user.description,
            "roles": roles,
            "groups": groups,
        });
        self.execute(&RequestSpec::post(endpoints::USERS, body)).await
    }

    async fn delete_user(&self, user: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(user).await?;
        info!("Deleting user {}", user.search_key());
        let spec = RequestSpec::delete(endpoints::USERS)
            .at(&id)
            .ack("User deleted");
        self.execute(&spec).await
    }
}
