use crate::application::client::Client;
use crate::application::services::ScheduleService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::EntityKey;
use crate::model::requests::{Filter, RequestSpec};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::info;

impl Client {
    async fn set_schedule_status(
        &self,
        schedule: &EntityKey,
        status: &str,
        ack: &str,
    ) -> Result<Value, AppError> {
        let id = self.resolve(schedule).await?;
        info!("Setting schedule {} {}", schedule.search_key(), status);
        let spec = RequestSpec::new(Method::PATCH, endpoints::SCHEDULES)
            .at(&id)
            .with_body(json!({ "status": status }))
            .ack(ack);
        self.execute(&spec).await
    }
}

#[async_trait]
impl ScheduleService for Client {
    async fn list_schedules(&self, name: Option<&str>) -> Result<Vec<Value>, AppError> {
        let spec =
            RequestSpec::get(endpoints::SCHEDULES).filter(&Filter::new().eq_opt("name", name));
        self.list(&spec).await
    }

    async fn get_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(schedule).await?;
        self.execute(&RequestSpec::get(endpoints::SCHEDULES).at(&id))
            .await
    }

    async fn create_schedule(&self, definition: &Value) -> Result<Value, AppError> {
        if !definition.is_object() {
            return Err(AppError::InvalidInput(
                "schedule definition must be a JSON object".to_string(),
            ));
        }
        self.execute(&RequestSpec::post(endpoints::SCHEDULES, definition.clone()))
            .await
    }

    async fn delete_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError> {
        let id = self.resolve(schedule).await?;
        let spec = RequestSpec::delete(endpoints::SCHEDULES)
            .at(&id)
            .ack("Schedule deleted");
        self.execute(&spec).await
    }

    async fn enable_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError> {
        self.set_schedule_status(schedule, "enabled", "Schedule enabled")
            .await
    }

    async fn disable_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError> {
        self.set_schedule_status(schedule, "disabled", "Schedule disabled")
            .await
    }
}
