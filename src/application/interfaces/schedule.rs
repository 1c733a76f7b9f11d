use crate::error::AppError;
use crate::model::entity::EntityKey;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for schedule administration
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Lists schedules, optionally only the one named `name`
    async fn list_schedules(&self, name: Option<&str>) -> Result<Vec<Value>, AppError>;

    /// Gets one schedule
    async fn get_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError>;

    /// Creates a schedule from a platform schedule definition
    async fn create_schedule(&self, definition: &Value) -> Result<Value, AppError>;

    /// Deletes a schedule
    async fn delete_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError>;

    /// Enables a schedule
    async fn enable_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError>;

    /// Disables a schedule
    async fn disable_schedule(&self, schedule: &EntityKey) -> Result<Value, AppError>;
}
