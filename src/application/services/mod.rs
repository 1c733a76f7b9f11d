//! Resource operations implemented on [`Client`](crate::application::client::Client)
//!
//! Each operation resolves its keys, builds a request against an endpoint from
//! the catalog and hands it to the executor or the paginator.

mod agent_service;
mod group_service;
mod job_service;
mod object_service;
mod permission_service;
mod role_service;
mod schedule_service;
mod source_control_service;
mod user_service;

use crate::error::AppError;
use crate::model::entity::EntityKind;
use crate::model::requests::Endpoint;
use serde_json::Value;

pub use crate::application::interfaces::agent::AgentService;
pub use crate::application::interfaces::group::GroupService;
pub use crate::application::interfaces::job::JobService;
pub use crate::application::interfaces::object::ObjectService;
pub use crate::application::interfaces::permission::PermissionService;
pub use crate::application::interfaces::role::RoleService;
pub use crate::application::interfaces::schedule::ScheduleService;
pub use crate::application::interfaces::source_control::SourceControlService;
pub use crate::application::interfaces::user::UserService;

/// First record of a query response, or `NotFound` carrying `key`
///
/// A reply that is not a record list is an `InvalidResponse`.
pub(crate) fn first_record(
    endpoint: &Endpoint,
    payload: Value,
    kind: &EntityKind,
    key: &str,
) -> Result<Value, AppError> {
    let items = endpoint.items(&payload).ok_or_else(|| {
        AppError::InvalidResponse(format!("{} reply for {key} has no records", endpoint.path))
    })?;
    items
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found(kind, key))
}
