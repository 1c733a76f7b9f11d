//! Catalog of upstream endpoints
//!
//! Each entry states the endpoint family, the path below the family prefix, the
//! pagination shape and where listing items live in the response.

use crate::model::requests::{Endpoint, Pagination};

/// Users (`GET` bare array, `limit`/`skip`)
pub const USERS: Endpoint = Endpoint::current("/users").paginated(Pagination::Offset);
/// Roles (`GET` bare array, `limit`/`skip`)
pub const ROLES: Endpoint = Endpoint::current("/roles").paginated(Pagination::Offset);
/// User groups (`GET` bare array, `limit`/`skip`)
pub const USER_GROUPS: Endpoint = Endpoint::current("/userGroups").paginated(Pagination::Offset);
/// Repository objects (`{count, objects}`, `limit`/`skip`)
pub const OBJECTS: Endpoint = Endpoint::current("/objects")
    .paginated(Pagination::Offset)
    .enveloped("objects");
/// Path lookup (`POST`, `{objects}`)
pub const LOOKUP: Endpoint = Endpoint::current("/lookup").enveloped("objects");
/// Schedules (`{count, schedules}`, `limit`/`skip`)
pub const SCHEDULES: Endpoint = Endpoint::current("/schedule")
    .paginated(Pagination::Offset)
    .enveloped("schedules");
/// Source control commit
pub const COMMIT: Endpoint = Endpoint::current("/commit");
/// Source control pull
pub const PULL: Endpoint = Endpoint::current("/pull");
/// Source control commit history (`{commits}`, `perPage`/`page`)
pub const COMMIT_HISTORY: Endpoint = Endpoint::current("/commitHistory")
    .paginated(Pagination::Ordinal)
    .enveloped("commits");
/// Secure agents (legacy, bare array)
pub const AGENTS: Endpoint = Endpoint::legacy("/agent");
/// Runtime environments (legacy, bare array)
pub const RUNTIME_ENVIRONMENTS: Endpoint = Endpoint::legacy("/runtimeEnvironment");
/// Connections (legacy, bare array)
pub const CONNECTIONS: Endpoint = Endpoint::legacy("/connection");
/// Job start (legacy)
pub const JOB: Endpoint = Endpoint::legacy("/job");
/// Activity log (legacy, bare array)
pub const ACTIVITY_LOG: Endpoint = Endpoint::legacy("/activity/activityLog");
/// Activity monitor (legacy, bare array)
pub const ACTIVITY_MONITOR: Endpoint = Endpoint::legacy("/activity/activityMonitor");
