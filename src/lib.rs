/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 03/10/26
******************************************************************************/

//! # Tenant Admin
//!
//! Session-aware client for a multi-tenant SaaS management API.
//!
//! Every operation goes through a [`RequestExecutor`](application::executor::RequestExecutor)
//! that attaches the session token, re-authenticates once per `401` within a bounded
//! budget, and normalizes every response into either a JSON value or a structured
//! `{status, text}` error. Listings are aggregated across pages by the
//! [`Paginator`](application::paginator::Paginator) and human-friendly names and
//! paths are turned into ids by the [`EntityResolver`](application::resolver::EntityResolver).
//!
//! ## Configuration
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TENANT_USERNAME` / `TENANT_PASSWORD` | Login credentials | none |
//! | `TENANT_POD` / `TENANT_REGION` | Routing coordinates | empty |
//! | `TENANT_BASE_URL_TEMPLATE` | Base address template | `https://{pod}.{region}.informaticacloud.com/saas` |
//! | `TENANT_MAX_ATTEMPTS` | Re-authentications per operation | `3` |
//! | `TENANT_PAGE_SIZE` | Items per page | `200` |
//! | `TENANT_REST_TIMEOUT` | Per-call timeout in seconds | `60` |
//! | `LOGLEVEL` | Tracing level | `INFO` |
//!
//! ## Example
//!
//! ```ignore
//! use tenant_admin::prelude::*;
//!
//! setup_logger();
//! let store = Arc::new(JsonFileStore::open("tenant-admin.json")?);
//! let client = Client::new(Config::from_store(store.as_ref()), store)?;
//!
//! let admin = EntityKey::named(EntityKind::Role, "Admin");
//! println!("{}", client.get_role(&admin).await?);
//! ```

/// Client, session management, execution and resource services
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error taxonomy
pub mod error;

/// Requests, endpoints, entity keys and response helpers
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Key-value configuration stores
pub mod storage;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
