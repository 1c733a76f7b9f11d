/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 03/10/26
******************************************************************************/

//! # Tenant Admin Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use tenant_admin::prelude::*;
//!
//! let store = MemoryStore::new();
//! let config = Config::from_store(&store);
//! assert!(!config.is_configured());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error taxonomy and the structured form surfaced to callers
pub use crate::error::{AppError, StructuredError};

// ============================================================================
// SESSION, EXECUTION AND PAGINATION
// ============================================================================

pub use crate::application::auth::{SessionManager, SessionProvider};
pub use crate::application::client::Client;
pub use crate::application::executor::RequestExecutor;
pub use crate::application::paginator::{Paginator, PartialPolicy};
pub use crate::application::rate_limiter::RateLimiter;
pub use crate::application::resolver::{EntityResolver, ResolveStrategy};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    AgentService, GroupService, JobService, ObjectService, PermissionService, RoleService,
    ScheduleService, SourceControlService, UserService,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::endpoints;
pub use crate::model::entity::{EntityKey, EntityKind};
pub use crate::model::requests::{ApiGeneration, Endpoint, Filter, Pagination, RequestSpec};
pub use crate::model::resources::{
    NewGroup, NewRole, NewUser, ObjectQuery, PermissionSet, Principal,
};
pub use crate::model::retry::RetryBudget;

// ============================================================================
// STORAGE AND UTILITIES
// ============================================================================

pub use crate::storage::{ConfigStore, JsonFileStore, MemoryStore};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio_util::sync::CancellationToken;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for custom requests
pub use reqwest::Method;
