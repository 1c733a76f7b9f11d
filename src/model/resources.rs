//! Parameters accepted by resource operations
//!
//! Names in these structs are human-supplied; the services resolve them to ids
//! before building the request body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// New user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name
    pub name: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Optional description
    pub description: Option<String>,
    /// Role names, resolved to role ids
    pub roles: Vec<String>,
    /// Group names, resolved to group ids
    pub groups: Vec<String>,
}

/// New role
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRole {
    /// Role name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Privilege ids
    pub privileges: Vec<String>,
}

/// New user group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGroup {
    /// Group name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Role names, resolved to role ids
    pub roles: Vec<String>,
    /// User names, resolved to user ids
    pub users: Vec<String>,
}

/// Filters for the repository object query
#[derive(Debug, Clone, Default)]
pub struct ObjectQuery {
    /// Object type, e.g. `DTEMPLATE`
    pub object_type: Option<String>,
    /// Location, e.g. `Default/Sales`
    pub location: Option<String>,
    /// Tag
    pub tag: Option<String>,
    /// Only objects updated at or after this instant
    pub updated_since: Option<DateTime<Utc>>,
    /// Only objects updated at or before this instant
    pub updated_until: Option<DateTime<Utc>>,
}

/// Principal receiving a permission grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    /// A user, by name
    User(String),
    /// A user group, by name
    Group(String),
}

/// Object permission flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Read
    pub read: bool,
    /// Update
    pub update: bool,
    /// Delete
    pub delete: bool,
    /// Execute
    pub execute: bool,
    /// Change permission
    #[serde(rename = "changePermission")]
    pub change_permission: bool,
}

impl PermissionSet {
    /// Every permission granted
    #[must_use]
    pub fn all() -> Self {
        Self {
            read: true,
            update: true,
            delete: true,
            execute: true,
            change_permission: true,
        }
    }

    /// Read only
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read: true,
            ..Self::default()
        }
    }
}
