use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity that can be addressed by a human-friendly key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Platform user
    User,
    /// Role
    Role,
    /// User group
    Group,
    /// Secure agent
    Agent,
    /// Runtime environment (agent group)
    RuntimeEnvironment,
    /// Schedule
    Schedule,
    /// Connection
    Connection,
    /// Project (path-addressed)
    Project,
    /// Folder (path-addressed)
    Folder,
    /// Any repository object addressed by path and type, e.g. `DTEMPLATE`, `MTT`
    Object(String),
}

impl EntityKind {
    /// `true` for kinds resolved through the path lookup endpoint
    #[must_use]
    pub fn is_path_addressed(&self) -> bool {
        matches!(
            self,
            EntityKind::Project | EntityKind::Folder | EntityKind::Object(_)
        )
    }

    /// Object type used by the lookup endpoint
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        match self {
            EntityKind::Project => Some("PROJECT"),
            EntityKind::Folder => Some("FOLDER"),
            EntityKind::Object(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Role => f.write_str("role"),
            EntityKind::Group => f.write_str("group"),
            EntityKind::Agent => f.write_str("agent"),
            EntityKind::RuntimeEnvironment => f.write_str("runtime environment"),
            EntityKind::Schedule => f.write_str("schedule"),
            EntityKind::Connection => f.write_str("connection"),
            EntityKind::Project => f.write_str("project"),
            EntityKind::Folder => f.write_str("folder"),
            EntityKind::Object(t) => write!(f, "{t} object"),
        }
    }
}

/// Reference to a target entity, either by opaque id or by a resolvable key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKey {
    /// Already-known opaque id
    Id(String),
    /// Simple named entity
    Named {
        /// Entity kind
        kind: EntityKind,
        /// Value of the entity's name field
        name: String,
    },
    /// Path-addressed repository object
    Path {
        /// Entity kind
        kind: EntityKind,
        /// Path, e.g. `Default/Sales/load_orders`
        path: String,
        /// Object type, e.g. `MTT`
        object_type: String,
    },
}

impl EntityKey {
    /// Key by id
    pub fn id(id: impl Into<String>) -> Self {
        EntityKey::Id(id.into())
    }

    /// Key by name
    pub fn named(kind: EntityKind, name: impl Into<String>) -> Self {
        EntityKey::Named {
            kind,
            name: name.into(),
        }
    }

    /// Key by path; the lookup type comes from `kind`
    pub fn path(kind: EntityKind, path: impl Into<String>) -> Self {
        let object_type = kind.object_type().unwrap_or("FOLDER").to_string();
        EntityKey::Path {
            kind,
            path: path.into(),
            object_type,
        }
    }

    /// Key by path with an explicit object type
    pub fn typed_path(path: impl Into<String>, object_type: impl Into<String>) -> Self {
        let object_type = object_type.into();
        EntityKey::Path {
            kind: EntityKind::Object(object_type.clone()),
            path: path.into(),
            object_type,
        }
    }

    /// Prefers `id`, falls back to `name` of `kind`
    ///
    /// Returns `None` when neither is given.
    pub fn from_id_or_name(
        kind: EntityKind,
        id: Option<String>,
        name: Option<String>,
    ) -> Option<Self> {
        match (id, name) {
            (Some(id), _) => Some(EntityKey::Id(id)),
            (None, Some(name)) => Some(EntityKey::named(kind, name)),
            (None, None) => None,
        }
    }

    /// The human-supplied part of the key, used in diagnostics
    #[must_use]
    pub fn search_key(&self) -> &str {
        match self {
            EntityKey::Id(id) => id,
            EntityKey::Named { name, .. } => name,
            EntityKey::Path { path, .. } => path,
        }
    }
}
