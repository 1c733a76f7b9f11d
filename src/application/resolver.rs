/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 03/10/26
******************************************************************************/

//! Entity resolution: human-friendly keys to opaque ids
//!
//! A registry maps each [`EntityKind`] to a [`ResolveStrategy`]. Adding a new
//! resolvable kind is one `register` call. In every strategy the first match wins
//! and an empty result is a `NotFound` that carries the original key. A reply that
//! is not a record list is an `InvalidResponse`, never a `NotFound`.

use crate::application::executor::RequestExecutor;
use crate::application::paginator::{Paginator, shape_error};
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::{Endpoint, Filter, RequestSpec};
use crate::model::responses::{LookupRequest, entity_id};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// How an entity kind is turned into an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// Listing filtered server-side with `field == key`
    NameQuery {
        /// Listing endpoint
        endpoint: Endpoint,
        /// Name field used in the equality predicate
        field: &'static str,
    },
    /// Full listing (all pages) matched client-side on `field == key`
    ///
    /// For legacy endpoints that accept no filter expression.
    NameScan {
        /// Listing endpoint
        endpoint: Endpoint,
        /// Name field compared against the key
        field: &'static str,
    },
    /// Explicit lookup call keyed by `{path, type}`
    PathLookup,
}

/// Resolves [`EntityKey`]s into ids through the request executor
pub struct EntityResolver {
    executor: Arc<RequestExecutor>,
    registry: HashMap<EntityKind, ResolveStrategy>,
    page_size: u32,
}

impl EntityResolver {
    /// Resolver with the default registry
    #[must_use]
    pub fn new(executor: Arc<RequestExecutor>, page_size: u32) -> Self {
        let mut resolver = Self {
            executor,
            registry: HashMap::new(),
            page_size,
        };
        resolver.register(
            EntityKind::User,
            ResolveStrategy::NameQuery {
                endpoint: endpoints::USERS,
                field: "userName",
            },
        );
        resolver.register(
            EntityKind::Role,
            ResolveStrategy::NameQuery {
                endpoint: endpoints::ROLES,
                field: "roleName",
            },
        );
        resolver.register(
            EntityKind::Group,
            ResolveStrategy::NameQuery {
                endpoint: endpoints::USER_GROUPS,
                field: "userGroupName",
            },
        );
        resolver.register(
            EntityKind::Schedule,
            ResolveStrategy::NameQuery {
                endpoint: endpoints::SCHEDULES,
                field: "name",
            },
        );
        resolver.register(
            EntityKind::Agent,
            ResolveStrategy::NameScan {
                endpoint: endpoints::AGENTS,
                field: "name",
            },
        );
        resolver.register(
            EntityKind::RuntimeEnvironment,
            ResolveStrategy::NameScan {
                endpoint: endpoints::RUNTIME_ENVIRONMENTS,
                field: "name",
            },
        );
        resolver.register(
            EntityKind::Connection,
            ResolveStrategy::NameScan {
                endpoint: endpoints::CONNECTIONS,
                field: "name",
            },
        );
        resolver.register(EntityKind::Project, ResolveStrategy::PathLookup);
        resolver.register(EntityKind::Folder, ResolveStrategy::PathLookup);
        resolver
    }

    /// Adds or replaces the strategy for `kind`
    pub fn register(&mut self, kind: EntityKind, strategy: ResolveStrategy) {
        self.registry.insert(kind, strategy);
    }

    /// Strategy used for `kind`; typed repository objects fall back to path lookup
    #[must_use]
    pub fn strategy(&self, kind: &EntityKind) -> Option<&ResolveStrategy> {
        match self.registry.get(kind) {
            Some(strategy) => Some(strategy),
            None if kind.is_path_addressed() => Some(&ResolveStrategy::PathLookup),
            None => None,
        }
    }

    /// Resolves `key` of `kind` into an id
    ///
    /// For path-addressed kinds `key` is the path and the lookup type comes from
    /// the kind.
    pub async fn resolve(&self, kind: &EntityKind, key: &str) -> Result<String, AppError> {
        match self.strategy(kind) {
            Some(ResolveStrategy::PathLookup) => {
                let object_type = kind.object_type().ok_or_else(|| {
                    AppError::InvalidInput(format!("{kind} cannot be looked up by path"))
                })?;
                self.resolve_path(kind, key, object_type).await
            }
            Some(ResolveStrategy::NameQuery { endpoint, field }) => {
                let spec = RequestSpec::get(endpoint.clone())
                    .filter(&Filter::new().eq(field, key))
                    .query("limit", "1");
                let payload = self.executor.execute(&spec).await?;
                let matches = endpoint.items(&payload).ok_or_else(|| shape_error(&spec))?;
                first_id(kind, key, &matches)
            }
            Some(ResolveStrategy::NameScan { endpoint, field }) => {
                let spec = RequestSpec::get(endpoint.clone());
                let all = Paginator::new(&self.executor, self.page_size)
                    .collect_all(&spec)
                    .await?;
                let matches: Vec<Value> = all
                    .into_iter()
                    .filter(|item| item.get(*field).and_then(Value::as_str) == Some(key))
                    .collect();
                first_id(kind, key, &matches)
            }
            None => Err(AppError::InvalidInput(format!(
                "no resolver registered for {kind}"
            ))),
        }
    }

    /// Resolves a repository object by path and explicit type
    pub async fn resolve_path(
        &self,
        kind: &EntityKind,
        path: &str,
        object_type: &str,
    ) -> Result<String, AppError> {
        let matches = self.lookup(path, object_type).await?;
        first_id(kind, path, &matches)
    }

    /// Raw lookup call; returns every record the platform matched
    pub async fn lookup(&self, path: &str, object_type: &str) -> Result<Vec<Value>, AppError> {
        let body = serde_json::to_value(LookupRequest::single(path, object_type))?;
        let spec = RequestSpec::post(endpoints::LOOKUP, body);
        let payload = self.executor.execute(&spec).await?;
        endpoints::LOOKUP.items(&payload).ok_or_else(|| shape_error(&spec))
    }

    /// Resolves any key; ids pass through untouched without a network call
    pub async fn resolve_key(&self, key: &EntityKey) -> Result<String, AppError> {
        match key {
            EntityKey::Id(id) => Ok(id.clone()),
            EntityKey::Named { kind, name } => self.resolve(kind, name).await,
            EntityKey::Path {
                kind,
                path,
                object_type,
            } => self.resolve_path(kind, path, object_type).await,
        }
    }

    /// Resolves every name in order; the first failure aborts the whole batch
    pub async fn resolve_many(
        &self,
        kind: &EntityKind,
        names: &[String],
    ) -> Result<Vec<String>, AppError> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.resolve(kind, name).await?);
        }
        Ok(ids)
    }
}

fn first_id(kind: &EntityKind, key: &str, matches: &[Value]) -> Result<String, AppError> {
    let Some(first) = matches.first() else {
        debug!("No {} matched {}", kind, key);
        return Err(AppError::not_found(kind, key));
    };
    entity_id(first)
        .ok_or_else(|| AppError::InvalidResponse(format!("{kind} match for {key} has no id")))
}

/// Splits a comma-separated list of names, trimming blanks
///
/// ```
/// use tenant_admin::application::resolver::split_names;
///
/// assert_eq!(split_names(" Admin, Designer ,,"), vec!["Admin", "Designer"]);
/// ```
#[must_use]
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
