/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 03/10/26
******************************************************************************/

//! Client facade for the management API
//!
//! Wires the session manager, request executor, paginator and entity resolver
//! together. The resource services in [`crate::application::services`] are
//! implemented on this type.
//!
//! # Example
//! ```ignore
//! use tenant_admin::prelude::*;
//!
//! let store = Arc::new(JsonFileStore::open("tenant-admin.json")?);
//! let client = Client::new(Config::from_store(store.as_ref()), store)?;
//!
//! // Authentication, retries and pagination are handled internally
//! let users = client.list_users(None).await?;
//! ```

use crate::application::auth::{SessionManager, SessionProvider};
use crate::application::config::Config;
use crate::application::executor::RequestExecutor;
use crate::application::paginator::{PartialPolicy, Paginator};
use crate::application::rate_limiter::RateLimiter;
use crate::application::resolver::EntityResolver;
use crate::error::AppError;
use crate::model::entity::{EntityKey, EntityKind};
use crate::model::requests::RequestSpec;
use crate::storage::ConfigStore;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Management API client with automatic authentication
pub struct Client {
    config: Arc<Config>,
    session: Arc<dyn SessionProvider>,
    executor: Arc<RequestExecutor>,
    resolver: EntityResolver,
    partial_policy: PartialPolicy,
}

impl Client {
    /// Creates a client backed by a [`SessionManager`] over `store`
    ///
    /// No network call is made; the first operation logs in if no token was
    /// persisted.
    pub fn new(config: Config, store: Arc<dyn ConfigStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));
        let session: Arc<dyn SessionProvider> = Arc::new(SessionManager::new(
            config.clone(),
            store,
            rate_limiter.clone(),
        )?);
        Self::with_session(config, session, rate_limiter)
    }

    /// Creates a client using a custom token source
    pub fn with_session(
        config: Arc<Config>,
        session: Arc<dyn SessionProvider>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, AppError> {
        let executor = Arc::new(RequestExecutor::new(
            &config,
            session.clone(),
            rate_limiter,
        )?);
        let resolver = EntityResolver::new(executor.clone(), config.page_size);

        Ok(Self {
            config,
            session,
            executor,
            resolver,
            partial_policy: PartialPolicy::default(),
        })
    }

    /// Sets the policy applied when a later page of a listing fails
    #[must_use]
    pub fn with_partial_policy(mut self, policy: PartialPolicy) -> Self {
        self.partial_policy = policy;
        self
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token source in use
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    /// Underlying request executor
    #[must_use]
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Entity resolver; register extra kinds through [`Client::resolver_mut`]
    #[must_use]
    pub fn resolver(&self) -> &EntityResolver {
        &self.resolver
    }

    /// Mutable entity resolver
    pub fn resolver_mut(&mut self) -> &mut EntityResolver {
        &mut self.resolver
    }

    /// Token cancelling every operation of this client
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.executor.cancellation_token()
    }

    /// Paginator using the configured page size and partial-result policy
    #[must_use]
    pub fn paginator(&self) -> Paginator<'_> {
        Paginator::new(&self.executor, self.config.page_size).with_policy(self.partial_policy)
    }

    /// Executes a single request
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value, AppError> {
        self.executor.execute(spec).await
    }

    /// Collects every page of a listing
    pub async fn list(&self, template: &RequestSpec) -> Result<Vec<Value>, AppError> {
        self.paginator().collect_all(template).await
    }

    /// Resolves a key into an id
    pub async fn resolve(&self, key: &EntityKey) -> Result<String, AppError> {
        self.resolver.resolve_key(key).await
    }

    /// Resolves a list of names of the same kind; the first failure aborts
    pub async fn resolve_all(
        &self,
        kind: EntityKind,
        names: &[String],
    ) -> Result<Vec<String>, AppError> {
        self.resolver.resolve_many(&kind, names).await
    }
}
