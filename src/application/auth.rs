/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/

//! Session management for the management API
//!
//! This module owns the process-wide session token:
//! - Login with the configured credentials to mint a token
//! - Token loading from, and persistence to, the configuration store
//! - Serialized renewal so concurrent operations never clobber a fresh token

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{CURRENT_PATH_PREFIX, SESSION_TOKEN_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::http::make_http_request;
use crate::model::responses::LoginResponse;
use crate::storage::ConfigStore;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Source of session tokens for the request executor
///
/// [`SessionManager`] is the production implementation; tests substitute their own.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// `true` when credentials are available
    fn is_configured(&self) -> bool;

    /// Token established this process or loaded from the store, if any
    async fn current_token(&self) -> Option<String>;

    /// Performs the authentication exchange and stores the new token as current
    ///
    /// Never retries; retrying is the caller's concern.
    async fn login(&self) -> Result<String, AppError>;

    /// Replaces `stale` with a fresh token
    ///
    /// If the current token already differs from `stale`, someone else renewed it
    /// and that token is returned without logging in again. `None` means the
    /// caller had no token at all.
    async fn renew(&self, stale: Option<&str>) -> Result<String, AppError>;
}

/// Authentication manager for the management API
pub struct SessionManager {
    config: Arc<Config>,
    client: Client,
    token: Mutex<Option<String>>,
    store: Arc<dyn ConfigStore>,
    rate_limiter: Arc<RateLimiter>,
    logins: AtomicU64,
}

impl SessionManager {
    /// Creates a new session manager, loading any persisted token from `store`
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `store` - Configuration store the token is loaded from and persisted to
    /// * `rate_limiter` - Limiter shared with the request executor
    pub fn new(
        config: Arc<Config>,
        store: Arc<dyn ConfigStore>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let token = store.get(SESSION_TOKEN_KEY).filter(|t| !t.is_empty());
        if token.is_some() {
            debug!("Loaded persisted session token");
        }

        Ok(Self {
            config,
            client,
            token: Mutex::new(token),
            store,
            rate_limiter,
            logins: AtomicU64::new(0),
        })
    }

    /// Number of successful logins performed by this manager
    #[must_use]
    pub fn login_count(&self) -> u64 {
        self.logins.load(Ordering::Relaxed)
    }

    /// Clears the current session
    pub async fn logout(&self) {
        let mut token = self.token.lock().await;
        *token = None;
        info!("Session cleared");
    }

    /// Performs the login exchange without touching the stored token
    async fn authenticate(&self) -> Result<String, AppError> {
        let credentials = self.config.credentials.as_ref().ok_or(AppError::NotConfigured)?;
        let base_url = self.config.base_url().ok_or(AppError::NotConfigured)?;
        let url = format!("{base_url}{CURRENT_PATH_PREFIX}/login");

        let body = json!({
            "username": credentials.username,
            "password": credentials.password,
        });

        debug!("Sending login request to: {}", url);

        let headers = vec![
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        let response = make_http_request(
            &self.client,
            self.rate_limiter.clone(),
            Method::POST,
            &url,
            headers,
            &[],
            Some(&body),
            &CancellationToken::new(),
        )
        .await?;

        if !response.status.is_success() {
            error!("Login failed with status {}", response.status);
            return Err(AppError::AuthFailed(response.to_structured()));
        }

        let parsed: LoginResponse = serde_json::from_str(&response.body)?;
        self.logins.fetch_add(1, Ordering::Relaxed);
        info!("Login successful for {}", credentials.username);
        Ok(parsed.user_info.session_id)
    }

    fn persist(&self, token: &str) {
        if let Err(e) = self.store.set(SESSION_TOKEN_KEY, token) {
            warn!("Failed to persist session token: {}", e);
        }
    }
}

#[async_trait]
impl SessionProvider for SessionManager {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn current_token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    async fn login(&self) -> Result<String, AppError> {
        let mut current = self.token.lock().await;
        let token = self.authenticate().await?;
        *current = Some(token.clone());
        self.persist(&token);
        Ok(token)
    }

    async fn renew(&self, stale: Option<&str>) -> Result<String, AppError> {
        let mut current = self.token.lock().await;
        if let Some(existing) = current.as_deref() {
            if stale != Some(existing) {
                debug!("Session already renewed by another operation");
                return Ok(existing.to_string());
            }
        }

        let token = self.authenticate().await?;
        *current = Some(token.clone());
        self.persist(&token);
        Ok(token)
    }
}
