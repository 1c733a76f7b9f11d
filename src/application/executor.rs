/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/

//! Request execution with bounded re-authentication
//!
//! Every remote call goes through [`RequestExecutor::execute`]. The only failure
//! ever retried is an expired session (401): the executor renews the token and
//! resends the same request, at most `max_attempts` times. Anything else is
//! returned immediately.
//!
//! Resending after re-authentication means a non-idempotent write whose first
//! response was a 401 is sent again. The platform offers no idempotency keys, so
//! callers issuing creates or job starts should be aware of it.

use crate::application::auth::SessionProvider;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{Classified, classify, make_http_request};
use crate::model::requests::RequestSpec;
use crate::model::retry::RetryBudget;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Executes logical operations against the management API
pub struct RequestExecutor {
    session: Arc<dyn SessionProvider>,
    http_client: Client,
    base_url: Option<String>,
    budget: RetryBudget,
    rate_limiter: Arc<RateLimiter>,
    cancel: CancellationToken,
}

impl RequestExecutor {
    /// Creates an executor using `session` as its token source
    ///
    /// # Arguments
    /// * `config` - Base address, timeout and retry budget
    /// * `session` - Token source; usually a [`SessionManager`](crate::application::auth::SessionManager)
    /// * `rate_limiter` - Limiter shared with the session manager
    pub fn new(
        config: &Config,
        session: Arc<dyn SessionProvider>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            session,
            http_client,
            base_url: config.base_url(),
            budget: config.retry,
            rate_limiter,
            cancel: CancellationToken::new(),
        })
    }

    /// Token that cancels every in-flight and future operation of this executor
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Executes one logical operation
    ///
    /// Without a persisted token, one login runs before the first request. That
    /// login is outside the retry budget, so it happens even with
    /// `max_attempts = 0`; only renewals after a 401 are counted.
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body, or `{"message": ack}` for a bodiless success
    /// * `Err(AppError::NotConfigured)` - Credentials missing; nothing was sent
    /// * `Err(AppError::BudgetExceeded)` - Still 401 after `max_attempts` renewals
    /// * `Err(AppError::Upstream)` - Any other non-2xx response, verbatim
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value, AppError> {
        if !self.session.is_configured() {
            return Err(AppError::NotConfigured);
        }
        let base_url = self.base_url.as_deref().ok_or(AppError::NotConfigured)?;
        let url = format!("{}{}", base_url, spec.path());
        let header = spec.endpoint.generation.session_header();

        let mut token = match self.session.current_token().await {
            Some(token) => token,
            None => {
                info!("No active session, logging in");
                self.cancellable(self.session.renew(None)).await?
            }
        };

        let mut attempts: u32 = 0;
        loop {
            let headers = vec![
                ("Content-Type", "application/json"),
                ("Accept", "application/json"),
                (header, token.as_str()),
            ];

            let response = make_http_request(
                &self.http_client,
                self.rate_limiter.clone(),
                spec.method.clone(),
                &url,
                headers,
                &spec.query,
                spec.body.as_ref(),
                &self.cancel,
            )
            .await?;

            match classify(&response, spec.ack.as_deref())? {
                Classified::Success(payload) => return Ok(payload),
                Classified::Failure(error) => return Err(AppError::Upstream(error)),
                Classified::SessionExpired(last) => {
                    if !self.budget.allows_retry(attempts) {
                        warn!(
                            "Session still rejected after {} re-authentications, giving up",
                            attempts
                        );
                        return Err(AppError::BudgetExceeded(last));
                    }
                    attempts += 1;
                    warn!(
                        "Session expired, re-authenticating (attempt {}/{})",
                        attempts, self.budget.max_attempts
                    );
                    let renewed = self.cancellable(self.session.renew(Some(&token))).await?;
                    token = renewed;
                    debug!("Resending {} {}", spec.method, url);
                }
            }
        }
    }

    async fn cancellable<T>(
        &self,
        operation: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        tokio::select! {
            _ = self.cancel.cancelled() => Err(AppError::Cancelled),
            result = operation => result,
        }
    }
}
