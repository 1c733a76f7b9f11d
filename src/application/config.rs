use crate::constants::{
    DEFAULT_BASE_URL_TEMPLATE, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use crate::model::retry::RetryBudget;
use crate::storage::ConfigStore;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Account credentials and routing coordinates
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Password; never serialized, so it does not leak into logs or displays
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Pod hosting the tenant, e.g. `usw3`
    pub pod: String,
    /// Region of the pod, e.g. `dm-us`
    pub region: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base address template; `{pod}` and `{region}` are substituted
    pub base_url_template: String,
    /// Per-call timeout in seconds
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_seconds: 60,
            burst_size: 20,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the management API client
pub struct Config {
    /// Credentials; `None` means the client is not configured
    pub credentials: Option<Credentials>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Re-authentication budget per logical operation
    pub retry: RetryBudget,
    /// Number of items to retrieve per page on listing endpoints
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from environment variables and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username: Option<String> = get_env_or_none("TENANT_USERNAME");
        let password: Option<String> = get_env_or_none("TENANT_PASSWORD");
        let pod = get_env_or_default("TENANT_POD", String::new());
        let region = get_env_or_default("TENANT_REGION", String::new());

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials {
                username,
                password,
                pod,
                region,
            }),
            _ => {
                warn!("TENANT_USERNAME/TENANT_PASSWORD not found in environment variables or .env file");
                None
            }
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url_template: get_env_or_default(
                    "TENANT_BASE_URL_TEMPLATE",
                    DEFAULT_BASE_URL_TEMPLATE.to_string(),
                ),
                timeout: get_env_or_default("TENANT_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("TENANT_RATE_LIMIT_MAX_REQUESTS", 100),
                period_seconds: get_env_or_default("TENANT_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("TENANT_RATE_LIMIT_BURST_SIZE", 20),
            },
            retry: RetryBudget::new(get_env_or_default(
                "TENANT_MAX_ATTEMPTS",
                DEFAULT_MAX_ATTEMPTS,
            )),
            page_size: get_env_or_default("TENANT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Builds the configuration from a configuration store
    ///
    /// Recognised keys: `username`, `password`, `pod`, `region`, `max_attempts`,
    /// `page_size`, `base_url_template`, `timeout`.
    pub fn from_store(store: &dyn ConfigStore) -> Self {
        let credentials = match (store.get("username"), store.get("password")) {
            (Some(username), Some(password)) => Some(Credentials {
                username,
                password,
                pod: store.get("pod").unwrap_or_default(),
                region: store.get("region").unwrap_or_default(),
            }),
            _ => None,
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url_template: store
                    .get("base_url_template")
                    .unwrap_or_else(|| DEFAULT_BASE_URL_TEMPLATE.to_string()),
                timeout: parse_or(store, "timeout", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig::default(),
            retry: RetryBudget::new(parse_or(store, "max_attempts", DEFAULT_MAX_ATTEMPTS)),
            page_size: parse_or(store, "page_size", DEFAULT_PAGE_SIZE),
        }
    }

    /// Configuration with explicit credentials and defaults elsewhere
    pub fn with_credentials(credentials: Credentials, base_url_template: &str) -> Self {
        Config {
            credentials: Some(credentials),
            rest_api: RestApiConfig {
                base_url_template: base_url_template.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
            retry: RetryBudget::new(DEFAULT_MAX_ATTEMPTS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// `true` when credentials are present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base address rendered from the template, `None` when not configured
    #[must_use]
    pub fn base_url(&self) -> Option<String> {
        let credentials = self.credentials.as_ref()?;
        let url = self
            .rest_api
            .base_url_template
            .replace("{pod}", &credentials.pod)
            .replace("{region}", &credentials.region);
        Some(url.trim_end_matches('/').to_string())
    }
}

fn parse_or<T: FromStr>(store: &dyn ConfigStore, key: &str, default: T) -> T {
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Failed to parse configuration key {}: {}, using default", key, raw);
            default
        }),
        None => default,
    }
}
