/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/

//! Error taxonomy for the management API client
//!
//! Every failure that can reach a caller is convertible into a [`StructuredError`]
//! (`status` + `text`), so the presentation layer always has something concrete to
//! render. Upstream responses are carried verbatim; local failures use status `0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Status reported for failures that never produced an upstream response
pub const LOCAL_FAILURE_STATUS: u16 = 0;

/// Status reported when entity resolution finds no match
pub const NOT_FOUND_STATUS: u16 = 404;

/// Uniform `{status, text}` failure shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredError {
    /// Raw upstream HTTP status code (0 when no response was received)
    pub status: u16,
    /// Raw upstream body, or a local diagnostic message
    pub text: String,
}

impl StructuredError {
    /// Creates a new structured error
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}: {}", self.status, self.text)
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Credentials are missing; raised before any network call
    #[error("not configured: credentials are missing")]
    NotConfigured,
    /// The server rejected the session token (401); retried internally
    #[error("session expired")]
    SessionExpired,
    /// The login exchange itself was rejected
    #[error("authentication failed: {0}")]
    AuthFailed(StructuredError),
    /// The re-authentication budget ran out on a persistent 401
    #[error("retry budget exhausted: {0}")]
    BudgetExceeded(StructuredError),
    /// Any other non-2xx upstream response, passed through verbatim
    #[error("upstream error: {0}")]
    Upstream(StructuredError),
    /// Entity resolution found zero matches
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Entity kind that was being resolved
        kind: String,
        /// Original search key, verbatim
        key: String,
    },
    /// Pagination stopped on a later page; the pages collected so far are kept
    #[error("partial result ({} items collected): {error}", .items.len())]
    AggregationPartial {
        /// Items collected before the failing page, in arrival order
        items: Vec<Value>,
        /// The failure of the page that stopped aggregation
        error: StructuredError,
    },
    /// Caller supplied parameters that cannot be turned into a request
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A success response did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// The per-call timeout elapsed
    #[error("request timed out")]
    Timeout,
    /// The caller cancelled the operation
    #[error("operation cancelled")]
    Cancelled,
    /// Connection-level failure
    #[error("network error: {0}")]
    Network(reqwest::Error),
    /// Body could not be parsed as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local I/O failure (configuration store)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Timeout
        } else {
            AppError::Network(e)
        }
    }
}

impl AppError {
    /// Builds a `NotFound` error for the given kind and key
    pub fn not_found(kind: impl fmt::Display, key: impl Into<String>) -> Self {
        AppError::NotFound {
            kind: kind.to_string(),
            key: key.into(),
        }
    }

    /// Returns `true` for unexpected faults that fall outside the structured taxonomy
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Json(_)
                | AppError::Io(_)
                | AppError::InvalidResponse(_)
        )
    }

    /// Upstream status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::AuthFailed(e)
            | AppError::BudgetExceeded(e)
            | AppError::Upstream(e)
            | AppError::AggregationPartial { error: e, .. } => Some(e.status),
            AppError::NotFound { .. } => Some(NOT_FOUND_STATUS),
            _ => None,
        }
    }

    /// Converts any failure into the uniform `{status, text}` shape
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        match self {
            AppError::AuthFailed(e)
            | AppError::BudgetExceeded(e)
            | AppError::Upstream(e)
            | AppError::AggregationPartial { error: e, .. } => e.clone(),
            AppError::NotFound { .. } => StructuredError::new(NOT_FOUND_STATUS, self.to_string()),
            other => StructuredError::new(LOCAL_FAILURE_STATUS, other.to_string()),
        }
    }

    /// JSON report of this failure for output
    ///
    /// A partial listing reports `{items, error: {status, text}}` so the pages
    /// collected before the failure are not lost; every other failure reports
    /// `{status, text}`.
    #[must_use]
    pub fn report(&self) -> Value {
        let structured = self.to_structured();
        let error = serde_json::json!({ "status": structured.status, "text": structured.text });
        match self {
            AppError::AggregationPartial { items, .. } => {
                serde_json::json!({ "items": items, "error": error })
            }
            _ => error,
        }
    }
}
