/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/

//! Single-attempt HTTP transport and response classification
//!
//! [`make_http_request`] sends exactly one request and hands back the raw status
//! and body; [`classify`] turns that into success, expired session or failure.
//! Retrying is the executor's job, never this module's.

use crate::application::rate_limiter::RateLimiter;
use crate::error::{AppError, StructuredError};
use crate::model::responses::acknowledgement;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Status and body of one upstream response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body as text, not re-parsed
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Structured view of this response
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::new(self.status.as_u16(), self.body.clone())
    }
}

/// Outcome of classifying a response
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// 2xx; parsed body or synthesized acknowledgement
    Success(Value),
    /// 401; the raw response is kept so it can be surfaced once the budget is spent
    SessionExpired(StructuredError),
    /// Any other status; body passed through verbatim
    Failure(StructuredError),
}

/// Classifies a raw response
///
/// Rules, in order: 2xx is a success whose payload is the parsed body, or
/// `{"message": ack}` when the body is empty; 401 is an expired session; anything
/// else is a failure carrying the raw body. A non-empty 2xx body that is not JSON
/// is an internal fault.
pub fn classify(response: &RawResponse, ack: Option<&str>) -> Result<Classified, AppError> {
    let status = response.status;
    if status.is_success() {
        if response.body.trim().is_empty() {
            return Ok(Classified::Success(acknowledgement(ack)));
        }
        let payload: Value = serde_json::from_str(&response.body)?;
        return Ok(Classified::Success(payload));
    }

    if status == StatusCode::UNAUTHORIZED {
        return Ok(Classified::SessionExpired(response.to_structured()));
    }

    error!("Request failed with status {}: {}", status, response.body);
    Ok(Classified::Failure(response.to_structured()))
}

/// Sends one HTTP request, honouring the rate limiter and cancellation
///
/// # Arguments
///
/// * `client` - The HTTP client (carries user agent and per-call timeout)
/// * `rate_limiter` - Shared rate limiter to wait on before sending
/// * `method` - HTTP method
/// * `url` - Full URL
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query parameters
/// * `body` - Optional JSON body
/// * `cancel` - Cancellation token checked while waiting and sending
///
/// # Returns
///
/// * `Ok(RawResponse)` - Whatever the server answered, success or not
/// * `Err(AppError)` - Connection failure, timeout or cancellation
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Arc<RateLimiter>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(String, String)],
    body: Option<&Value>,
    cancel: &CancellationToken,
) -> Result<RawResponse, AppError> {
    tokio::select! {
        _ = cancel.cancelled() => return Err(AppError::Cancelled),
        _ = rate_limiter.wait() => {}
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if !query.is_empty() {
        request = request.query(query);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let send = async {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok::<_, AppError>(RawResponse::new(status, text))
    };

    let response = tokio::select! {
        _ = cancel.cancelled() => return Err(AppError::Cancelled),
        result = send => result?,
    };

    debug!("Response status: {}", response.status);
    Ok(response)
}
