/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Bound on re-authentication retries for one logical operation
///
/// `max_attempts` counts the attempts made *after* the first one, each preceded by
/// a login. With `max_attempts = m` a persistently expired session causes `m + 1`
/// requests and `m` logins.
///
/// The budget covers renewals after a 401 only. When no token is persisted yet,
/// the executor logs in once before the first request and that login is not
/// counted, so `m = 0` sends no login only when a session already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryBudget {
    /// Number of additional attempts allowed after a 401
    pub max_attempts: u32,
}

impl RetryBudget {
    /// Creates a budget allowing `max_attempts` re-authenticated retries
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Budget that never re-authenticates
    #[must_use]
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Whether another retry is allowed after `attempts` retries already made
    #[must_use]
    pub fn allows_retry(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }

    /// Total number of requests a persistently expired session causes
    #[must_use]
    pub fn total_requests(&self) -> u32 {
        self.max_attempts.saturating_add(1)
    }
}
