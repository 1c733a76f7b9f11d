//! Aggregation of cursor-paginated listings
//!
//! The paginator requests pages until the upstream returns an empty one and
//! concatenates the items in arrival order. Each non-empty page advances the
//! cursor, so a finite upstream always terminates.

use crate::application::executor::RequestExecutor;
use crate::error::AppError;
use crate::model::requests::{PageCursor, RequestSpec};
use serde_json::Value;
use tracing::debug;

/// What to do with already-collected pages when a later page fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartialPolicy {
    /// Return `AggregationPartial` carrying the collected items and the failure
    #[default]
    KeepPartial,
    /// Drop the collected items and return the failure alone
    Discard,
}

/// Drives a [`RequestExecutor`] across all pages of a listing endpoint
pub struct Paginator<'a> {
    executor: &'a RequestExecutor,
    page_size: u32,
    policy: PartialPolicy,
}

impl<'a> Paginator<'a> {
    /// Paginator requesting `page_size` items per page
    #[must_use]
    pub fn new(executor: &'a RequestExecutor, page_size: u32) -> Self {
        Self {
            executor,
            page_size,
            policy: PartialPolicy::default(),
        }
    }

    /// Sets the policy applied when a later page fails
    #[must_use]
    pub fn with_policy(mut self, policy: PartialPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Collects every item of the listing described by `template`
    ///
    /// The template's endpoint decides the cursor shape and where the items live
    /// in each page. A non-paginated endpoint is fetched once.
    pub async fn collect_all(&self, template: &RequestSpec) -> Result<Vec<Value>, AppError> {
        if self.page_size == 0 {
            return Err(AppError::InvalidInput("page size must be positive".to_string()));
        }
        let endpoint = &template.endpoint;

        let Some(mut cursor) = PageCursor::start(endpoint.pagination, self.page_size) else {
            let payload = self.executor.execute(template).await?;
            return endpoint.items(&payload).ok_or_else(|| shape_error(template));
        };

        let mut items: Vec<Value> = Vec::new();
        let mut pages = 0usize;
        loop {
            let page = match self.executor.execute(&template.with_cursor(&cursor)).await {
                Ok(payload) => endpoint.items(&payload).ok_or_else(|| shape_error(template))?,
                Err(e) if items.is_empty() => return Err(e),
                Err(e) => return Err(self.partial(items, e)),
            };

            if page.is_empty() {
                break;
            }

            pages += 1;
            debug!(
                "Page {} of {}: {} items",
                pages,
                template.path(),
                page.len()
            );
            items.extend(page);
            cursor = cursor.advance();
        }

        debug!("Collected {} items from {}", items.len(), template.path());
        Ok(items)
    }

    fn partial(&self, items: Vec<Value>, error: AppError) -> AppError {
        match (self.policy, error.status()) {
            (PartialPolicy::KeepPartial, Some(_)) => AppError::AggregationPartial {
                items,
                error: error.to_structured(),
            },
            _ => error,
        }
    }
}

/// Fault for a 2xx reply that is neither the expected array nor envelope
pub(crate) fn shape_error(template: &RequestSpec) -> AppError {
    let expected = match template.endpoint.collection {
        Some(key) => format!("an object with a `{key}` array"),
        None => "an array".to_string(),
    };
    AppError::InvalidResponse(format!("{} did not return {}", template.path(), expected))
}
