/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 02/10/26
******************************************************************************/
use crate::constants::{
    CURRENT_PATH_PREFIX, CURRENT_SESSION_HEADER, LEGACY_PATH_PREFIX, LEGACY_SESSION_HEADER,
};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Endpoint family of the upstream API
///
/// The two generations differ in path prefix and in the header that carries
/// the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiGeneration {
    /// v2 endpoints (`/api/v2`, `icSessionId` header)
    Legacy,
    /// v3 endpoints (`/public/core/v3`, `INFA-SESSION-ID` header)
    Current,
}

impl ApiGeneration {
    /// Header name carrying the session token for this generation
    #[must_use]
    pub fn session_header(&self) -> &'static str {
        match self {
            ApiGeneration::Legacy => LEGACY_SESSION_HEADER,
            ApiGeneration::Current => CURRENT_SESSION_HEADER,
        }
    }

    /// Path prefix for this generation
    #[must_use]
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiGeneration::Legacy => LEGACY_PATH_PREFIX,
            ApiGeneration::Current => CURRENT_PATH_PREFIX,
        }
    }
}

/// Pagination shape understood by a listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pagination {
    /// Not a paginated endpoint
    None,
    /// `limit` + `skip` offset cursor, starting at skip 0
    Offset,
    /// `perPage` + `page` ordinal cursor, starting at page 1
    Ordinal,
}

/// Position of a paginator within a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    /// Offset cursor
    Offset {
        /// Number of items to skip
        skip: u32,
        /// Page size
        limit: u32,
    },
    /// Ordinal cursor
    Ordinal {
        /// 1-based page number
        page: u32,
        /// Page size
        per_page: u32,
    },
}

impl PageCursor {
    /// Initial cursor for the given pagination shape, `None` if the endpoint is not paginated
    #[must_use]
    pub fn start(pagination: Pagination, page_size: u32) -> Option<Self> {
        match pagination {
            Pagination::None => None,
            Pagination::Offset => Some(PageCursor::Offset {
                skip: 0,
                limit: page_size,
            }),
            Pagination::Ordinal => Some(PageCursor::Ordinal {
                page: 1,
                per_page: page_size,
            }),
        }
    }

    /// Cursor for the following page
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            PageCursor::Offset { skip, limit } => PageCursor::Offset {
                skip: skip.saturating_add(limit),
                limit,
            },
            PageCursor::Ordinal { page, per_page } => PageCursor::Ordinal {
                page: page.saturating_add(1),
                per_page,
            },
        }
    }

    /// Query parameters encoding this cursor
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            PageCursor::Offset { skip, limit } => vec![
                ("limit".to_string(), limit.to_string()),
                ("skip".to_string(), skip.to_string()),
            ],
            PageCursor::Ordinal { page, per_page } => vec![
                ("perPage".to_string(), per_page.to_string()),
                ("page".to_string(), page.to_string()),
            ],
        }
    }
}

/// Static description of one upstream endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Endpoint family
    pub generation: ApiGeneration,
    /// Path below the generation prefix, e.g. `/users`
    pub path: &'static str,
    /// Pagination shape for listing calls
    pub pagination: Pagination,
    /// Envelope key holding the item array; `None` for a bare array
    pub collection: Option<&'static str>,
}

impl Endpoint {
    /// Non-paginated endpoint of the current generation
    #[must_use]
    pub const fn current(path: &'static str) -> Self {
        Self {
            generation: ApiGeneration::Current,
            path,
            pagination: Pagination::None,
            collection: None,
        }
    }

    /// Non-paginated endpoint of the legacy generation
    #[must_use]
    pub const fn legacy(path: &'static str) -> Self {
        Self {
            generation: ApiGeneration::Legacy,
            path,
            pagination: Pagination::None,
            collection: None,
        }
    }

    /// Sets the pagination shape
    #[must_use]
    pub const fn paginated(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the envelope key holding the item array
    #[must_use]
    pub const fn enveloped(mut self, collection: &'static str) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Full path including the generation prefix
    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}{}", self.generation.path_prefix(), self.path)
    }

    /// Extracts the item array from a listing response
    ///
    /// Returns `None` when the payload does not have the declared shape.
    #[must_use]
    pub fn items(&self, payload: &Value) -> Option<Vec<Value>> {
        let array = match self.collection {
            Some(key) => payload.get(key)?,
            None => payload,
        };
        array.as_array().cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Eq(String, String),
    AtLeast(String, String),
    AtMost(String, String),
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (field, op, value) = match self {
            Predicate::Eq(field, value) => (field, "==", value),
            Predicate::AtLeast(field, value) => (field, ">=", value),
            Predicate::AtMost(field, value) => (field, "<=", value),
        };
        write!(f, "{field}{op}\"{}\"", escape_literal(value))
    }
}

/// Backslash-escapes `\` and `"` so a value cannot close its quoted literal
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Filter expression for list/query endpoints (`q` parameter)
///
/// ```
/// use tenant_admin::model::requests::Filter;
///
/// let q = Filter::new().eq("type", "PROJECT").eq("location", "Default");
/// assert_eq!(q.to_string(), r#"type=="PROJECT" and location=="Default""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality predicate
    #[must_use]
    pub fn eq(mut self, field: &str, value: impl Into<String>) -> Self {
        self.predicates
            .push(Predicate::Eq(field.to_string(), value.into()));
        self
    }

    /// Adds an equality predicate when `value` is present
    #[must_use]
    pub fn eq_opt(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    /// Adds a lower-bound range predicate on a timestamp field
    #[must_use]
    pub fn since(mut self, field: &str, from: DateTime<Utc>) -> Self {
        self.predicates.push(Predicate::AtLeast(
            field.to_string(),
            from.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
        self
    }

    /// Adds an upper-bound range predicate on a timestamp field
    #[must_use]
    pub fn until(mut self, field: &str, to: DateTime<Utc>) -> Self {
        self.predicates.push(Predicate::AtMost(
            field.to_string(),
            to.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
        self
    }

    /// `true` when no predicate was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.predicates.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(" and "))
    }
}

/// One logical remote operation
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Suffix appended to the endpoint path, e.g. `/{id}`
    pub suffix: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
    /// Message synthesized for a bodiless success, e.g. `User deleted`
    pub ack: Option<String>,
}

impl RequestSpec {
    /// New request against `endpoint`
    #[must_use]
    pub fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            suffix: String::new(),
            query: Vec::new(),
            body: None,
            ack: None,
        }
    }

    /// GET request
    #[must_use]
    pub fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// POST request with a JSON body
    #[must_use]
    pub fn post(endpoint: Endpoint, body: Value) -> Self {
        Self::new(Method::POST, endpoint).with_body(body)
    }

    /// PUT request with a JSON body
    #[must_use]
    pub fn put(endpoint: Endpoint, body: Value) -> Self {
        Self::new(Method::PUT, endpoint).with_body(body)
    }

    /// DELETE request
    #[must_use]
    pub fn delete(endpoint: Endpoint) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Appends a path segment (percent-encoding is left to the caller's IDs)
    #[must_use]
    pub fn at(mut self, suffix: impl AsRef<str>) -> Self {
        let suffix = suffix.as_ref();
        if !suffix.starts_with('/') {
            self.suffix.push('/');
        }
        self.suffix.push_str(suffix);
        self
    }

    /// Adds a query parameter
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Adds the `q` filter parameter unless the filter is empty
    #[must_use]
    pub fn filter(self, filter: &Filter) -> Self {
        if filter.is_empty() {
            self
        } else {
            self.query("q", filter.to_string())
        }
    }

    /// Sets the JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the acknowledgement message returned for a bodiless success
    #[must_use]
    pub fn ack(mut self, message: impl Into<String>) -> Self {
        self.ack = Some(message.into());
        self
    }

    /// Copy of this request positioned at `cursor`
    #[must_use]
    pub fn with_cursor(&self, cursor: &PageCursor) -> Self {
        let mut spec = self.clone();
        spec.query.extend(cursor.query_pairs());
        spec
    }

    /// Path including prefix and suffix
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}{}", self.endpoint.full_path(), self.suffix)
    }
}
