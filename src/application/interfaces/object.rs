use crate::error::AppError;
use crate::model::resources::ObjectQuery;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for repository object queries
#[async_trait]
pub trait ObjectService: Send + Sync {
    /// Lists repository objects matching `query`, across all pages
    async fn list_objects(&self, query: &ObjectQuery) -> Result<Vec<Value>, AppError>;

    /// Looks up the object at `path` of `object_type`
    ///
    /// Returns the first lookup record, or `NotFound` carrying the path.
    async fn lookup_object(&self, path: &str, object_type: &str) -> Result<Value, AppError>;
}
