use crate::application::client::Client;
use crate::application::services::ObjectService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::entity::EntityKind;
use crate::model::requests::{Filter, RequestSpec};
use crate::model::resources::ObjectQuery;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ObjectService for Client {
    async fn list_objects(&self, query: &ObjectQuery) -> Result<Vec<Value>, AppError> {
        let mut filter = Filter::new()
            .eq_opt("type", query.object_type.as_deref())
            .eq_opt("location", query.location.as_deref())
            .eq_opt("tag", query.tag.as_deref());
        if let Some(since) = query.updated_since {
            filter = filter.since("updateTime", since);
        }
        if let Some(until) = query.updated_until {
            filter = filter.until("updateTime", until);
        }

        info!("Querying objects: {}", filter);
        let objects = self
            .list(&RequestSpec::get(endpoints::OBJECTS).filter(&filter))
            .await?;
        debug!("Objects obtained: {}", objects.len());
        Ok(objects)
    }

    async fn lookup_object(&self, path: &str, object_type: &str) -> Result<Value, AppError> {
        self.resolver()
            .lookup(path, object_type)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(EntityKind::Object(object_type.to_string()), path))
    }
}
