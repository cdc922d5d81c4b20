//! Where saved queries live.

use std::collections::BTreeMap;
use std::sync::Arc;

use query_engine_model::model::{SavedQuery, SavedQueryId};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("saved query {0} does not exist")]
    NotFound(SavedQueryId),
    #[error("saved query storage failed: {0}")]
    Backend(String),
}

/// Persists saved queries.
#[async_trait::async_trait]
pub trait SavedQueryGateway: Send + Sync {
    /// Store `query`, assigning it an id when it has none. Storing a query that has an id
    /// replaces the previous version.
    async fn save(&self, query: SavedQuery) -> Result<SavedQueryId, GatewayError>;

    async fn load(&self, id: &SavedQueryId) -> Result<SavedQuery, GatewayError>;

    async fn list(&self) -> Result<Vec<SavedQuery>, GatewayError>;
}

#[async_trait::async_trait]
impl<G: SavedQueryGateway + ?Sized> SavedQueryGateway for Arc<G> {
    async fn save(&self, query: SavedQuery) -> Result<SavedQueryId, GatewayError> {
        (**self).save(query).await
    }

    async fn load(&self, id: &SavedQueryId) -> Result<SavedQuery, GatewayError> {
        (**self).load(id).await
    }

    async fn list(&self) -> Result<Vec<SavedQuery>, GatewayError> {
        (**self).list().await
    }
}

/// Keeps saved queries in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    queries: RwLock<BTreeMap<SavedQueryId, SavedQuery>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        InMemoryGateway::default()
    }
}

#[async_trait::async_trait]
impl SavedQueryGateway for InMemoryGateway {
    async fn save(&self, mut query: SavedQuery) -> Result<SavedQueryId, GatewayError> {
        let id = query
            .id
            .clone()
            .unwrap_or_else(|| SavedQueryId(uuid::Uuid::new_v4().to_string()));
        query.id = Some(id.clone());
        tracing::debug!(%id, name = %query.name, "Saving query");
        self.queries.write().await.insert(id.clone(), query);
        Ok(id)
    }

    async fn load(&self, id: &SavedQueryId) -> Result<SavedQuery, GatewayError> {
        self.queries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.clone()))
    }

    async fn list(&self) -> Result<Vec<SavedQuery>, GatewayError> {
        Ok(self.queries.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_model::model::{QueryModel, VisualizationConfig};

    fn draft(name: &str) -> SavedQuery {
        SavedQuery {
            id: None,
            name: name.to_string(),
            description: String::new(),
            query_model: QueryModel {
                tables: vec!["customers".to_string()],
                ..QueryModel::empty()
            },
            sql_text: "SELECT *\nFROM customers".to_string(),
            visualization: VisualizationConfig::table(name),
            connection_id: "warehouse".to_string(),
            last_executed: None,
            execution_count: 0,
            tags: vec![],
            is_public: false,
        }
    }

    #[tokio::test]
    async fn new_queries_get_distinct_ids() {
        let gateway = InMemoryGateway::new();

        let first = gateway.save(draft("first")).await.unwrap();
        let second = gateway.save(draft("second")).await.unwrap();

        assert_ne!(first, second);
        assert!(uuid::Uuid::parse_str(&first.0).is_ok());
        assert_eq!(gateway.load(&first).await.unwrap().id, Some(first));
    }

    #[tokio::test]
    async fn saving_with_an_id_replaces() {
        let gateway = InMemoryGateway::new();
        let id = gateway.save(draft("before")).await.unwrap();

        let mut updated = gateway.load(&id).await.unwrap();
        updated.name = "after".to_string();
        let same = gateway.save(updated).await.unwrap();

        assert_eq!(same, id);
        assert_eq!(gateway.load(&id).await.unwrap().name, "after");
        assert_eq!(gateway.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let gateway = InMemoryGateway::new();
        let id = SavedQueryId::from("missing");

        assert_eq!(
            gateway.load(&id).await,
            Err(GatewayError::NotFound(id.clone()))
        );
    }
}
