use std::path::PathBuf;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        order::{entities::Order, ports::OrderLogRepository},
    },
    infrastructure::json_store::{read_json_optional, write_json_atomic},
};

/// Append-only order log backed by one unbounded JSON array file.
///
/// Appends rewrite the whole array through a temp file + rename, so a
/// reader sees either the old log or the new one, never a torn write.
/// An unreadable log is treated as empty, matching the tolerant
/// read-side behavior of the original flow.
#[derive(Debug, Clone)]
pub struct JsonOrderLogRepository {
    path: PathBuf,
}

impl JsonOrderLogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OrderLogRepository for JsonOrderLogRepository {
    async fn append(&self, order: Order) -> Result<Order, CoreError> {
        let mut orders: Vec<Order> = match read_json_optional(&self.path).await {
            Ok(existing) => existing.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("order log unreadable, starting fresh: {e}");
                Vec::new()
            }
        };

        orders.push(order.clone());
        write_json_atomic(&self.path, &orders).await?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fulfillment::entities::StoreSummary;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn order() -> Order {
        Order::new(
            vec![json!("peanut butter")],
            BTreeMap::new(),
            StoreSummary {
                name: "Store A".to_string(),
                address: "1 Main St".to_string(),
                lat: 0.0,
                lon: 0.0,
            },
            "A1B2C3D4".to_string(),
            json!({}),
        )
    }

    #[tokio::test]
    async fn test_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonOrderLogRepository::new(dir.path().join("orders.json"));

        let first = repo.append(order()).await.unwrap();
        let second = repo.append(order()).await.unwrap();

        let log: Vec<Order> = read_json_optional(&repo.path).await.unwrap().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].order_id, first.order_id);
        assert_eq!(log[1].order_id, second.order_id);
    }

    #[tokio::test]
    async fn test_corrupt_log_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "not json").unwrap();

        let repo = JsonOrderLogRepository::new(&path);
        repo.append(order()).await.unwrap();

        let log: Vec<Order> = read_json_optional(&path).await.unwrap().unwrap();
        assert_eq!(log.len(), 1);
    }
}
