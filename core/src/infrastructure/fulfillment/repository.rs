use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        fulfillment::{entities::Store, ports::StoreRepository},
    },
    infrastructure::json_store::read_json,
};

#[derive(Debug, Deserialize)]
struct StoreRecord {
    address: String,
    lat: f64,
    lon: f64,
    #[serde(rename = "availableSKUs")]
    available_skus: BTreeSet<String>,
}

/// Store roster loaded once from a JSON map of name to record.
///
/// Held in lexicographic name order so that selection ties break
/// deterministically.
#[derive(Debug, Clone)]
pub struct JsonStoreRepository {
    stores: Vec<Store>,
}

impl JsonStoreRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let records: BTreeMap<String, StoreRecord> = read_json(path.as_ref()).await?;

        let stores = records
            .into_iter()
            .map(|(name, record)| Store {
                name,
                address: record.address,
                lat: record.lat,
                lon: record.lon,
                available_skus: record.available_skus,
            })
            .collect::<Vec<_>>();

        tracing::info!(count = stores.len(), "store roster loaded");
        Ok(Self { stores })
    }
}

impl StoreRepository for JsonStoreRepository {
    async fn list(&self) -> Result<Vec<Store>, CoreError> {
        Ok(self.stores.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stores_come_back_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stores.json");
        std::fs::write(
            &path,
            r#"{
                "Store B": {"address": "2 Oak St", "lat": 1.0, "lon": 2.0, "availableSKUs": ["P1"]},
                "Store A": {"address": "1 Main St", "lat": 3.0, "lon": 4.0, "availableSKUs": ["P1", "P2"]}
            }"#,
        )
        .unwrap();

        let repo = JsonStoreRepository::load(&path).await.unwrap();
        let stores = repo.list().await.unwrap();
        let names: Vec<&str> = stores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Store A", "Store B"]);
        assert!(stores[0].available_skus.contains("P2"));
    }
}
