use std::collections::HashMap;
use std::path::Path;

use crate::{
    domain::{
        catalog::{entities::Product, ports::CatalogRepository},
        common::entities::app_errors::CoreError,
    },
    infrastructure::json_store::read_json,
};

/// Product catalog loaded once from a JSON array and held in memory,
/// read-only, for the life of the process.
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    products: Vec<Product>,
    by_name: HashMap<String, usize>,
    by_sku: HashMap<String, usize>,
}

impl JsonCatalogRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let products: Vec<Product> = read_json(path.as_ref()).await?;

        let mut by_name = HashMap::with_capacity(products.len());
        let mut by_sku = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_name.insert(product.name.to_lowercase(), index);
            if by_sku.insert(product.sku.clone(), index).is_some() {
                tracing::warn!(sku = %product.sku, "duplicate SKU in catalog, keeping last");
            }
        }

        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Self {
            products,
            by_name,
            by_sku,
        })
    }
}

impl CatalogRepository for JsonCatalogRepository {
    async fn list(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.products.clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        Ok(self
            .by_name
            .get(name)
            .map(|&index| self.products[index].clone()))
    }

    async fn get_by_sku(&self, sku: &str) -> Result<Option<Product>, CoreError> {
        Ok(self
            .by_sku
            .get(sku)
            .map(|&index| self.products[index].clone()))
    }
}
