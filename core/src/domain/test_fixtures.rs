//! In-memory port implementations shared by domain service tests.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::{
    catalog::{entities::Product, ports::CatalogRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::{entities::Store, ports::StoreRepository},
    llm::ports::LLMClient,
    order::{entities::Order, ports::OrderLogRepository},
    profile::ports::ProfileRepository,
    retrieval::{entities::AlternativeItem, ports::AlternativesIndex},
    safety::{entities::Substitution, ports::{SubstitutionRepository, SynonymRepository}},
};

pub fn product(name: &str, sku: &str, allergens: &[&str]) -> Product {
    Product {
        name: name.to_string(),
        sku: sku.to_string(),
        price: 3.99,
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
        tags: Vec::new(),
        rating: None,
    }
}

pub fn store(name: &str, skus: &[&str]) -> Store {
    Store {
        name: name.to_string(),
        address: format!("{name} address"),
        lat: 0.0,
        lon: 0.0,
        available_skus: skus.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    pub products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.products.clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        Ok(self
            .products
            .iter()
            .find(|p| p.name.to_lowercase() == name)
            .cloned())
    }

    async fn get_by_sku(&self, sku: &str) -> Result<Option<Product>, CoreError> {
        Ok(self.products.iter().find(|p| p.sku == sku).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStores {
    pub stores: Vec<Store>,
}

impl StoreRepository for InMemoryStores {
    async fn list(&self) -> Result<Vec<Store>, CoreError> {
        let mut stores = self.stores.clone();
        stores.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stores)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySynonyms {
    pub table: HashMap<String, Vec<String>>,
}

impl SynonymRepository for InMemorySynonyms {
    async fn table(&self) -> Result<HashMap<String, Vec<String>>, CoreError> {
        Ok(self.table.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemorySubstitutions {
    pub table: HashMap<String, Substitution>,
}

impl SubstitutionRepository for InMemorySubstitutions {
    async fn get(&self, item_name: &str) -> Result<Option<Substitution>, CoreError> {
        Ok(self.table.get(item_name).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProfile {
    slot: Mutex<Option<Value>>,
}

impl InMemoryProfile {
    pub fn set(&self, document: Value) {
        *self.slot.lock().unwrap() = Some(document);
    }
}

impl ProfileRepository for InMemoryProfile {
    async fn load(&self) -> Result<Option<Value>, CoreError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn save(&self, document: Value) -> Result<(), CoreError> {
        *self.slot.lock().unwrap() = Some(document);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrders {
    pub orders: Mutex<Vec<Order>>,
}

impl OrderLogRepository for InMemoryOrders {
    async fn append(&self, order: Order) -> Result<Order, CoreError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }
}

/// Scripted LLM: responses are served in push order.
#[derive(Debug, Default)]
pub struct FakeLLM {
    responses: Mutex<VecDeque<Result<String, CoreError>>>,
}

impl FakeLLM {
    pub fn push_response(&self, response: Result<String, CoreError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn next(&self) -> Result<String, CoreError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::Internal("no scripted response".to_string())))
    }
}

impl LLMClient for FakeLLM {
    async fn generate_text(&self, _prompt: String) -> Result<String, CoreError> {
        self.next()
    }

    async fn generate_json(
        &self,
        _prompt: String,
        _response_schema: Value,
    ) -> Result<String, CoreError> {
        self.next()
    }

    async fn generate_text_with_image(
        &self,
        _prompt: String,
        _image_data: Vec<u8>,
        _mime_type: String,
    ) -> Result<String, CoreError> {
        self.next()
    }
}

#[derive(Debug, Default)]
pub struct FakeIndex {
    pub items: Vec<AlternativeItem>,
    pub fail: bool,
}

impl AlternativesIndex for FakeIndex {
    async fn find_alternatives(
        &self,
        _query: &str,
        _exclude_allergen: &str,
        top_k: usize,
    ) -> Result<Vec<AlternativeItem>, CoreError> {
        if self.fail {
            return Err(CoreError::UpstreamFailure("index unavailable".to_string()));
        }
        Ok(self.items.iter().take(top_k).cloned().collect())
    }
}

pub type TestService = Service<
    InMemoryCatalog,
    InMemoryStores,
    InMemorySynonyms,
    InMemorySubstitutions,
    InMemoryProfile,
    InMemoryOrders,
    FakeLLM,
    FakeIndex,
>;

pub fn test_service() -> TestService {
    Service::new(
        InMemoryCatalog::default(),
        InMemoryStores::default(),
        InMemorySynonyms::default(),
        InMemorySubstitutions::default(),
        InMemoryProfile::default(),
        InMemoryOrders::default(),
        FakeLLM::default(),
        FakeIndex::default(),
    )
}
