use std::collections::HashMap;
use std::path::Path;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        safety::{
            entities::Substitution,
            ports::{SubstitutionRepository, SynonymRepository},
        },
    },
    infrastructure::json_store::read_json,
};

/// Allergen synonym groups loaded once from a JSON map. Keys and values
/// are lower-cased on load so lookups can stay exact.
#[derive(Debug, Clone)]
pub struct JsonSynonymRepository {
    table: HashMap<String, Vec<String>>,
}

impl JsonSynonymRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw: HashMap<String, Vec<String>> = read_json(path.as_ref()).await?;
        let table = raw
            .into_iter()
            .map(|(key, terms)| {
                (
                    key.to_lowercase(),
                    terms.into_iter().map(|t| t.to_lowercase()).collect(),
                )
            })
            .collect();
        Ok(Self { table })
    }
}

impl SynonymRepository for JsonSynonymRepository {
    async fn table(&self) -> Result<HashMap<String, Vec<String>>, CoreError> {
        Ok(self.table.clone())
    }
}

/// Item-name to substitution table loaded once from a JSON map. Lookup
/// is exact on the lower-cased item name.
#[derive(Debug, Clone)]
pub struct JsonSubstitutionRepository {
    table: HashMap<String, Substitution>,
}

impl JsonSubstitutionRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw: HashMap<String, Substitution> = read_json(path.as_ref()).await?;
        let table = raw
            .into_iter()
            .map(|(key, substitution)| (key.to_lowercase(), substitution))
            .collect();
        Ok(Self { table })
    }
}

impl SubstitutionRepository for JsonSubstitutionRepository {
    async fn get(&self, item_name: &str) -> Result<Option<Substitution>, CoreError> {
        Ok(self.table.get(item_name).cloned())
    }
}
