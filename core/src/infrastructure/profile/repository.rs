use std::path::PathBuf;

use serde_json::Value;

use crate::{
    domain::{common::entities::app_errors::CoreError, profile::ports::ProfileRepository},
    infrastructure::json_store::{read_json_optional, remove_if_exists, write_json_atomic},
};

/// Single-slot profile store backed by one JSON file.
///
/// The document is replaced wholesale on save; the temp-file + rename
/// write keeps partial documents from ever being visible.
#[derive(Debug, Clone)]
pub struct JsonProfileRepository {
    path: PathBuf,
}

impl JsonProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileRepository for JsonProfileRepository {
    async fn load(&self) -> Result<Option<Value>, CoreError> {
        read_json_optional(&self.path).await
    }

    async fn save(&self, document: Value) -> Result<(), CoreError> {
        write_json_atomic(&self.path, &document).await
    }

    async fn clear(&self) -> Result<(), CoreError> {
        remove_if_exists(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_single_slot_replace_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonProfileRepository::new(dir.path().join("profile.json"));

        assert!(repo.load().await.unwrap().is_none());

        repo.save(json!({"allergies": ["peanuts"]})).await.unwrap();
        repo.save(json!({"allergies": ["dairy"]})).await.unwrap();
        assert_eq!(
            repo.load().await.unwrap(),
            Some(json!({"allergies": ["dairy"]}))
        );

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
        // Clearing an empty slot is fine.
        repo.clear().await.unwrap();
    }
}
