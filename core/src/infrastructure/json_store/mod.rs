//! Flat-file JSON persistence helpers.
//!
//! Reference data is read once at startup; the mutable stores (profile
//! slot, order log) are whole-document and rewritten through a temp
//! file + rename so readers never observe a partial write.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::common::entities::app_errors::CoreError;

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        CoreError::Internal(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::Internal(format!("failed to parse {}: {e}", path.display())))
}

/// Like [`read_json`] but a missing file is `None`, not an error.
pub async fn read_json_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| CoreError::Internal(format!("failed to parse {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::Internal(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), CoreError> {
    let payload = serde_json::to_vec_pretty(value)
        .map_err(|e| CoreError::Internal(format!("failed to serialize {}: {e}", path.display())))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    tokio::fs::write(&tmp, &payload)
        .await
        .map_err(|e| CoreError::Internal(format!("failed to write {}: {e}", tmp.display())))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| CoreError::Internal(format!("failed to replace {}: {e}", path.display())))
}

pub async fn remove_if_exists(path: &Path) -> Result<(), CoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CoreError::Internal(format!(
            "failed to remove {}: {e}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_roundtrip_and_atomic_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_json_atomic(&path, &json!({"a": 1})).await.unwrap();
        write_json_atomic(&path, &json!({"a": 2})).await.unwrap();

        let value: serde_json::Value = read_json(&path).await.unwrap();
        assert_eq!(value, json!({"a": 2}));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let missing: Option<serde_json::Value> =
            read_json_optional(&dir.path().join("absent.json")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_remove_if_exists_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        remove_if_exists(&dir.path().join("absent.json")).await.unwrap();
    }
}
