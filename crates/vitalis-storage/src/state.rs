use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// Load a JSON state file.
pub async fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let body = tokio::fs::read(path)
        .await
        .map_err(|e| StorageError::io(path, e))?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Load a JSON state file, or `T::default()` if it does not exist yet.
pub async fn load_state_or_default<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, StorageError> {
    match load_state(path).await {
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        other => other,
    }
}

/// Save a JSON state file, creating parent directories as needed.
pub async fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| StorageError::io(dir, e))?;
    }

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_path);
    tokio::fs::write(&tmp_path, &body)
        .await
        .map_err(|e| StorageError::io(&tmp_path, e))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| StorageError::io(path, e))?;

    Ok(())
}
