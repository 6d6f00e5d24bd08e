//! User preferences that outlive a page view: auto-advance and the signed-in
//! session. Browser builds keep them in `localStorage`, native builds in a
//! JSON file under the platform config directory.

use crate::api::AuthSession;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const PREFS_KEY: &str = "gitavibe.preferences";

#[cfg(not(target_arch = "wasm32"))]
const PREFS_FILE: &str = "preferences.json";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
    #[serde(default)]
    pub session: Option<AuthSession>,
}

fn default_auto_advance() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_advance: default_auto_advance(),
            session: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_preferences() -> Result<Preferences, PrefsError> {
    match LocalStorage::get(PREFS_KEY) {
        Ok(prefs) => Ok(prefs),
        Err(StorageError::KeyNotFound(_)) => Ok(Preferences::default()),
        Err(e) => Err(PrefsError::Storage(e.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn save_preferences(prefs: Preferences) -> Result<(), PrefsError> {
    LocalStorage::set(PREFS_KEY, prefs).map_err(|e| PrefsError::Storage(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("gitavibe")
        .join(PREFS_FILE)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_preferences() -> Result<Preferences, PrefsError> {
    load_from(&preferences_path()).await
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_preferences(prefs: Preferences) -> Result<(), PrefsError> {
    save_to(&preferences_path(), &prefs).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_from(path: &std::path::Path) -> Result<Preferences, PrefsError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn save_to(path: &std::path::Path, prefs: &Preferences) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(prefs)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
