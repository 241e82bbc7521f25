//! Durable title state.
//!
//! The whole [`TitleConfig`] is written as one JSON record under a fixed
//! storage key after every change. Reading is forgiving: a missing file or a
//! record that no longer parses yields the stock defaults. Fullscreen is a
//! runtime flag and always comes back off.
//!
//! ```text
//! .flowtitle/
//! └── flowtitle-state.json
//! ```

use crate::state::TitleConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed key the state record is stored under.
pub const STORAGE_KEY: &str = "flowtitle-state";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store living in `dir`, at `dir/flowtitle-state.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved state, or defaults when there is none or it is unreadable.
    pub fn load(&self) -> TitleConfig {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return TitleConfig::default(),
            Err(e) => {
                log::warn!("cannot read {}: {e}; using defaults", self.path.display());
                return TitleConfig::default();
            }
        };
        match serde_json::from_str::<TitleConfig>(&content) {
            Ok(config) => {
                let mut config = config.clamped();
                config.exit_fullscreen();
                config
            }
            Err(e) => {
                log::warn!(
                    "discarding malformed state in {}: {e}",
                    self.path.display()
                );
                TitleConfig::default()
            }
        }
    }

    /// Write `config`, creating the directory if needed.
    pub fn save(&self, config: &TitleConfig) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        log::info!("saved state to {}", self.path.display());
        Ok(())
    }

    /// Remove the saved record so the next load starts from defaults.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GradientDefinition;
    use crate::state::{Direction, TitleUpdate};
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(tmp.path());
        assert_eq!(store.load(), TitleConfig::default());
    }

    #[test]
    fn path_uses_storage_key() {
        let store = StateStore::in_dir(Path::new("/tmp/x"));
        assert!(store.path().ends_with("flowtitle-state.json"));
    }

    #[test]
    fn save_then_load_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(&tmp.path().join("nested"));
        let config = TitleConfig::default()
            .apply_update(TitleUpdate {
                title: Some("Persisted".to_string()),
                direction: Some(Direction::Vertical),
                ..Default::default()
            })
            .with_custom_gradient(GradientDefinition {
                id: "custom-1".to_string(),
                name: "Mine".to_string(),
                classes: String::new(),
                colors: vec!["#000".to_string(), "#fff".to_string()],
                stops: Some(vec![80.0, 20.0]),
                is_custom: true,
            });
        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn fullscreen_forced_off_on_load() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(tmp.path());
        let mut config = TitleConfig::default();
        config.enter_fullscreen();
        store.save(&config).unwrap();
        assert!(!store.load().is_fullscreen);

        fs::write(store.path(), r#"{"title":"x","is_fullscreen":true}"#).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.title, "x");
        assert!(!loaded.is_fullscreen);
    }

    #[test]
    fn malformed_record_is_discarded() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(tmp.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), TitleConfig::default());

        fs::write(store.path(), r#"{"speed":"fast"}"#).unwrap();
        assert_eq!(store.load(), TitleConfig::default());
    }

    #[test]
    fn partial_record_fills_defaults_and_clamps() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(tmp.path());
        fs::write(store.path(), r#"{"speed": 90, "easing": "linear"}"#).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.speed, 30);
        assert_eq!(loaded.easing, crate::state::Easing::Linear);
        assert_eq!(loaded.title, "Super Flow Title");
    }

    #[test]
    fn clear_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = StateStore::in_dir(tmp.path());
        store.save(&TitleConfig::default()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }
}
