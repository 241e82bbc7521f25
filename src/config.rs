//! Tool settings loaded from `flowtitle.toml`.
//!
//! These settings describe how flowtitle itself behaves (where state is
//! kept, which export format is the default, where previews go). The title
//! design lives in [`crate::state`] and is persisted by [`crate::store`].
//!
//! ## Config File Location
//!
//! `flowtitle.toml` is read from the working directory (or `--dir`). Every
//! key is optional; the file is merged over the stock defaults.
//!
//! ```toml
//! [store]
//! enabled = true            # Persist the title between runs
//! dir = ".flowtitle"        # Where the state record lives (relative to --dir)
//!
//! [export]
//! format = "tailwind"       # tailwind | styled | framer | vanilla
//!
//! [preview]
//! output = "flowtitle-preview.html"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project directory.
pub const CONFIG_FILE: &str = "flowtitle.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub export: ExportConfig,
    pub preview: PreviewConfig,
}

impl AppConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.enabled && self.store.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store.dir must not be empty when store.enabled is true".into(),
            ));
        }
        if self.preview.output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "preview.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Where and whether the title state is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// When false every run starts from defaults and nothing is written.
    pub enabled: bool,
    /// Directory for the state record, relative to the project directory.
    pub dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: ".flowtitle".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Format used by `export` when `--format` is not given.
    pub format: ExportFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Output path for `preview`, relative to the project directory.
    pub output: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: "flowtitle-preview.html".to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// Loading: stock defaults, then whatever flowtitle.toml overrides
// -----------------------------------------------------------------------------

/// The stock settings as a TOML table.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(AppConfig::default())?)
}

/// Lay `overlay` over `base`. Tables merge per key at every depth; any
/// other overlay value wins outright.
pub fn merge_toml(mut base: toml::Value, overlay: toml::Value) -> toml::Value {
    merge_into(&mut base, overlay);
    base
}

fn merge_into(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(table), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match table.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// The user's `flowtitle.toml` in `dir`, if there is one.
pub fn read_overrides(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    log::debug!("reading settings from {}", path.display());
    Ok(Some(toml::from_str(&content)?))
}

/// Stock settings with `overrides` applied, checked by [`AppConfig::validate`].
pub fn build_config(overrides: Option<toml::Value>) -> Result<AppConfig, ConfigError> {
    let mut value = stock_defaults_value()?;
    if let Some(overrides) = overrides {
        value = merge_toml(value, overrides);
    }
    let config: AppConfig = value.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Settings for a project directory.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    build_config(read_overrides(dir)?)
}

/// A fully commented stock `flowtitle.toml`. Printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# flowtitle configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Title state
# ---------------------------------------------------------------------------
[store]
# Keep the title design between runs. When false, every command starts
# from the stock title and nothing is written.
enabled = true

# Directory holding flowtitle-state.json, relative to the project directory.
dir = ".flowtitle"

# ---------------------------------------------------------------------------
# Code export
# ---------------------------------------------------------------------------
[export]
# Default target for `flowtitle export`: tailwind, styled, framer or vanilla.
format = "tailwind"

# ---------------------------------------------------------------------------
# Preview page
# ---------------------------------------------------------------------------
[preview]
# Where `flowtitle preview` writes its HTML page.
output = "flowtitle-preview.html"
"##
}
