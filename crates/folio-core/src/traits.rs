//! Shared traits.
//!
//! - [`ConfigManager`]: TOML-backed configuration with path resolution and
//!   environment overrides

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::keys::{leaf_keys, parse_value, set_nested_value};
use crate::{Error, Result};

/// TOML configuration that can be located, loaded, overridden and exported.
///
/// Implementors only provide [`project_name`](ConfigManager::project_name);
/// everything else has a default built on it. For a project named `folio`:
///
/// - explicit path → `FOLIO_CONFIG` → `<config dir>/folio/config.toml`
/// - leaf key `server.port` ↔ environment variable `FOLIO_SERVER_PORT`
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and env prefix.
    fn project_name() -> &'static str;

    /// Environment variable prefix: `"my-site"` → `"MY_SITE"`.
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve which config file to use.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        let env_var = format!("{}_CONFIG", Self::env_prefix());
        if let Ok(path) = std::env::var(&env_var) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration: file (if present), then environment overrides.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Parse a config file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Apply `PREFIX_DOTTED_KEY` overrides looked up through `lookup`.
    fn with_overrides<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut tree = toml::Value::try_from(&self).map_err(|e| Error::config(e.to_string()))?;

        // String leaves stay strings; everything else is type-sniffed.
        let overrides: Vec<(String, toml::Value)> = leaf_keys(&tree)
            .into_iter()
            .filter_map(|(key, current)| {
                let raw = lookup(&env_var_name(&Self::env_prefix(), &key))?;
                let value = match current {
                    toml::Value::String(_) => toml::Value::String(raw),
                    _ => parse_value(&raw),
                };
                Some((key, value))
            })
            .collect();

        if overrides.is_empty() {
            return Ok(self);
        }

        for (key, value) in overrides {
            set_nested_value(&mut tree, &key, value)?;
        }
        tree.try_into()
            .map_err(|e| Error::config(format!("Invalid environment override: {e}")))
    }

    /// Serialize to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Export every leaf as an environment variable assignment.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let tree = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        Ok(leaf_keys(&tree)
            .into_iter()
            .map(|(key, value)| {
                let rendered = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (env_var_name(&Self::env_prefix(), &key), rendered)
            })
            .collect())
    }
}

fn env_var_name(prefix: &str, key: &str) -> String {
    format!("{prefix}_{}", key.to_uppercase().replace(['.', '-'], "_"))
}
