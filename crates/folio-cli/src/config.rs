//! Folio configuration file.

use folio_core::ConfigManager;
use folio_site::ServerConfig;
use serde::{Deserialize, Serialize};

/// Top-level `config.toml` contents. Missing sections fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub project_name: String,
    pub server: ServerSection,
    pub site: SiteSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    /// Directory holding `projects/` preview assets.
    pub static_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: Self::project_name().to_string(),
            server: ServerSection::default(),
            site: SiteSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            host: defaults.host,
            port: defaults.port,
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: folio_site::state::DEFAULT_TITLE.to_string(),
            static_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConfigManager for FolioConfig {
    fn project_name() -> &'static str {
        "folio"
    }
}

impl FolioConfig {
    /// Server settings, with command-line flags taking precedence.
    pub fn server_config(&self, host: Option<String>, port: Option<u16>) -> ServerConfig {
        ServerConfig {
            host: host.unwrap_or_else(|| self.server.host.clone()),
            port: port.unwrap_or(self.server.port),
            static_dir: self.site.static_dir.clone().into(),
            site_title: self.site.title.clone(),
        }
    }
}
