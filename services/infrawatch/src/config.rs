//! Configuration types for the dashboard host

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::HostError;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://infrawatch-api.onrender.com";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Reject settings the host cannot serve with
    pub fn validate(&self) -> crate::Result<()> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(HostError::Config("api_base_url must not be empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(HostError::Config(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(HostError::Config("server.bind_address must not be empty".to_string()));
        }
        if self.site.root.as_os_str().is_empty() {
            return Err(HostError::Config("site.root must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

/// Where the built front-end lives and how the page is titled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding the `pkg/` output of the wasm build
    #[serde(default = "default_site_root")]
    pub root: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            title: default_title(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_site_root() -> PathBuf {
    PathBuf::from("site")
}

fn default_title() -> String {
    "InfraWatch".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HostError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "server": { "bind_address": "127.0.0.1", "port": 9000 },
            "site": { "root": "/srv/infrawatch", "title": "Ops" },
            "api_base_url": "https://api.example.com"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site.root, PathBuf::from("/srv/infrawatch"));
        assert_eq!(config.site.title, "Ops");
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.title, "InfraWatch");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 3000}}"#).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
    }

    #[test]
    fn default_config_is_valid() {
        tokio_test::assert_ok!(Config::default().validate());
    }

    #[test]
    fn non_http_api_base_is_rejected() {
        let config = Config {
            api_base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HostError::Config(_))));
    }

    #[test]
    fn empty_api_base_is_rejected() {
        let config = Config {
            api_base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HostError::Config(_))));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_base_url": "http://localhost:4000"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:4000");
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/infrawatch.json"));
        assert!(matches!(result, Err(HostError::Config(_))));
    }

    #[test]
    fn load_config_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(HostError::Json(_))));
    }
}
