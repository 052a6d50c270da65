//! Site configuration file support.
//!
//! Settings come from an optional TOML file, then `HOST` / `PORT` from the
//! environment. Every section is optional:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [brand]
//! tagline = "Supper spots, sorted."
//!
//! [affiliates.klook]
//! base = "https://www.klook.com/en-SG/"
//! utm = "?aid=12345&aff_adid=LISTICLE2025"
//! ```
//!
//! Affiliate entries replace the built-in network of the same name or add a
//! new one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::models::{AffiliateNetwork, Brand, Catalog};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "MAKANLIST_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub brand: BrandOverrides,
    #[serde(default)]
    pub affiliates: BTreeMap<String, AffiliateNetwork>,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Optional replacements for the built-in brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandOverrides {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
}

impl BrandOverrides {
    /// Apply overrides; the page title follows a changed name or tagline.
    pub fn apply_to(&self, brand: &mut Brand) {
        if let Some(name) = &self.name {
            brand.name = name.clone();
        }
        if let Some(tagline) = &self.tagline {
            brand.tagline = tagline.clone();
        }
        if let Some(color) = &self.primary_color {
            brand.primary_color = color.clone();
        }
        if self.name.is_some() || self.tagline.is_some() {
            brand.title = format!("{} · {}", brand.name, brand.tagline);
        }
    }
}

impl SiteConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the standard locations.
    ///
    /// `MAKANLIST_CONFIG` wins when set. Otherwise searches, in order:
    /// 1. `makanlist.toml`
    /// 2. `backend/makanlist.toml`
    /// 3. `../makanlist.toml`
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("makanlist.toml"),
            PathBuf::from("backend/makanlist.toml"),
            PathBuf::from("../makanlist.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading site config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("No makanlist.toml found, using built-in defaults");
        Ok(Self::default())
    }

    /// Overlay `HOST` and `PORT` environment variables.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("PORT {:?}: {}", port, e)))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".to_string()));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".to_string()));
        }
        for (network, entry) in &self.affiliates {
            if entry.utm.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "affiliates.{}.utm must not be empty",
                    network
                )));
            }
        }
        Ok(())
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ConfigError::Invalid(format!(
                    "bind address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }

    /// Apply brand and affiliate overrides to a catalog.
    pub fn apply_to_catalog(&self, catalog: &mut Catalog) {
        self.brand.apply_to(&mut catalog.brand);
        for (network, entry) in &self.affiliates {
            catalog.affiliates.insert(network.clone(), entry.clone());
        }
    }
}
