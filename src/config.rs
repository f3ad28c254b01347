//! Server configuration.
//!
//! Loaded once at startup and never mutated afterwards. Values come from an
//! optional YAML file (path in `SERVER_CONFIG`), then the `LISTEN` and
//! `STATIC_ROOT` environment overrides.

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BACKLOG: u32 = 10;
pub const DEFAULT_STATIC_ROOT: &str = "static";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
    /// When set, every raw request is written to this file before parsing.
    pub dump_requests: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory that request paths are joined onto.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            backlog: DEFAULT_BACKLOG,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STATIC_ROOT),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("SERVER_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                Self::from_yaml_str(&text)
                    .with_context(|| format!("invalid config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("STATIC_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(text)?;
        Ok(cfg)
    }
}
