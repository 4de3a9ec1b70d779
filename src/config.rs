//! Process configuration.
//!
//! Values come from an optional YAML file named by `LANTERN_CONFIG`, then the
//! `LISTEN` and `DOC_ROOT` environment variables override what the file says.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LANTERN_CONFIG";
pub const LISTEN_ENV: &str = "LISTEN";
pub const DOC_ROOT_ENV: &str = "DOC_ROOT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Sent in the `Server` header and shown on the root page.
    #[serde(default = "default_name")]
    pub name: String,
    /// Substituted for `<cs371server>` in served text files.
    #[serde(default = "default_template_server")]
    pub template_server: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_name() -> String {
    "Lantern".to_string()
}

fn default_template_server() -> String {
    "Lantern static responder".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            name: default_name(),
            template_server: default_template_server(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], with an explicit variable lookup.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(listen_addr) = lookup(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }
        if let Some(root) = lookup(DOC_ROOT_ENV) {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(raw)?;
        Ok(cfg)
    }
}
