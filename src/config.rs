// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Configuration: box definition and log level, read from TOML

use crate::geometry::{BoxSpec, OrientedBox};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "yuhe.toml";
/// Names a config file to use instead of `yuhe.toml`
pub const CONFIG_ENV: &str = "YUHE_CONFIG";
/// Overrides `log_level`
pub const LOG_ENV: &str = "YUHE_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YuheConfig {
    /// Log level name (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(rename = "box")]
    pub bbox: BoxSpec,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl YuheConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: YuheConfig = toml::from_str(content)?;
        config.bbox.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// An explicit `path` wins, then `YUHE_CONFIG`, then `yuhe.toml` in the
    /// working directory if it exists; otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = resolve_path(path, std::env::var(CONFIG_ENV).ok());
        let mut config = match source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(level) = std::env::var(LOG_ENV) {
            config.log_level = Some(level);
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn oriented_box(&self) -> Result<OrientedBox> {
        Ok(OrientedBox::from_spec(&self.bbox)?)
    }

    pub fn log_level_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.log_level.as_deref().unwrap_or(fallback)
    }
}

fn resolve_path(explicit: Option<&Path>, from_env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}
