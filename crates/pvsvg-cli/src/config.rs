//! Optional TOML configuration for the `pvsvg` binary.

use crate::assets::AssetPaths;
use crate::dimension::Dimension;
use crate::error::ConfigError;
use crate::network::NetworkOptions;
use pvsvg_graph::Attributes;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub bgcolor: Option<String>,
    pub assets: Option<PathBuf>,
    pub physics: Option<Attributes>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Layer this file over the built-in defaults.
    pub fn into_options(self) -> NetworkOptions {
        let defaults = NetworkOptions::default();
        NetworkOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            bgcolor: self.bgcolor.unwrap_or(defaults.bgcolor),
            physics: self.physics,
            assets: self
                .assets
                .map(AssetPaths::from_root)
                .unwrap_or(defaults.assets),
        }
    }
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub bgcolor: Option<String>,
    /// Raw JSON object text from `--physics`.
    pub physics: Option<String>,
    pub assets: Option<PathBuf>,
}

impl Overrides {
    /// Apply on top of `options`. Physics keys replace existing ones a top-level key at a time.
    pub fn apply(self, mut options: NetworkOptions) -> Result<NetworkOptions, ConfigError> {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(bgcolor) = self.bgcolor {
            options.bgcolor = bgcolor;
        }
        if let Some(root) = self.assets {
            options.assets = AssetPaths::from_root(root);
        }
        if let Some(physics) = self.physics {
            let overrides = parse_physics(&physics)?;
            options
                .physics
                .get_or_insert_with(Attributes::new)
                .extend(overrides);
        }
        Ok(options)
    }
}

fn parse_physics(input: &str) -> Result<Attributes, ConfigError> {
    match serde_json::from_str(input) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(ConfigError::InvalidPhysics(format!(
            "expected a JSON object, got: {input}"
        ))),
        Err(e) => Err(ConfigError::InvalidPhysics(e.to_string())),
    }
}
