use pvsvg_graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or rendering a network
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{axis} must be either a percentage or a pixel value, e.g. '100%' or '100px', got {value:?}")]
    InvalidDimension { axis: &'static str, value: String },

    #[error("Failed to read asset {path}: {source}")]
    AssetNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Failed to serialize network data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading the TOML configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid --physics value: {0}")]
    InvalidPhysics(String),
}
