//! Render attribute graphs into self-contained, interactive vis-network HTML pages.
//!
//! ```no_run
//! use pvsvg::{Network, NetworkOptions};
//! use pvsvg_graph::{AttrGraph, Attributes};
//!
//! let mut graph = AttrGraph::new();
//! graph.add_edge("A".to_string(), "B".to_string(), Attributes::new());
//!
//! let network = Network::new(&graph, NetworkOptions::default())?;
//! network.draw("graph.html")?;
//! # Ok::<(), pvsvg::RenderError>(())
//! ```

pub mod assets;
pub mod config;
pub mod dimension;
pub mod error;
pub mod network;
pub mod physics;
pub mod template;

pub use assets::AssetPaths;
pub use dimension::Dimension;
pub use error::{ConfigError, RenderError};
pub use network::{Network, NetworkOptions};
pub use physics::PhysicsOptions;
