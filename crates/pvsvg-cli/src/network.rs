//! Render an attribute graph into a self-contained vis-network HTML page.

use crate::assets::{AssetPaths, Assets};
use crate::dimension::{self, Dimension, NormalizedDimension};
use crate::error::RenderError;
use crate::physics::PhysicsOptions;
use crate::template;
use pvsvg_graph::{Attributes, GraphData, VisualGraph};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Caller-facing settings for a [`Network`].
#[derive(Debug, Clone)]
pub struct NetworkOptions {
    pub width: Dimension,
    pub height: Dimension,
    pub bgcolor: String,
    /// Shallow overrides applied on top of [`PhysicsOptions::default`].
    pub physics: Option<Attributes>,
    pub assets: AssetPaths,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            width: Dimension::from("100%"),
            height: Dimension::from("800px"),
            bgcolor: "#ffffff".to_string(),
            physics: None,
            assets: AssetPaths::default(),
        }
    }
}

/// A validated render configuration bound to a read-only graph.
#[derive(Debug)]
pub struct Network<'g, G> {
    graph: &'g G,
    width: NormalizedDimension,
    height: NormalizedDimension,
    bgcolor: String,
    physics: PhysicsOptions,
    physics_json: String,
    assets: AssetPaths,
}

impl<'g, G: VisualGraph> Network<'g, G> {
    /// Validate sizes and merge physics overrides. No file is touched here.
    pub fn new(graph: &'g G, options: NetworkOptions) -> Result<Self, RenderError> {
        // Sizes are validated before anything touches the filesystem
        let width = dimension::normalize("width", &options.width)?;
        let height = dimension::normalize("height", &options.height)?;
        // Physics payload is fixed at construction
        let physics = PhysicsOptions::with_overrides(options.physics.as_ref());
        let physics_json = physics.to_json()?;

        debug!(%width, %height, bgcolor = %options.bgcolor, "configured network");

        Ok(Self {
            graph,
            width,
            height,
            bgcolor: options.bgcolor,
            physics,
            physics_json,
            assets: options.assets,
        })
    }

    pub fn width(&self) -> &NormalizedDimension {
        &self.width
    }

    pub fn height(&self) -> &NormalizedDimension {
        &self.height
    }

    pub fn bgcolor(&self) -> &str {
        &self.bgcolor
    }

    pub fn physics(&self) -> &PhysicsOptions {
        &self.physics
    }

    /// Build the complete HTML document without writing it anywhere.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        // All assets are read before any output is produced
        let assets = Assets::load(&self.assets)?;

        // Flatten nodes and edges into frontend records
        let data = GraphData::from_graph(self.graph)?;

        let nodes_json = serde_json::to_string(&data.nodes)?;
        let edges_json = serde_json::to_string(&data.edges)?;

        // CSS, JS and JSON payloads are inlined verbatim, without escaping
        let html = template::render(
            &assets.template,
            &[
                ("WIDTH", self.width.as_str()),
                ("HEIGHT", self.height.as_str()),
                ("BG_COLOR", &self.bgcolor),
                ("SLIDER_CSS", &assets.slider_css),
                ("VIS_CSS", &assets.vis_css),
                ("VIS_JS", &assets.vis_js),
                ("CANVAS2SVG_JS", &assets.canvas2svg_js),
                ("NODES", &nodes_json),
                ("EDGES", &edges_json),
                ("OPTIONS_PHYSICS", &self.physics_json),
            ],
        );

        Ok(html)
    }

    /// Render and write the page to `path`, replacing any existing file.
    ///
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub fn draw(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let html = self.render_to_string()?;

        // Truncates and replaces any existing file
        fs::write(path, &html).map_err(|source| RenderError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), bytes = html.len(), "wrote network");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvsvg_graph::AttrGraph;

    fn graph() -> AttrGraph<String> {
        let mut graph = AttrGraph::new();
        graph.add_edge("A".to_string(), "B".to_string(), Attributes::new());
        graph
    }

    #[test]
    fn test_defaults() {
        let graph = graph();
        let network = Network::new(&graph, NetworkOptions::default()).unwrap();

        assert_eq!(network.width().as_str(), "100%");
        assert_eq!(network.height().as_str(), "800px");
        assert_eq!(network.bgcolor(), "#ffffff");
        assert_eq!(network.physics(), &PhysicsOptions::default());
    }

    #[test]
    fn test_invalid_height_fails_before_io() {
        let graph = graph();
        let options = NetworkOptions {
            height: Dimension::from("800"),
            assets: AssetPaths::from_root("/nonexistent/pvsvg-assets"),
            ..NetworkOptions::default()
        };

        match Network::new(&graph, options) {
            Err(RenderError::InvalidDimension { axis, value }) => {
                assert_eq!(axis, "height");
                assert_eq!(value, "800");
            }
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_assets_leave_no_output() {
        let graph = graph();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        let options = NetworkOptions {
            assets: AssetPaths::from_root(dir.path().join("missing")),
            ..NetworkOptions::default()
        };

        let network = Network::new(&graph, options).unwrap();
        let err = network.draw(&output).unwrap_err();

        assert!(matches!(err, RenderError::AssetNotFound { .. }));
        assert!(!output.exists());
    }
}
