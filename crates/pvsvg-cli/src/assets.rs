use crate::error::RenderError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Asset root shipped with the crate.
pub const BUNDLED_ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Locations of the template, stylesheets and scripts inlined into every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub template: PathBuf,
    pub slider_css: PathBuf,
    pub vis_css: PathBuf,
    pub vis_js: PathBuf,
    pub canvas2svg_js: PathBuf,
}

impl AssetPaths {
    /// Resolve the fixed asset layout under `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            template: root.join("templates").join("template.html"),
            slider_css: root.join("styles").join("slider.css"),
            vis_css: root.join("styles").join("vis-network.min.css"),
            vis_js: root.join("scripts").join("vis.js"),
            canvas2svg_js: root.join("scripts").join("canvas2svg.js"),
        }
    }

    pub fn bundled() -> Self {
        Self::from_root(BUNDLED_ASSET_DIR)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Asset contents read for a single render.
#[derive(Debug, Clone)]
pub struct Assets {
    pub template: String,
    pub slider_css: String,
    pub vis_css: String,
    pub vis_js: String,
    pub canvas2svg_js: String,
}

fn read_asset(path: &Path) -> Result<String, RenderError> {
    let content = fs::read_to_string(path).map_err(|source| RenderError::AssetNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded asset");
    Ok(content)
}

impl Assets {
    /// Read every asset, failing on the first one that is missing or unreadable.
    pub fn load(paths: &AssetPaths) -> Result<Self, RenderError> {
        Ok(Self {
            template: read_asset(&paths.template)?,
            slider_css: read_asset(&paths.slider_css)?,
            vis_css: read_asset(&paths.vis_css)?,
            vis_js: read_asset(&paths.vis_js)?,
            canvas2svg_js: read_asset(&paths.canvas2svg_js)?,
        })
    }
}
