//! Output layout (icons.yaml).
//!
//! The layout decides where the source image lives and which directories the
//! mobile and web icons go to. All paths are relative to the repository root.
//! Without an `icons.yaml`, the defaults match the app's asset tree.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::Destination;

/// File name of the optional layout file at the repository root.
pub const LAYOUT_FILE: &str = "icons.yaml";

/// Where icons are read from and written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Master image: written by compose, read by resize.
    pub source: PathBuf,

    /// Directory for `adaptive-icon.png`, `favicon.png`, `splash.png`.
    pub mobile_dir: PathBuf,

    /// Directory for the web icon set.
    pub web_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets/icon.png"),
            mobile_dir: PathBuf::from("assets"),
            web_dir: PathBuf::from("webapp/public/icons"),
        }
    }
}

impl Layout {
    /// Parse a layout from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid layout: {}", e),
            help: Some(format!("Check {} syntax", LAYOUT_FILE)),
        })
    }

    /// Load `icons.yaml` from `root`, or the defaults if there is none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(LAYOUT_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| IconError::Io {
            path: path.clone(),
            message: format!("Failed to read layout: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Directory for a destination, relative to the root.
    pub fn dir(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Source => self.source.parent().unwrap_or(Path::new("")),
            Destination::Mobile => &self.mobile_dir,
            Destination::Web => &self.web_dir,
        }
    }
}

/// Default repository root: the directory holding this crate's Cargo.toml.
pub fn default_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
