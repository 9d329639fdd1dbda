//! Export manifest: which files get written, where, and at what size.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Splash screen width in pixels.
pub const SPLASH_WIDTH: u32 = 1284;

/// Splash screen height in pixels.
pub const SPLASH_HEIGHT: u32 = 2778;

/// How far above the vertical centre the splash icon sits.
pub const SPLASH_LIFT: u32 = 200;

/// Favicon size for the mobile bundle.
pub const MOBILE_FAVICON_SIZE: u32 = 48;

/// Web icons, smallest first.
pub const WEB_ICONS: [(&str, u32); 11] = [
    ("favicon-16x16.png", 16),
    ("favicon-32x32.png", 32),
    ("icon-72.png", 72),
    ("icon-96.png", 96),
    ("icon-128.png", 128),
    ("icon-144.png", 144),
    ("icon-152.png", 152),
    ("apple-touch-icon.png", 180),
    ("icon-192.png", 192),
    ("icon-384.png", 384),
    ("icon-512.png", 512),
];

/// Where the master image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    /// Master drawn from scratch by the composer.
    Compose,
    /// Master loaded from the existing `icon.png`.
    Resize,
}

impl Pipeline {
    /// Edge length of the icon pasted onto the splash screen.
    pub fn splash_icon_size(self) -> u32 {
        match self {
            Pipeline::Compose => 600,
            Pipeline::Resize => 800,
        }
    }

    /// The resize pipeline reads the source icon, so it must not overwrite it.
    pub fn writes_icon(self) -> bool {
        matches!(self, Pipeline::Compose)
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::Compose => write!(f, "compose"),
            Pipeline::Resize => write!(f, "resize"),
        }
    }
}

/// Output root an entry is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// The layout's source path itself, so resize reads what compose wrote.
    Source,
    Mobile,
    Web,
}

/// What gets rendered into an entry's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "size")]
pub enum Artifact {
    /// The master at full resolution.
    Master,
    /// The master resampled to a square of this edge length.
    Square(u32),
    /// The portrait launch screen.
    Splash,
}

/// One output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    pub file_name: &'static str,
    pub destination: Destination,
    pub artifact: Artifact,
}

impl ExportEntry {
    pub const fn new(file_name: &'static str, destination: Destination, artifact: Artifact) -> Self {
        Self {
            file_name,
            destination,
            artifact,
        }
    }

    /// Output dimensions given the master's edge length.
    pub fn dimensions(&self, master_size: u32) -> (u32, u32) {
        match self.artifact {
            Artifact::Master => (master_size, master_size),
            Artifact::Square(size) => (size, size),
            Artifact::Splash => (SPLASH_WIDTH, SPLASH_HEIGHT),
        }
    }
}

/// Mobile entries for a pipeline, in write order.
pub fn mobile_entries(pipeline: Pipeline) -> Vec<ExportEntry> {
    let mut entries = Vec::with_capacity(4);
    if pipeline.writes_icon() {
        entries.push(ExportEntry::new("icon.png", Destination::Source, Artifact::Master));
    }
    entries.push(ExportEntry::new(
        "adaptive-icon.png",
        Destination::Mobile,
        Artifact::Master,
    ));
    entries.push(ExportEntry::new(
        "favicon.png",
        Destination::Mobile,
        Artifact::Square(MOBILE_FAVICON_SIZE),
    ));
    entries.push(ExportEntry::new("splash.png", Destination::Mobile, Artifact::Splash));
    entries
}

/// Web entries, in write order.
pub fn web_entries() -> Vec<ExportEntry> {
    WEB_ICONS
        .iter()
        .map(|&(name, size)| ExportEntry::new(name, Destination::Web, Artifact::Square(size)))
        .collect()
}

/// The full manifest for a pipeline: mobile first, then web.
pub fn manifest(pipeline: Pipeline) -> Vec<ExportEntry> {
    let mut entries = mobile_entries(pipeline);
    entries.extend(web_entries());
    entries
}
