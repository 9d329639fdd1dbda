//! Manifest command implementation.
//!
//! Prints the files a pipeline would write, without rendering anything.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::error::{IconError, Result};
use crate::export::entry_path;
use crate::layout::{default_root, Layout};
use crate::output::{plural, Printer};
use crate::types::{manifest, Artifact, ExportEntry, Pipeline};

use super::compose::MASTER_SIZE;

/// List the files a pipeline writes
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Pipeline to list
    #[arg(long, value_enum, default_value_t = Pipeline::Compose)]
    pub pipeline: Pipeline,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Repository root (default: this crate's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// One line of the listing.
#[derive(Debug, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    #[serde(flatten)]
    pub entry: ExportEntry,
}

pub fn run(args: ManifestArgs, printer: &Printer) -> Result<()> {
    let root = args.root.unwrap_or_else(default_root);
    let layout = Layout::load(&root)?;
    let planned = plan(&layout, args.pipeline);

    if args.json {
        println!("{}", to_json(&planned)?);
    } else {
        print!("{}", format_listing(&planned, args.pipeline));
    }

    printer.info(
        "Listed",
        &format!(
            "{} for the {} pipeline",
            plural(planned.len(), "file", "files"),
            args.pipeline
        ),
    );

    Ok(())
}

/// Planned output paths, relative to the repository root.
pub fn plan(layout: &Layout, pipeline: Pipeline) -> Vec<PlannedFile> {
    manifest(pipeline)
        .into_iter()
        .map(|entry| PlannedFile {
            path: entry_path(Path::new(""), layout, &entry),
            entry,
        })
        .collect()
}

/// Pretty-printed JSON listing.
pub fn to_json(planned: &[PlannedFile]) -> Result<String> {
    serde_json::to_string_pretty(planned).map_err(|e| IconError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: Some("Output paths must be valid UTF-8 to list as JSON".to_string()),
    })
}

/// One `path  size` line per file. Resize masters keep the source's size.
pub fn format_listing(planned: &[PlannedFile], pipeline: Pipeline) -> String {
    let width = planned
        .iter()
        .map(|p| p.path.display().to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for file in planned {
        let size = match (file.entry.artifact, pipeline) {
            (Artifact::Master, Pipeline::Resize) => "source".to_string(),
            _ => {
                let (w, h) = file.entry.dimensions(MASTER_SIZE);
                format!("{}x{}", w, h)
            }
        };
        out.push_str(&format!("{:<width$}  {}\n", file.path.display().to_string(), size));
    }
    out
}
