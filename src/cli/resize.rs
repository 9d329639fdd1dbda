//! Resize command implementation.
//!
//! Loads the existing master `icon.png` and derives every other size from it.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{export_all, ExportReport};
use crate::layout::{default_root, Layout};
use crate::output::{display_path, Printer};
use crate::render::load_master;
use crate::types::Pipeline;

/// Derive all icon sizes from the existing icon.png
#[derive(Args, Debug, Default)]
pub struct ResizeArgs {
    /// Repository root (default: this crate's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: ResizeArgs, printer: &Printer) -> Result<ExportReport> {
    let root = args.root.unwrap_or_else(default_root);
    let layout = Layout::load(&root)?;
    let source = root.join(&layout.source);

    printer.status("Loading", &display_path(&source, &root));
    let loaded = load_master(&source)?;

    let (width, height) = loaded.image.dimensions();
    printer.info("Source", &format!("{}x{}", width, height));
    if let Some(colour) = loaded.converted_from {
        printer.info("Converted", &format!("{:?} to RGBA", colour));
    }

    export_all(&loaded.image, &root, &layout, Pipeline::Resize, printer)
}
