//! Compose command implementation.
//!
//! Draws the master icon from scratch and exports the full icon set.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{export_all, ExportReport};
use crate::layout::{default_root, Layout};
use crate::output::Printer;
use crate::render::compose_icon;
use crate::types::Pipeline;

/// Edge length of the composed master.
pub const MASTER_SIZE: u32 = 1024;

/// Draw the icon procedurally and write every size
#[derive(Args, Debug, Default)]
pub struct ComposeArgs {
    /// Repository root (default: this crate's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: ComposeArgs, printer: &Printer) -> Result<ExportReport> {
    let root = args.root.unwrap_or_else(default_root);
    let layout = Layout::load(&root)?;

    printer.status(
        "Composing",
        &format!("base icon ({}x{})", MASTER_SIZE, MASTER_SIZE),
    );
    let master = compose_icon(MASTER_SIZE);

    export_all(&master, &root, &layout, Pipeline::Compose, printer)
}
