pub mod compose;
pub mod manifest;
pub mod resize;

use clap::{Parser, Subcommand};

/// doto-icons - DOTO app icon generator
#[derive(Parser, Debug)]
#[command(name = "doto-icons")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the icon procedurally and write every size
    Compose(compose::ComposeArgs),

    /// Derive all icon sizes from the existing icon.png
    Resize(resize::ResizeArgs),

    /// List the files a pipeline writes
    Manifest(manifest::ManifestArgs),
}
