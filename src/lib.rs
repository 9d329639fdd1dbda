//! doto-icons - DOTO app icon generator
//!
//! Draws the DOTO logo (angel wings, halo, checkmark) from geometric
//! primitives, then resamples it into the mobile and web icon sets.

pub mod cli;
pub mod error;
pub mod export;
pub mod layout;
pub mod output;
pub mod render;
pub mod types;

pub use error::{IconError, Result};
pub use export::{export_all, ExportReport, WrittenFile};
pub use layout::Layout;
pub use render::{compose_icon, compose_splash, load_master, resize_square, write_png, Canvas};
pub use types::{Artifact, Colour, Destination, ExportEntry, Pipeline, Point, Rect, Shape};
