//! Core domain types for doto-icons.
//!
//! - `Colour` - RGBA colour values and brand constants
//! - `Point`/`Rect` - canvas geometry
//! - `Shape` - drawable primitives
//! - `ExportEntry` - the output manifest

mod colour;
pub mod export;
mod geometry;
mod shape;

pub use colour::Colour;
pub use export::{manifest, Artifact, Destination, ExportEntry, Pipeline};
pub use geometry::{Point, Rect};
pub use shape::Shape;
