//! Rendering module for doto-icons.
//!
//! This module draws the master icon from shapes, resamples it into derived
//! artwork and reads/writes PNG files.

mod canvas;
pub mod icon;
mod png;
mod resample;

pub use canvas::Canvas;
pub use icon::{compose_icon, IconGeometry};
pub use png::{load_master, write_png, LoadedMaster};
pub use resample::{compose_splash, resize_square, splash_origin};
