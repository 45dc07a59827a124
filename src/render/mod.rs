//! Overlay rendering module
//!
//! This module contains:
//! - Drawing capability traits the host provides
//! - Composition of region boxes and the selected-text banner
//! - A tiny-skia raster backend (for previews and saving to file)

pub mod compose;
pub mod raster;
pub mod surface;

pub use compose::draw_overlay;
pub use raster::{MonospaceLayouter, RasterSurface};
pub use surface::{RectF, Surface, TextBlock, TextLayouter};
