//! Pure domain types with minimal dependencies
//!
//! Nothing in here knows about drawing or input handling.

pub mod geometry;
pub mod region;

pub use geometry::*;
pub use region::*;
