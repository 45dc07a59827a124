//! Tap-to-select overlay for recognized text regions
//!
//! Recognition results come in as [`domain::TextRegion`]s. The host owns an
//! [`overlay::OverlayState`], routes presses through
//! [`overlay::handle_press`] and draws with [`render::draw_overlay`].

pub mod config;
pub mod domain;
pub mod overlay;
pub mod render;
