//! Recognized text regions and their identity keys

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// One recognized piece of text and where it sits in the view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextRegion {
    pub text: String,
    pub bounds: Rect,
}

impl TextRegion {
    pub fn new(text: impl Into<String>, bounds: Rect) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }
}

/// Identity of a region inside one region sequence
///
/// Two regions with the same text and bounds still get different ids.
/// The generation changes every time the sequence is replaced, so an id
/// taken from an older sequence never matches a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId {
    pub(crate) generation: u64,
    pub(crate) index: usize,
}

impl RegionId {
    /// Position of the region in its sequence
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Parse a JSON array of regions
pub fn parse_regions(json: &str) -> anyhow::Result<Vec<TextRegion>> {
    serde_json::from_str(json).context("Invalid region list")
}

/// Load a JSON array of regions from disk
pub fn load_regions(path: &Path) -> anyhow::Result<Vec<TextRegion>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read regions from {}", path.display()))?;
    let regions = parse_regions(&json)?;
    log::debug!("Loaded {} regions from {}", regions.len(), path.display());
    Ok(regions)
}
