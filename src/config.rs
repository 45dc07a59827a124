//! Configuration persistence for snaptext settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::overlay::JoinOrder;

/// Serializable color representation for config storage (straight alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl OverlayColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to image crate RGBA format
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<OverlayColor> for tiny_skia::Color {
    fn from(c: OverlayColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// Colors and metrics used when drawing the overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Region outline color
    pub outline_color: OverlayColor,
    /// Region outline thickness in pixels, outlines are skipped at 0
    pub outline_width: f32,
    /// Fill drawn under selected regions
    pub highlight_color: OverlayColor,
    /// Selected-text banner background
    pub banner_color: OverlayColor,
    pub text_color: OverlayColor,
    /// Font size in pixels
    pub text_size: f32,
    /// Gap between the view edge and the banner
    pub padding: f32,
    pub corner_radius: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            outline_color: OverlayColor::rgb(255, 0, 0),
            outline_width: 4.0,
            highlight_color: OverlayColor::argb(120, 0, 150, 255),
            banner_color: OverlayColor::argb(180, 0, 0, 0),
            text_color: OverlayColor::WHITE,
            text_size: 42.0,
            padding: 24.0,
            corner_radius: 16.0,
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub style: OverlayStyle,
    /// How selected regions are ordered in the selected text
    #[serde(default)]
    pub join_order: JoinOrder,
}

impl OverlayConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "snaptext";

    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            log::error!("No config directory available, not saving config");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {:?}", err);
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }
}
