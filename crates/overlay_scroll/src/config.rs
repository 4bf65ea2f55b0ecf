//! Scroll area configuration
//!
//! Configuration is hot: the engine asks its [`ConfigSource`] for the current
//! value at the start of every reconciliation pass and never keeps a copy.
//! [`ConfigHandle`] is the shared, swappable source most hosts want.
//!
//! # TOML
//!
//! ```toml
//! placement = "absolute"
//!
//! [vertical]
//! min_thumb_length = 16.0
//! thickness = 10.0
//! insets = { leading = 0.0, trailing = 2.0, top = 2.0, bottom = 2.0 }
//!
//! [horizontal]
//! conflicted_insets = { leading = 2.0, trailing = 14.0, top = 0.0, bottom = 2.0 }
//! ```

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::{Axis, Insets};

// ============================================================================
// Presets
// ============================================================================

/// Size presets for track thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarSize {
    /// Thin scrollbar (4px)
    Thin,
    /// Normal scrollbar (6px)
    #[default]
    Normal,
    /// Wide scrollbar (10px)
    Wide,
}

impl ScrollbarSize {
    /// Get the thickness in pixels
    pub fn width(&self) -> f32 {
        match self {
            ScrollbarSize::Thin => 4.0,
            ScrollbarSize::Normal => 6.0,
            ScrollbarSize::Wide => 10.0,
        }
    }
}

/// How the gutters are positioned relative to the scrolled content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GutterPlacement {
    /// Track rects are relative to the visible viewport box
    #[default]
    Sticky,
    /// Track rects are in content coordinates, shifted by the scroll offset
    /// so an absolutely positioned gutter stays over the visible box
    Absolute,
}

/// Default edge padding around each track
const DEFAULT_EDGE_PADDING: f32 = 2.0;

// ============================================================================
// Axis Configuration
// ============================================================================

/// Layout settings for one scrollbar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Minimum thumb length in pixels
    pub min_thumb_length: f32,
    /// Track thickness across the axis
    pub thickness: f32,
    /// Insets used when only this axis scrolls
    pub insets: Insets,
    /// Insets used when both axes scroll. When unset, the normal insets
    /// widened by the other track's thickness on the corner side.
    pub conflicted_insets: Option<Insets>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min_thumb_length: 0.0,
            thickness: ScrollbarSize::Normal.width(),
            insets: Insets::uniform(DEFAULT_EDGE_PADDING),
            conflicted_insets: None,
        }
    }
}

impl AxisConfig {
    /// Use a thickness preset
    pub fn with_size(mut self, size: ScrollbarSize) -> Self {
        self.thickness = size.width();
        self
    }

    pub fn with_min_thumb_length(mut self, length: f32) -> Self {
        self.min_thumb_length = length;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_conflicted_insets(mut self, insets: Insets) -> Self {
        self.conflicted_insets = Some(insets);
        self
    }
}

// ============================================================================
// Scroll Area Configuration
// ============================================================================

/// Complete configuration for one scroll area
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollAreaConfig {
    pub horizontal: AxisConfig,
    pub vertical: AxisConfig,
    pub placement: GutterPlacement,
}

impl ScrollAreaConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ScrollAreaConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Same thickness preset on both tracks
    pub fn with_size(mut self, size: ScrollbarSize) -> Self {
        self.horizontal = self.horizontal.with_size(size);
        self.vertical = self.vertical.with_size(size);
        self
    }

    pub fn with_placement(mut self, placement: GutterPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_min_thumb_length(mut self, axis: Axis, length: f32) -> Self {
        self.axis_mut(axis).min_thumb_length = length;
        self
    }

    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConfig {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Insets to apply to the track for `axis`
    pub fn insets_for(&self, axis: Axis, conflicted: bool) -> Insets {
        let own = self.axis(axis);
        if !conflicted {
            return own.insets;
        }
        if let Some(insets) = own.conflicted_insets {
            return insets;
        }
        let corner = self.axis(axis.cross()).thickness;
        match axis {
            Axis::Vertical => own.insets.with_bottom(own.insets.bottom + corner),
            Axis::Horizontal => own.insets.with_trailing(own.insets.trailing + corner),
        }
    }

    /// Reject negative and non-finite lengths
    pub fn validate(&self) -> Result<()> {
        for (name, axis) in [("horizontal", &self.horizontal), ("vertical", &self.vertical)] {
            check(name, "min_thumb_length", axis.min_thumb_length)?;
            check(name, "thickness", axis.thickness)?;
            for value in axis.insets.sides() {
                check(name, "insets", value)?;
            }
            if let Some(insets) = axis.conflicted_insets {
                for value in insets.sides() {
                    check(name, "conflicted_insets", value)?;
                }
            }
        }
        Ok(())
    }
}

fn check(axis: &str, field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field: format!("{axis}.{field}"),
            value,
        })
    }
}

// ============================================================================
// Config sources
// ============================================================================

/// Something the engine can ask for the current configuration
pub trait ConfigSource {
    fn current(&self) -> ScrollAreaConfig;
}

impl ConfigSource for ScrollAreaConfig {
    fn current(&self) -> ScrollAreaConfig {
        *self
    }
}

/// Shared handle to a swappable configuration
///
/// Clones share the same value, so the host can keep one clone and change
/// settings while the engine holds another.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<ScrollAreaConfig>>,
}

impl ConfigHandle {
    pub fn new(config: ScrollAreaConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    pub fn get(&self) -> ScrollAreaConfig {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, config: ScrollAreaConfig) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    pub fn update(&self, f: impl FnOnce(&mut ScrollAreaConfig)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }

    /// Replace the configuration with the contents of a TOML file
    ///
    /// On error the previous configuration stays in place.
    pub fn reload_from_path(&self, path: &Path) -> Result<()> {
        let config = ScrollAreaConfig::load(path)?;
        self.set(config);
        tracing::debug!("reloaded scroll area config from {}", path.display());
        Ok(())
    }
}

impl ConfigSource for ConfigHandle {
    fn current(&self) -> ScrollAreaConfig {
        self.get()
    }
}
