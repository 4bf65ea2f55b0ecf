//! Scenario definition for headless scroll runs.

use std::path::Path;

use anyhow::{Context, Result};
use overlay_scroll::{Axis, Point, ScrollAreaConfig, Size};
use serde::Deserialize;

fn default_tolerance() -> f32 {
    0.01
}

/// Starting geometry plus a sequence of steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: Size,
    pub content: Size,
    /// Screen-space top-left of the viewport box
    #[serde(default)]
    pub origin: Point,
    /// Snap scroll writes to device pixels
    #[serde(default)]
    pub pixel_ratio: Option<f32>,
    /// Initial configuration; `--config` takes precedence
    #[serde(default)]
    pub config: Option<ScrollAreaConfig>,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing scenario {}", path.display()))
    }
}

/// One thing that happens to the viewport, or one check on its state.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    ResizeViewport {
        width: f32,
        height: f32,
    },
    ResizeContent {
        width: f32,
        height: f32,
    },
    ScrollTo {
        axis: Axis,
        value: f32,
    },
    /// Press a thumb. Without `axis` the press is hit tested.
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        axis: Option<Axis>,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    CaptureLost,
    SetConfig {
        config: ScrollAreaConfig,
    },
    AssertThumb {
        axis: Axis,
        #[serde(default)]
        visible: Option<bool>,
        #[serde(default)]
        offset: Option<f32>,
        #[serde(default)]
        length: Option<f32>,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    AssertScroll {
        axis: Axis,
        value: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    AssertListeners {
        count: usize,
    },
    AssertConflicted {
        value: bool,
    },
}

impl ScenarioStep {
    /// Step name as written in the scenario file
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::ResizeViewport { .. } => "resize_viewport",
            ScenarioStep::ResizeContent { .. } => "resize_content",
            ScenarioStep::ScrollTo { .. } => "scroll_to",
            ScenarioStep::PointerDown { .. } => "pointer_down",
            ScenarioStep::PointerMove { .. } => "pointer_move",
            ScenarioStep::PointerUp => "pointer_up",
            ScenarioStep::CaptureLost => "capture_lost",
            ScenarioStep::SetConfig { .. } => "set_config",
            ScenarioStep::AssertThumb { .. } => "assert_thumb",
            ScenarioStep::AssertScroll { .. } => "assert_scroll",
            ScenarioStep::AssertListeners { .. } => "assert_listeners",
            ScenarioStep::AssertConflicted { .. } => "assert_conflicted",
        }
    }
}
