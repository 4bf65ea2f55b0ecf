//! Assertion helpers for scenario checks.

use overlay_scroll::{Axis, HeadlessViewport, ScrollbarRenderInfo, ThumbLayout};

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

/// Expected thumb state; unset fields are not checked
#[derive(Debug, Clone, Copy, Default)]
pub struct ThumbExpectation {
    pub visible: Option<bool>,
    pub offset: Option<f32>,
    pub length: Option<f32>,
    pub tolerance: f32,
}

pub fn evaluate_assert_thumb(
    axis: Axis,
    expected: &ThumbExpectation,
    host: &HeadlessViewport,
) -> AssertionResult {
    let thumb: ThumbLayout = host.thumb(axis);
    if let Some(visible) = expected.visible {
        if thumb.visible != visible {
            return AssertionResult::failed(
                "thumb_visibility",
                format!("{axis:?} thumb: expected visible={visible}, got {}", thumb.visible),
            );
        }
    }
    if let Some(offset) = expected.offset {
        if (thumb.offset - offset).abs() > expected.tolerance {
            return AssertionResult::failed(
                "thumb_offset",
                format!("{axis:?} thumb: expected offset {offset}, got {}", thumb.offset),
            );
        }
    }
    if let Some(length) = expected.length {
        if (thumb.length - length).abs() > expected.tolerance {
            return AssertionResult::failed(
                "thumb_length",
                format!("{axis:?} thumb: expected length {length}, got {}", thumb.length),
            );
        }
    }
    AssertionResult::Passed
}

pub fn evaluate_assert_scroll(
    axis: Axis,
    expected: f32,
    tolerance: f32,
    host: &HeadlessViewport,
) -> AssertionResult {
    let actual = host.scroll(axis);
    if (actual - expected).abs() <= tolerance {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "scroll_mismatch",
            format!("{axis:?} scroll: expected {expected}, got {actual}"),
        )
    }
}

pub fn evaluate_assert_listeners(expected: usize, host: &HeadlessViewport) -> AssertionResult {
    let actual = host.active_listeners();
    if actual == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "listener_count",
            format!("expected {expected} surface listeners, got {actual}"),
        )
    }
}

pub fn evaluate_assert_conflicted(expected: bool, info: &ScrollbarRenderInfo) -> AssertionResult {
    if info.conflicted == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "conflict_mismatch",
            format!("expected conflicted={expected}, got {}", info.conflicted),
        )
    }
}
