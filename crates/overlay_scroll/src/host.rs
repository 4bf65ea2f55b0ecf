//! Host capabilities
//!
//! The engine never touches a real element tree. The embedding UI layer
//! implements these traits for whatever it renders the viewport and the two
//! scrollbars with, then hands that value to [`ScrollSync::mount`].
//!
//! [`ScrollSync::mount`]: crate::engine::ScrollSync::mount

use crate::geometry::{Axis, Point};
use crate::layout::{ThumbLayout, TrackLayout};

/// Anything that can report scroll geometry and accept a scroll-offset write
///
/// A plain scrolling box, a text area with a mirrored overlay, or a test
/// double all qualify. Every accessor must return the live value.
pub trait ScrollViewport {
    /// Visible extent of the viewport box along `axis`
    fn viewport_extent(&self, axis: Axis) -> f32;

    /// Scrollable extent of the content along `axis`
    fn content_extent(&self, axis: Axis) -> f32;

    /// Current native scroll offset along `axis`
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Write the native scroll offset along `axis`
    ///
    /// Hosts are expected to clamp to `[0, content - viewport]` the way a
    /// native scroll container does.
    fn set_scroll_offset(&mut self, axis: Axis, value: f32);
}

/// The two rendered tracks and their thumbs
pub trait ScrollbarSurface {
    /// Screen-space top-left of the track for `axis`
    fn track_origin(&self, axis: Axis) -> Point;

    /// Place the track for `axis`. Called every pass, overwriting the previous value.
    fn apply_track(&mut self, axis: Axis, track: &TrackLayout);

    /// Place or hide the thumb for `axis`. Called every pass, overwriting the previous value.
    fn apply_thumb(&mut self, axis: Axis, thumb: &ThumbLayout);
}

/// Handle for one pair of surface-wide pointer listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureId(u64);

impl CaptureId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Surface-wide pointer listener registration
///
/// While a thumb is dragged the engine needs move and release events from the
/// whole input surface, not just the thumb. `capture` registers both
/// listeners, `release` removes them. The engine calls `release` exactly once
/// for every `capture`.
pub trait PointerCapture {
    fn capture(&mut self, axis: Axis) -> CaptureId;

    fn release(&mut self, id: CaptureId);
}

/// Everything the engine needs from its host
pub trait ScrollHost: ScrollViewport + ScrollbarSurface + PointerCapture {}

impl<T> ScrollHost for T where T: ScrollViewport + ScrollbarSurface + PointerCapture {}
