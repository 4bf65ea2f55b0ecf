//! In-memory host
//!
//! [`HeadlessViewport`] behaves like a native scroll container without any
//! UI behind it: scroll writes are clamped to the scroll range (and
//! optionally snapped to device pixels), applied track/thumb layouts are
//! recorded, and surface-wide listeners live in a slot map so leaks are easy
//! to spot. It backs the crate's tests and the scenario runner.

use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::config::GutterPlacement;
use crate::geometry::{Axis, AxisPair, Point, Size};
use crate::host::{CaptureId, PointerCapture, ScrollViewport, ScrollbarSurface};
use crate::layout::{ThumbLayout, TrackLayout};

new_key_type! {
    /// Registered surface listener
    pub struct ListenerKey;
    /// Registered drag capture (one move + one release listener)
    pub struct CaptureKey;
}

/// Kind of surface-wide listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

#[derive(Debug, Clone, Copy)]
struct CaptureEntry {
    axis: Axis,
    listeners: [ListenerKey; 2],
}

/// A scroll container that exists only in memory
#[derive(Debug, Clone)]
pub struct HeadlessViewport {
    viewport: Size,
    content: Size,
    scroll: Point,
    /// Screen-space top-left of the viewport box
    origin: Point,
    placement: GutterPlacement,
    /// Device pixel ratio used to snap scroll writes, if any
    pixel_ratio: Option<f32>,
    tracks: AxisPair<TrackLayout>,
    /// Scroll offset each track was rendered at
    track_scroll: AxisPair<Point>,
    thumbs: AxisPair<ThumbLayout>,
    apply_count: usize,
    scroll_writes: Vec<(Axis, f32)>,
    listeners: SlotMap<ListenerKey, ListenerKind>,
    captures: SlotMap<CaptureKey, CaptureEntry>,
    release_misses: usize,
}

impl HeadlessViewport {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport,
            content,
            scroll: Point::ZERO,
            origin: Point::ZERO,
            placement: GutterPlacement::Sticky,
            pixel_ratio: None,
            tracks: AxisPair::default(),
            track_scroll: AxisPair::default(),
            thumbs: AxisPair::default(),
            apply_count: 0,
            scroll_writes: Vec::new(),
            listeners: SlotMap::with_key(),
            captures: SlotMap::with_key(),
            release_misses: 0,
        }
    }

    /// Place the viewport box on screen
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Snap scroll writes to `1 / ratio` pixels, like a browser does
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = (ratio > 0.0).then_some(ratio);
        self
    }

    /// Interpret applied track rects as sticky or absolute gutters
    pub fn with_placement(mut self, placement: GutterPlacement) -> Self {
        self.placement = placement;
        self
    }

    // =========================================================================
    // External changes
    // =========================================================================

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.clamp_scroll();
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
        self.clamp_scroll();
    }

    /// Move the viewport box on screen
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn set_placement(&mut self, placement: GutterPlacement) {
        self.placement = placement;
    }

    /// Scroll from outside the engine (wheel, keyboard, script)
    pub fn scroll_to(&mut self, axis: Axis, value: f32) {
        let clamped = self.clamp_axis(axis, value);
        self.set_axis(axis, clamped);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn scroll(&self, axis: Axis) -> f32 {
        self.scroll.along(axis)
    }

    /// Last applied track layout
    pub fn track(&self, axis: Axis) -> TrackLayout {
        *self.tracks.get(axis)
    }

    /// Last applied thumb layout
    pub fn thumb(&self, axis: Axis) -> ThumbLayout {
        *self.thumbs.get(axis)
    }

    /// Number of completed passes (both thumbs applied)
    pub fn apply_count(&self) -> usize {
        self.apply_count
    }

    /// Every scroll write the engine issued, in order
    pub fn scroll_writes(&self) -> &[(Axis, f32)] {
        &self.scroll_writes
    }

    /// Surface listeners currently registered
    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Surface listeners of one kind currently registered
    pub fn listeners_of(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Drag captures currently held
    pub fn active_captures(&self) -> usize {
        self.captures.len()
    }

    /// Whether `axis` currently holds a capture
    pub fn is_captured(&self, axis: Axis) -> bool {
        self.captures.values().any(|entry| entry.axis == axis)
    }

    /// Releases for unknown or already released captures
    pub fn release_misses(&self) -> usize {
        self.release_misses
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn clamp_axis(&self, axis: Axis, value: f32) -> f32 {
        let range = (self.content.along(axis) - self.viewport.along(axis)).max(0.0);
        value.clamp(0.0, range)
    }

    fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.scroll.x = value,
            Axis::Vertical => self.scroll.y = value,
        }
    }

    fn clamp_scroll(&mut self) {
        for axis in Axis::ALL {
            let clamped = self.clamp_axis(axis, self.scroll.along(axis));
            self.set_axis(axis, clamped);
        }
    }
}

impl ScrollViewport for HeadlessViewport {
    fn viewport_extent(&self, axis: Axis) -> f32 {
        self.viewport.along(axis)
    }

    fn content_extent(&self, axis: Axis) -> f32 {
        self.content.along(axis)
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        self.scroll.along(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f32) {
        let snapped = match self.pixel_ratio {
            Some(ratio) => (value * ratio).round() / ratio,
            None => value,
        };
        let clamped = self.clamp_axis(axis, snapped);
        self.scroll_writes.push((axis, clamped));
        self.set_axis(axis, clamped);
    }
}

impl ScrollbarSurface for HeadlessViewport {
    /// Where the track was last drawn on screen
    ///
    /// Absolute gutters are placed in content coordinates, so the scroll
    /// offset at render time is subtracted back out.
    fn track_origin(&self, axis: Axis) -> Point {
        let rect = self.tracks.get(axis).rect;
        let rendered_at = *self.track_scroll.get(axis);
        let (dx, dy) = match self.placement {
            GutterPlacement::Sticky => (0.0, 0.0),
            GutterPlacement::Absolute => (rendered_at.x, rendered_at.y),
        };
        Point::new(self.origin.x + rect.x - dx, self.origin.y + rect.y - dy)
    }

    fn apply_track(&mut self, axis: Axis, track: &TrackLayout) {
        *self.tracks.get_mut(axis) = *track;
        *self.track_scroll.get_mut(axis) = self.scroll;
    }

    fn apply_thumb(&mut self, axis: Axis, thumb: &ThumbLayout) {
        *self.thumbs.get_mut(axis) = *thumb;
        if axis == Axis::Vertical {
            self.apply_count += 1;
        }
    }
}

impl PointerCapture for HeadlessViewport {
    fn capture(&mut self, axis: Axis) -> CaptureId {
        let listeners = [
            self.listeners.insert(ListenerKind::PointerMove),
            self.listeners.insert(ListenerKind::PointerUp),
        ];
        let key = self.captures.insert(CaptureEntry { axis, listeners });
        CaptureId::from_raw(key.data().as_ffi())
    }

    fn release(&mut self, id: CaptureId) {
        let key = CaptureKey::from(KeyData::from_ffi(id.raw()));
        match self.captures.remove(key) {
            Some(entry) => {
                for listener in entry.listeners {
                    self.listeners.remove(listener);
                }
            }
            None => {
                tracing::warn!("release of unknown capture {:?}", id);
                self.release_misses += 1;
            }
        }
    }
}
