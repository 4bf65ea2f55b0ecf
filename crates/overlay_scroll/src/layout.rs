//! Track and thumb layout
//!
//! Pure functions from a [`GeometrySnapshot`] and a [`ScrollAreaConfig`] to
//! track placement and thumb size/offset. The engine decides per axis whether
//! the thumb offset comes from the native scroll offset (here) or from an
//! active drag session (see [`crate::drag`]).

use crate::config::{GutterPlacement, ScrollAreaConfig};
use crate::geometry::{Axis, AxisGeometry, GeometrySnapshot, Insets, Point, Rect, Size};

// ============================================================================
// Layout output
// ============================================================================

/// Placement of one track, handed to [`ScrollbarSurface::apply_track`]
///
/// [`ScrollbarSurface::apply_track`]: crate::host::ScrollbarSurface::apply_track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Track box, viewport-local for sticky gutters, content-local for absolute ones
    pub rect: Rect,
    /// Extent along the axis (the thumb's travel space)
    pub length: f32,
    /// Insets the rect was derived from
    pub insets: Insets,
    /// Both axes overflow and the conflicted insets were applied
    pub conflicted: bool,
    /// Content overflows this axis. Hosts may hide the track when false.
    pub scrollable: bool,
}

/// Thumb size and position within its track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbLayout {
    pub visible: bool,
    /// Distance from the track's leading edge
    pub offset: f32,
    /// Extent along the axis
    pub length: f32,
}

impl ThumbLayout {
    pub const HIDDEN: ThumbLayout = ThumbLayout {
        visible: false,
        offset: 0.0,
        length: 0.0,
    };

    /// Offset range end
    pub fn end(&self) -> f32 {
        self.offset + self.length
    }
}

/// Track plus thumb for one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLayout {
    pub track: TrackLayout,
    pub thumb: ThumbLayout,
}

// ============================================================================
// Formulas
// ============================================================================

/// Thumb length proportional to the visible share of the content
///
/// `max(min, track * viewport / content)`, capped at the track length.
pub fn thumb_length(track_length: f32, viewport: f32, content: f32, min: f32) -> f32 {
    let track_length = track_length.max(0.0);
    let proportional = if content > 0.0 {
        (track_length / content) * viewport
    } else {
        track_length
    };
    proportional.max(min).min(track_length)
}

/// Thumb offset for a native scroll offset
///
/// Maps `[0, scroll_range]` linearly onto `[0, travel]`. Pins to 0 when
/// either range is empty.
pub fn thumb_offset_for_scroll(travel: f32, scroll: f32, scroll_range: f32) -> f32 {
    if travel <= 0.0 || scroll_range <= 0.0 {
        return 0.0;
    }
    ((travel * scroll) / scroll_range).clamp(0.0, travel)
}

/// Native scroll offset for a thumb offset, the inverse of [`thumb_offset_for_scroll`]
pub fn scroll_for_thumb_offset(travel: f32, offset: f32, scroll_range: f32) -> f32 {
    if travel <= 0.0 || scroll_range <= 0.0 {
        return 0.0;
    }
    ((scroll_range * offset) / travel).clamp(0.0, scroll_range)
}

/// Track box inside a viewport of the given size
///
/// The vertical track hugs the trailing edge and the horizontal track the
/// bottom edge. Insets on the opposite cross side do not apply.
pub fn track_rect(axis: Axis, viewport: Size, thickness: f32, insets: Insets) -> Rect {
    match axis {
        Axis::Vertical => Rect::new(
            viewport.width - insets.trailing - thickness,
            insets.top,
            thickness,
            (viewport.height - insets.top - insets.bottom).max(0.0),
        ),
        Axis::Horizontal => Rect::new(
            insets.leading,
            viewport.height - insets.bottom - thickness,
            (viewport.width - insets.leading - insets.trailing).max(0.0),
            thickness,
        ),
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Everything about one axis the thumb math needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMetrics {
    pub axis: Axis,
    pub track: TrackLayout,
    pub thumb_length: f32,
    /// `track.length - thumb_length`, never negative
    pub travel: f32,
    /// `content - viewport`, never negative
    pub scroll_range: f32,
}

impl AxisMetrics {
    /// Resolve track placement and thumb length for `axis`
    pub fn resolve(axis: Axis, geometry: &GeometrySnapshot, config: &ScrollAreaConfig) -> Self {
        let conflicted = geometry.is_conflicted();
        let own = geometry.axis(axis);
        let axis_config = config.axis(axis);
        let insets = config.insets_for(axis, conflicted);

        let mut rect = track_rect(
            axis,
            geometry.viewport_size(),
            axis_config.thickness,
            insets,
        );
        if config.placement == GutterPlacement::Absolute {
            rect = rect.offset(geometry.horizontal.scroll, geometry.vertical.scroll);
        }

        let length = match axis {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        };
        let track = TrackLayout {
            rect,
            length,
            insets,
            conflicted,
            scrollable: own.is_scrollable(),
        };

        let thumb_length = if track.scrollable {
            thumb_length(length, own.viewport, own.content, axis_config.min_thumb_length)
        } else {
            0.0
        };

        Self {
            axis,
            track,
            thumb_length,
            travel: (length - thumb_length).max(0.0),
            scroll_range: own.scroll_range(),
        }
    }

    /// Layout with the thumb following the native scroll offset
    pub fn native(&self, geometry: &AxisGeometry) -> AxisLayout {
        if !self.track.scrollable {
            return self.hidden();
        }
        let offset = thumb_offset_for_scroll(self.travel, geometry.scroll, self.scroll_range);
        self.with_offset(offset)
    }

    /// Layout with the thumb at `offset`, clamped to the travel range
    pub fn with_offset(&self, offset: f32) -> AxisLayout {
        AxisLayout {
            track: self.track,
            thumb: ThumbLayout {
                visible: true,
                offset: offset.clamp(0.0, self.travel),
                length: self.thumb_length,
            },
        }
    }

    /// Layout with the thumb hidden
    pub fn hidden(&self) -> AxisLayout {
        AxisLayout {
            track: self.track,
            thumb: ThumbLayout::HIDDEN,
        }
    }

    /// Native scroll offset that puts the thumb at `offset`
    pub fn scroll_for_offset(&self, offset: f32) -> f32 {
        scroll_for_thumb_offset(self.travel, offset, self.scroll_range)
    }
}

// ============================================================================
// Hit testing
// ============================================================================

/// Result of scrollbar hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarHitResult {
    /// Not over any scrollbar
    None,
    /// Over vertical scrollbar track (but not thumb)
    VerticalTrack,
    /// Over vertical scrollbar thumb
    VerticalThumb,
    /// Over horizontal scrollbar track (but not thumb)
    HorizontalTrack,
    /// Over horizontal scrollbar thumb
    HorizontalThumb,
}

impl ScrollbarHitResult {
    /// Axis of the thumb under the pointer, if any
    pub fn thumb_axis(&self) -> Option<Axis> {
        match self {
            ScrollbarHitResult::VerticalThumb => Some(Axis::Vertical),
            ScrollbarHitResult::HorizontalThumb => Some(Axis::Horizontal),
            _ => None,
        }
    }
}

/// Hit test a screen-space point against one axis
///
/// `origin` is the track's screen-space top-left. Only scrollable axes are hit.
pub fn hit_test_axis(
    axis: Axis,
    origin: Point,
    layout: &AxisLayout,
    point: Point,
) -> ScrollbarHitResult {
    if !layout.track.scrollable {
        return ScrollbarHitResult::None;
    }
    let screen = Rect::new(
        origin.x,
        origin.y,
        layout.track.rect.width,
        layout.track.rect.height,
    );
    if !screen.contains(point) {
        return ScrollbarHitResult::None;
    }

    let along = point.along(axis) - origin.along(axis);
    let on_thumb =
        layout.thumb.visible && along >= layout.thumb.offset && along <= layout.thumb.end();
    match (axis, on_thumb) {
        (Axis::Vertical, true) => ScrollbarHitResult::VerticalThumb,
        (Axis::Vertical, false) => ScrollbarHitResult::VerticalTrack,
        (Axis::Horizontal, true) => ScrollbarHitResult::HorizontalThumb,
        (Axis::Horizontal, false) => ScrollbarHitResult::HorizontalTrack,
    }
}
