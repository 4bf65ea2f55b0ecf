//! Geometry primitives and the live geometry reader
//!
//! Everything the engine knows about the viewport is read through
//! [`GeometrySnapshot::read`] at the start of a reconciliation pass. Nothing
//! here is cached between passes: the host is the source of truth and its
//! layout may have moved since the last call.

use serde::{Deserialize, Serialize};

use crate::host::{ScrollViewport, ScrollbarSurface};

// ============================================================================
// Axis
// ============================================================================

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left/right scrolling, driven by the horizontal scrollbar
    Horizontal,
    /// Up/down scrolling, driven by the vertical scrollbar
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The other axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A value stored once per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPair<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> AxisPair<T> {
    pub fn new(horizontal: T, vertical: T) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Build a pair by evaluating `f` for each axis (horizontal first)
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let horizontal = f(Axis::Horizontal);
        let vertical = f(Axis::Vertical);
        Self {
            horizontal,
            vertical,
        }
    }
}

// ============================================================================
// Points, sizes, rects
// ============================================================================

/// A point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// A size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive containment test (edges count as inside)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Translate by the given offset
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Four-sided padding of a track inside the viewport box
///
/// `leading`/`trailing` are the left/right edges, `top`/`bottom` the vertical
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub leading: f32,
    pub trailing: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        leading: 0.0,
        trailing: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub fn new(leading: f32, trailing: f32, top: f32, bottom: f32) -> Self {
        Self {
            leading,
            trailing,
            top,
            bottom,
        }
    }

    /// Same inset on every side
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn with_trailing(mut self, trailing: f32) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_bottom(mut self, bottom: f32) -> Self {
        self.bottom = bottom;
        self
    }

    /// Insets at the start and end of the given axis
    pub fn along(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.leading, self.trailing),
            Axis::Vertical => (self.top, self.bottom),
        }
    }

    pub(crate) fn sides(&self) -> [f32; 4] {
        [self.leading, self.trailing, self.top, self.bottom]
    }
}

// ============================================================================
// Geometry reader
// ============================================================================

/// Geometry of one axis as read from the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisGeometry {
    /// Visible extent of the viewport
    pub viewport: f32,
    /// Scrollable extent of the content
    pub content: f32,
    /// Native scroll offset
    pub scroll: f32,
    /// Screen coordinate of the track's leading edge along this axis
    pub track_origin: f32,
}

impl AxisGeometry {
    /// Content overflows the viewport (strictly)
    pub fn is_scrollable(&self) -> bool {
        self.content > self.viewport
    }

    /// Maximum native scroll offset
    pub fn scroll_range(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }
}

/// One pass worth of host geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub horizontal: AxisGeometry,
    pub vertical: AxisGeometry,
}

impl GeometrySnapshot {
    /// Read every accessor from the host, fresh
    pub fn read<H>(host: &H) -> Self
    where
        H: ScrollViewport + ScrollbarSurface + ?Sized,
    {
        let axis = |axis: Axis| AxisGeometry {
            viewport: sanitize(host.viewport_extent(axis), "viewport extent"),
            content: sanitize(host.content_extent(axis), "content extent"),
            scroll: sanitize(host.scroll_offset(axis), "scroll offset"),
            track_origin: sanitize(host.track_origin(axis).along(axis), "track origin"),
        };
        Self {
            horizontal: axis(Axis::Horizontal),
            vertical: axis(Axis::Vertical),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Viewport box size
    pub fn viewport_size(&self) -> Size {
        Size::new(self.horizontal.viewport, self.vertical.viewport)
    }

    /// Both axes overflow, so the tracks compete for the corner
    pub fn is_conflicted(&self) -> bool {
        self.horizontal.is_scrollable() && self.vertical.is_scrollable()
    }
}

fn sanitize(value: f32, what: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("host reported non-finite {}: {}, using 0", what, value);
        0.0
    }
}
