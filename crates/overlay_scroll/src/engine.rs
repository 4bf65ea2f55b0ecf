//! Scroll sync engine
//!
//! [`ScrollSync`] ties the pieces together for one viewport. The host calls
//! into it whenever something changed (native scroll, resize, config) and
//! routes thumb presses and surface-wide pointer events to it while a drag is
//! active. Every call funnels into a single reconciliation pass that:
//!
//! 1. reads the current config and host geometry,
//! 2. resolves the track layout (including the corner-conflict insets),
//! 3. positions each thumb from its drag session if that axis is dragging,
//!    or from the native scroll offset otherwise,
//! 4. writes track and thumb layouts to the host, then the scroll offsets
//!    produced by active drags.
//!
//! # Example
//!
//! ```rust
//! use overlay_scroll::prelude::*;
//!
//! let host = HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(100.0, 400.0));
//! let mut sync = ScrollSync::mount(host, ScrollAreaConfig::default());
//!
//! sync.host_mut().scroll_to(Axis::Vertical, 150.0);
//! let info = sync.on_scroll();
//! assert!(info.vertical.thumb.visible);
//! assert!(!info.horizontal.thumb.visible);
//! ```

use crate::config::{ConfigHandle, ConfigSource};
use crate::drag::{DragController, DragSession};
use crate::events::{event_name, event_types, EventType};
use crate::geometry::{Axis, AxisPair, GeometrySnapshot, Point};
use crate::host::ScrollHost;
use crate::layout::{hit_test_axis, AxisLayout, AxisMetrics, ScrollbarHitResult};

// ============================================================================
// Render info
// ============================================================================

/// What one reconciliation pass resolved
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarRenderInfo {
    pub horizontal: AxisLayout,
    pub vertical: AxisLayout,
    /// Both axes overflow and the conflicted insets are in use
    pub conflicted: bool,
    /// Axes whose thumb is positioned by a drag session
    pub dragging: AxisPair<bool>,
    /// Native scroll offsets produced by drag sessions
    pub drag_scroll: AxisPair<Option<f32>>,
}

impl ScrollbarRenderInfo {
    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Synchronizes two overlay scrollbars with a host viewport
pub struct ScrollSync<H: ScrollHost, C: ConfigSource = ConfigHandle> {
    host: H,
    config: C,
    drags: AxisPair<DragController>,
    last: ScrollbarRenderInfo,
    torn_down: bool,
}

impl<H: ScrollHost, C: ConfigSource> ScrollSync<H, C> {
    /// Create the engine and run the initial pass
    pub fn mount(host: H, config: C) -> Self {
        let mut sync = Self {
            host,
            config,
            drags: AxisPair::from_fn(DragController::new),
            last: ScrollbarRenderInfo::default(),
            torn_down: false,
        };
        sync.run_pass(event_types::MOUNT);
        sync
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn drag(&self, axis: Axis) -> &DragController {
        self.drags.get(axis)
    }

    pub fn is_dragging(&self, axis: Axis) -> bool {
        self.drags.get(axis).is_dragging()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Result of the most recent pass
    pub fn last_render(&self) -> &ScrollbarRenderInfo {
        &self.last
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Re-derive and apply all scrollbar state
    ///
    /// Safe to call at any time and any number of times.
    pub fn reconcile(&mut self) -> ScrollbarRenderInfo {
        self.run_pass(event_types::RECONCILE)
    }

    /// Native scroll offset changed
    pub fn on_scroll(&mut self) -> ScrollbarRenderInfo {
        self.run_pass(event_types::SCROLL)
    }

    /// Viewport box resized
    pub fn on_viewport_resize(&mut self) -> ScrollbarRenderInfo {
        self.run_pass(event_types::RESIZE)
    }

    /// Content extent changed
    pub fn on_content_resize(&mut self) -> ScrollbarRenderInfo {
        self.run_pass(event_types::CONTENT_RESIZE)
    }

    /// Configuration changed
    pub fn on_config_change(&mut self) -> ScrollbarRenderInfo {
        self.run_pass(event_types::CONFIG_CHANGE)
    }

    /// Resolve the current state without writing anything to the host
    pub fn preview(&self) -> ScrollbarRenderInfo {
        let config = self.config.current();
        let geometry = GeometrySnapshot::read(&self.host);
        let mut drag_scroll = AxisPair::new(None, None);

        let layouts = AxisPair::from_fn(|axis| {
            let metrics = AxisMetrics::resolve(axis, &geometry, &config);
            match self.drags.get(axis).session() {
                Some(session) if metrics.track.scrollable => {
                    let candidate = session
                        .candidate_offset(metrics.thumb_length, geometry.axis(axis).track_origin);
                    let layout = metrics.with_offset(candidate);
                    let scroll = metrics.scroll_for_offset(layout.thumb.offset);
                    *drag_scroll.get_mut(axis) = Some(scroll);
                    layout
                }
                _ => metrics.native(geometry.axis(axis)),
            }
        });

        ScrollbarRenderInfo {
            horizontal: layouts.horizontal,
            vertical: layouts.vertical,
            conflicted: geometry.is_conflicted(),
            dragging: AxisPair::from_fn(|axis| self.drags.get(axis).is_dragging()),
            drag_scroll,
        }
    }

    fn run_pass(&mut self, event: EventType) -> ScrollbarRenderInfo {
        if self.torn_down {
            tracing::debug!("ignoring {} after teardown", event_name(event));
            return self.last;
        }

        let info = self.preview();

        for axis in Axis::ALL {
            let layout = info.axis(axis);
            self.host.apply_track(axis, &layout.track);
            self.host.apply_thumb(axis, &layout.thumb);
        }
        for axis in Axis::ALL {
            if let Some(scroll) = *info.drag_scroll.get(axis) {
                self.host.set_scroll_offset(axis, scroll);
            }
        }

        tracing::trace!(
            "pass ({}): conflicted={} v=[{:.1}+{:.1}/{:.1}] h=[{:.1}+{:.1}/{:.1}]",
            event_name(event),
            info.conflicted,
            info.vertical.thumb.offset,
            info.vertical.thumb.length,
            info.vertical.track.length,
            info.horizontal.thumb.offset,
            info.horizontal.thumb.length,
            info.horizontal.track.length
        );

        self.last = info;
        info
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Classify a screen-space point against both scrollbars
    pub fn hit_test(&self, point: Point) -> ScrollbarHitResult {
        let info = self.preview();
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let origin = self.host.track_origin(axis);
            let hit = hit_test_axis(axis, origin, info.axis(axis), point);
            if hit != ScrollbarHitResult::None {
                return hit;
            }
        }
        ScrollbarHitResult::None
    }

    /// Pointer pressed on the thumb for `axis`
    ///
    /// Opens a drag session and acquires surface-wide pointer listeners.
    /// Ignored (returns false) after teardown, while `axis` is already
    /// dragging, or when the thumb is hidden.
    pub fn pointer_down(&mut self, axis: Axis, point: Point) -> bool {
        if self.torn_down {
            tracing::debug!("ignoring {:?} press after teardown", axis);
            return false;
        }
        if !self.drags.get(axis).can_begin() {
            tracing::debug!("ignoring {:?} press, drag already active", axis);
            return false;
        }

        let config = self.config.current();
        let geometry = GeometrySnapshot::read(&self.host);
        let metrics = AxisMetrics::resolve(axis, &geometry, &config);
        if !metrics.track.scrollable {
            tracing::debug!("ignoring {:?} press, thumb hidden", axis);
            return false;
        }
        let thumb = metrics.native(geometry.axis(axis)).thumb;

        let capture = self.host.capture(axis);
        let thumb_start = geometry.axis(axis).track_origin + thumb.offset;
        let session = DragSession::new(point.along(axis), thumb_start, thumb.length, capture);
        if !self.drags.get_mut(axis).begin(session) {
            self.host.release(capture);
            return false;
        }
        true
    }

    /// Press at a screen-space point, starting a drag if it lands on a thumb
    ///
    /// For hosts that deliver a single pointer stream instead of per-thumb
    /// events. Returns the axis whose drag started.
    pub fn pointer_press(&mut self, point: Point) -> Option<Axis> {
        let axis = self.hit_test(point).thumb_axis()?;
        self.pointer_down(axis, point).then_some(axis)
    }

    /// Pointer moved anywhere on the input surface
    ///
    /// Returns true if a drag consumed the move.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if self.torn_down {
            return false;
        }
        let mut moved = false;
        for axis in Axis::ALL {
            moved |= self.drags.get_mut(axis).update(point.along(axis));
        }
        if moved {
            self.run_pass(event_types::POINTER_MOVE);
        }
        moved
    }

    /// Pointer released anywhere on the input surface
    ///
    /// Ends every active drag. Returns false if nothing was dragging.
    pub fn pointer_up(&mut self) -> bool {
        self.end_drags(event_types::POINTER_UP)
    }

    /// Pointer capture was lost (window blur, pointer left the window)
    ///
    /// Ends every active drag the same way a release would.
    pub fn capture_lost(&mut self) -> bool {
        self.end_drags(event_types::CAPTURE_LOST)
    }

    fn end_drags(&mut self, event: EventType) -> bool {
        let mut ended = false;
        for axis in Axis::ALL {
            if let Some(capture) = self.drags.get_mut(axis).end(event) {
                self.host.release(capture);
                ended = true;
            }
        }
        ended
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Release all listeners and stop reacting to events
    ///
    /// Runs automatically on drop. Calling it more than once is harmless.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.end_drags(event_types::UNMOUNT) {
            tracing::debug!("teardown released active drag listeners");
        }
        self.torn_down = true;
    }
}

impl<H: ScrollHost, C: ConfigSource> Drop for ScrollSync<H, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
