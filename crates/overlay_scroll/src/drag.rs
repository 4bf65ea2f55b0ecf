//! Thumb drag state machine
//!
//! One [`DragController`] per axis. A press on the thumb opens a
//! [`DragSession`]; pointer moves update it; a release (or lost capture)
//! closes it. The session remembers where inside the thumb it was grabbed so
//! the thumb stays under the pointer for the whole drag.

use crate::events::{event_types, EventType};
use crate::geometry::Axis;
use crate::host::CaptureId;

/// Drag interaction state (FSM for one thumb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    /// Thumb follows the native scroll offset
    #[default]
    Idle,
    /// Thumb follows the pointer and drives the native scroll offset
    Dragging,
}

impl DragPhase {
    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (DragPhase::Idle, POINTER_DOWN) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, POINTER_UP) => Some(DragPhase::Idle),
            (DragPhase::Dragging, CAPTURE_LOST) => Some(DragPhase::Idle),
            (DragPhase::Dragging, UNMOUNT) => Some(DragPhase::Idle),
            _ => None,
        }
    }
}

/// State of one in-progress thumb drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer coordinate along the axis at press time
    pub pointer_start: f32,
    /// Pointer movement since press
    pub pointer_delta: f32,
    /// Where the thumb was grabbed, as a fraction of its length from the leading edge
    pub grab_ratio: f32,
    /// Surface-wide listeners held for this session
    pub capture: CaptureId,
}

impl DragSession {
    /// Start a session for a press at `pointer` on a thumb whose leading edge
    /// is at `thumb_start` (same coordinate space)
    pub fn new(pointer: f32, thumb_start: f32, thumb_length: f32, capture: CaptureId) -> Self {
        let grab_ratio = if thumb_length > 0.0 {
            (pointer - thumb_start) / thumb_length
        } else {
            0.0
        };
        Self {
            pointer_start: pointer,
            pointer_delta: 0.0,
            grab_ratio,
            capture,
        }
    }

    /// Current pointer coordinate along the axis
    pub fn pointer(&self) -> f32 {
        self.pointer_start + self.pointer_delta
    }

    /// Unclamped thumb offset that keeps the grab point under the pointer
    ///
    /// `track_origin` is the track's current screen position, read fresh each pass.
    pub fn candidate_offset(&self, thumb_length: f32, track_origin: f32) -> f32 {
        self.pointer() - thumb_length * self.grab_ratio - track_origin
    }
}

/// Drag state for one axis
#[derive(Debug, Clone, Copy)]
pub struct DragController {
    axis: Axis,
    phase: DragPhase,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            phase: DragPhase::Idle,
            session: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a press would open a session
    pub fn can_begin(&self) -> bool {
        self.phase.on_event(event_types::POINTER_DOWN).is_some()
    }

    /// Open a session. Returns false, leaving state untouched, if one is already open.
    pub fn begin(&mut self, session: DragSession) -> bool {
        let Some(next) = self.phase.on_event(event_types::POINTER_DOWN) else {
            return false;
        };
        self.phase = next;
        self.session = Some(session);
        tracing::debug!(
            "{:?} drag started at {:.1}, grab ratio {:.3}",
            self.axis,
            session.pointer_start,
            session.grab_ratio
        );
        true
    }

    /// Record a pointer move. Returns false when no session is open.
    pub fn update(&mut self, pointer: f32) -> bool {
        match self.session.as_mut() {
            Some(session) if self.phase == DragPhase::Dragging => {
                session.pointer_delta = pointer - session.pointer_start;
                true
            }
            _ => false,
        }
    }

    /// Close the session on `event` (release, lost capture, unmount)
    ///
    /// Returns the capture to release, or None if nothing was open.
    pub fn end(&mut self, event: EventType) -> Option<CaptureId> {
        let next = self.phase.on_event(event)?;
        self.phase = next;
        let session = self.session.take()?;
        tracing::debug!(
            "{:?} drag ended by {} after {:.1}px",
            self.axis,
            crate::events::event_name(event),
            session.pointer_delta
        );
        Some(session.capture)
    }
}
