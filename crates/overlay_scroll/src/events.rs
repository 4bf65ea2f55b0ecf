//! Event identifiers
//!
//! Everything that can make the engine do work. Used to drive the drag state
//! machine and to label reconciliation passes in logs.

/// Event type identifier
pub type EventType = u32;

/// Events the engine reacts to
pub mod event_types {
    use super::EventType;

    /// Pointer pressed on a thumb
    pub const POINTER_DOWN: EventType = 1;
    /// Pointer released anywhere on the input surface
    pub const POINTER_UP: EventType = 2;
    /// Pointer moved anywhere on the input surface
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer capture lost (window blur, pointer left the window)
    pub const CAPTURE_LOST: EventType = 8;
    /// Native scroll offset changed
    pub const SCROLL: EventType = 30;
    /// Viewport box resized
    pub const RESIZE: EventType = 40;
    /// Content extent changed
    pub const CONTENT_RESIZE: EventType = 41;
    /// Configuration changed
    pub const CONFIG_CHANGE: EventType = 42;
    /// Host asked for a pass without naming a cause
    pub const RECONCILE: EventType = 43;

    // Engine lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// Human readable name for logs
pub fn event_name(event: EventType) -> &'static str {
    use event_types::*;
    match event {
        POINTER_DOWN => "pointer_down",
        POINTER_UP => "pointer_up",
        POINTER_MOVE => "pointer_move",
        CAPTURE_LOST => "capture_lost",
        SCROLL => "scroll",
        RESIZE => "resize",
        CONTENT_RESIZE => "content_resize",
        CONFIG_CHANGE => "config_change",
        RECONCILE => "reconcile",
        MOUNT => "mount",
        UNMOUNT => "unmount",
        _ => "unknown",
    }
}
