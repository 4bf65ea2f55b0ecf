//! Overlay Scrollbars
//!
//! Keeps a pair of synthetic scrollbar thumbs in sync with a native scroll
//! viewport whose own scrollbars are hidden:
//!
//! - **Native to thumb**: scroll, resize and config changes reposition and
//!   resize the thumbs proportionally
//! - **Thumb to native**: dragging a thumb writes the matching scroll offset
//!   back, keeping the grabbed point under the pointer
//! - **Corner conflict**: when both axes overflow, each track is shortened so
//!   the two never overlap
//!
//! The engine never renders anything. Hosts implement the capability traits
//! in [`host`] and the engine reads geometry from them and writes layouts
//! back to them.
//!
//! # Example
//!
//! ```rust
//! use overlay_scroll::prelude::*;
//!
//! let host = HeadlessViewport::new(Size::new(200.0, 200.0), Size::new(200.0, 1000.0));
//! let mut sync = ScrollSync::mount(host, ScrollAreaConfig::default());
//!
//! let thumb = sync.last_render().vertical.thumb;
//! assert!(thumb.visible);
//!
//! // Drag the thumb down by 20px
//! let press = Point::new(195.0, 2.0 + thumb.offset + 1.0);
//! assert!(sync.pointer_down(Axis::Vertical, press));
//! sync.pointer_move(Point::new(195.0, press.y + 20.0));
//! sync.pointer_up();
//!
//! assert!(sync.host().scroll(Axis::Vertical) > 0.0);
//! assert_eq!(sync.host().active_listeners(), 0);
//! ```

pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod layout;

pub use config::{
    AxisConfig, ConfigHandle, ConfigSource, GutterPlacement, ScrollAreaConfig, ScrollbarSize,
};
pub use drag::{DragController, DragPhase, DragSession};
pub use engine::{ScrollSync, ScrollbarRenderInfo};
pub use error::{ConfigError, Result};
pub use events::{event_types, EventType};
pub use geometry::{Axis, AxisPair, Insets, Point, Rect, Size};
pub use headless::HeadlessViewport;
pub use host::{CaptureId, PointerCapture, ScrollHost, ScrollViewport, ScrollbarSurface};
pub use layout::{AxisLayout, ScrollbarHitResult, ThumbLayout, TrackLayout};

/// Everything needed to mount an engine on a host
pub mod prelude {
    pub use crate::config::{
        AxisConfig, ConfigHandle, ConfigSource, GutterPlacement, ScrollAreaConfig, ScrollbarSize,
    };
    pub use crate::engine::{ScrollSync, ScrollbarRenderInfo};
    pub use crate::geometry::{Axis, AxisPair, Insets, Point, Rect, Size};
    pub use crate::headless::HeadlessViewport;
    pub use crate::host::{
        CaptureId, PointerCapture, ScrollHost, ScrollViewport, ScrollbarSurface,
    };
    pub use crate::layout::{AxisLayout, ScrollbarHitResult, ThumbLayout, TrackLayout};
}
