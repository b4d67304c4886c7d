//! Drag-and-dismiss interaction controller for a floating button.
//!
//! The host owns rendering and input delivery; this crate owns the drag state
//! machine. Input arrives as toolkit-neutral [`TouchEvent`] values through
//! [`DragController::handle_touch_event`], and renderers read back an
//! immutable [`DragSnapshot`] per frame instead of live fields.
//!
//! # Example
//!
//! ```
//! use dragfab_core::{DragController, DraggableButtonConfig};
//! use dragfab_graphics::{Point, Size};
//! use dragfab_input::TouchEvent;
//!
//! let mut controller = DragController::new(DraggableButtonConfig {
//!     initial_position: Point::new(50.0, 50.0),
//!     ..DraggableButtonConfig::default()
//! });
//! controller.set_surface_size(Size::new(400.0, 800.0));
//!
//! controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
//! controller.handle_touch_event(&TouchEvent::moved(1, Point::new(160.0, 700.0)));
//! assert_eq!(controller.current_position(), Point::new(110.0, 650.0));
//! controller.handle_touch_event(&TouchEvent::up(1, Point::new(160.0, 700.0)));
//! assert!(!controller.is_dragging());
//! ```

mod close_target;
mod config;
mod controller;

pub use close_target::CloseTarget;
pub use config::{CloseTargetConfig, DraggableButtonConfig, SnapPolicy};
pub use controller::{DragController, DragPhase, DragSnapshot};

pub use dragfab_graphics::{Point, Rect, Size};
pub use dragfab_input::{PointerId, TouchAction, TouchEvent};

pub mod prelude {
    pub use crate::close_target::CloseTarget;
    pub use crate::config::{CloseTargetConfig, DraggableButtonConfig, SnapPolicy};
    pub use crate::controller::{DragController, DragPhase, DragSnapshot};
    pub use dragfab_graphics::prelude::*;
    pub use dragfab_input::prelude::*;
}
