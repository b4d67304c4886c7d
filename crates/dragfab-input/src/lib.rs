//! Toolkit-neutral touch event model for Dragfab
//!
//! Hosts translate their native gesture phases into [`TouchEvent`] values at
//! the boundary; no native event type ever reaches the drag controller.

mod events;

pub use events::{PointerId, TouchAction, TouchEvent};

pub mod prelude {
    pub use crate::events::{PointerId, TouchAction, TouchEvent};
}
