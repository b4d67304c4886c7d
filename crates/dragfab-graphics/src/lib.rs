//! Pure geometry math for Dragfab
//!
//! This crate contains the geometric primitives shared by the input and
//! controller crates. It is deliberately dependency-free.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
