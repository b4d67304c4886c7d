//! Testing utilities and gesture harness for Dragfab

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
}
