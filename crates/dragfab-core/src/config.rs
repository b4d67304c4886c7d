//! Construction-time configuration supplied by the host.

use dragfab_graphics::{Point, Size};

/// Geometry of the dismiss region, anchored bottom-center of the surface.
///
/// The target's center sits at `(surface.width / 2, surface.height - bottom_margin)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseTargetConfig {
    pub radius: f32,
    pub bottom_margin: f32,
}

impl Default for CloseTargetConfig {
    fn default() -> Self {
        Self {
            radius: 40.0,
            bottom_margin: 56.0,
        }
    }
}

/// Resting-position policy applied when a drag ends away from the close target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapPolicy {
    /// Leave the button where the drag released it.
    #[default]
    None,
    /// Snap the button's x to the nearer of the left and right surface edges.
    NearestHorizontalEdge,
}

/// Host-supplied configuration for one floating button instance.
///
/// Fixed for the controller's lifetime; surface size is reported separately
/// through [`crate::DragController::set_surface_size`] because it can change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggableButtonConfig {
    pub button_size: Size,
    pub initial_position: Point,
    pub close_target: CloseTargetConfig,
    pub snap_policy: SnapPolicy,
}

impl Default for DraggableButtonConfig {
    fn default() -> Self {
        Self {
            button_size: Size::new(56.0, 56.0),
            initial_position: Point::ZERO,
            close_target: CloseTargetConfig::default(),
            snap_policy: SnapPolicy::default(),
        }
    }
}
