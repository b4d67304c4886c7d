//! Close-target placement and the overlap test.

use dragfab_graphics::{Point, Size};

use crate::config::CloseTargetConfig;

/// The dismiss region for the current drag session: a circle in surface
/// coordinates. Computed once at `Down` from the surface size known at that
/// moment and held for the rest of the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseTarget {
    pub center: Point,
    pub radius: f32,
}

impl CloseTarget {
    /// Places the target bottom-center on the given surface.
    pub fn bottom_center(surface: Size, config: CloseTargetConfig) -> Self {
        Self {
            center: Point::new(
                surface.width / 2.0,
                surface.height - config.bottom_margin,
            ),
            radius: config.radius,
        }
    }

    /// Circle-vs-circle overlap test against the button.
    ///
    /// The button's effective radius is half its smaller side; overlap holds
    /// when the center distance is at most the sum of the two radii. Pure
    /// function of the two geometries, so translating both by the same vector
    /// never changes the result.
    pub fn overlaps_button(&self, button_origin: Point, button_size: Size) -> bool {
        let button_center = Point::new(
            button_origin.x + button_size.width / 2.0,
            button_origin.y + button_size.height / 2.0,
        );
        let button_radius = button_size.width.min(button_size.height) / 2.0;
        button_center.distance_to(self.center) <= button_radius + self.radius
    }
}
