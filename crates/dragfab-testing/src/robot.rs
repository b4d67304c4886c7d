//! Robot-style gesture driver for controller tests.
//!
//! Wraps a [`DragController`] and feeds it synthetic touch sequences so tests
//! read as user interactions instead of hand-built event lists.
//!
//! # Example
//!
//! ```
//! use dragfab_core::{DragController, DraggableButtonConfig};
//! use dragfab_graphics::Size;
//! use dragfab_testing::GestureRobot;
//!
//! let mut controller = DragController::new(DraggableButtonConfig::default());
//! controller.set_surface_size(Size::new(400.0, 800.0));
//!
//! let mut robot = GestureRobot::new(controller);
//! robot.press(28.0, 28.0);
//! robot.move_to(200.0, 400.0);
//! robot.release();
//! assert!(!robot.controller().is_dragging());
//! ```

use dragfab_core::DragController;
use dragfab_graphics::Point;
use dragfab_input::{PointerId, TouchEvent};

/// Programmatic gesture control over a drag controller.
pub struct GestureRobot {
    controller: DragController,
    pointer: PointerId,
    cursor: Point,
}

impl GestureRobot {
    /// Takes ownership of the controller and drives it with pointer id 1.
    pub fn new(controller: DragController) -> Self {
        Self::with_pointer(controller, 1)
    }

    pub fn with_pointer(controller: DragController, pointer: PointerId) -> Self {
        Self {
            controller,
            pointer,
            cursor: Point::ZERO,
        }
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragController {
        &mut self.controller
    }

    /// Presses down at the given coordinates. Returns true if consumed.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.controller
            .handle_touch_event(&TouchEvent::down(self.pointer, self.cursor))
    }

    /// Moves the pressed pointer to the given coordinates.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.controller
            .handle_touch_event(&TouchEvent::moved(self.pointer, self.cursor))
    }

    /// Lifts the pointer at its current position.
    pub fn release(&mut self) -> bool {
        self.controller
            .handle_touch_event(&TouchEvent::up(self.pointer, self.cursor))
    }

    /// Cancels the gesture at the pointer's current position (e.g. the host
    /// stole the pointer for another gesture).
    pub fn cancel(&mut self) -> bool {
        self.controller
            .handle_touch_event(&TouchEvent::cancel(self.pointer, self.cursor))
    }

    /// Performs a full drag: press, a few interpolated moves, release.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        const STEPS: u32 = 4;
        self.press(from_x, from_y);
        for step in 1..=STEPS {
            let t = step as f32 / STEPS as f32;
            self.move_to(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t);
        }
        self.release();
    }
}
