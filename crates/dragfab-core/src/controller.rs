//! The drag state machine.
//!
//! One controller per floating button, living for the button's lifetime.
//! All positional state is owned here and mutated only by
//! [`DragController::handle_touch_event`]; collaborators read it back through
//! the accessors or a [`DragSnapshot`].

use std::rc::Rc;

use dragfab_graphics::{Point, Rect, Size};
use dragfab_input::{PointerId, TouchAction, TouchEvent};
use log::{debug, trace};

use crate::close_target::CloseTarget;
use crate::config::{DraggableButtonConfig, SnapPolicy};

/// Current phase of the drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Immutable per-frame view of the controller, for renderers.
///
/// `close_target` is `Some` only while dragging; `overlapping_close_target`
/// is always `false` when idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSnapshot {
    pub phase: DragPhase,
    pub position: Point,
    pub overlapping_close_target: bool,
    pub close_target: Option<CloseTarget>,
    pub dismissed: bool,
}

/// Per-session bookkeeping, alive from `Down` to the matching `Up`/`Cancel`.
#[derive(Clone, Copy)]
struct DragSession {
    /// Pointer that owns this session; events from other pointers are ignored.
    pointer: PointerId,
    /// Touch position minus button origin at `Down`, preserved through the
    /// session so moves keep the grab point instead of snapping the origin
    /// to the finger.
    grab_offset: Point,
    /// Button origin at `Down`, restored on `Cancel`.
    origin_at_down: Point,
}

/// Translates a stream of touch events into drag state and position updates,
/// and decides on release whether the button was dropped on the close target.
///
/// Single-threaded by contract: events must arrive from one input sequence,
/// in order, and are handled synchronously. The controller never panics on
/// malformed sequences; events inconsistent with the current state are
/// ignored and reported as not consumed.
pub struct DragController {
    config: DraggableButtonConfig,
    surface_size: Option<Size>,
    position: Point,
    session: Option<DragSession>,
    close_target: Option<CloseTarget>,
    overlapping: bool,
    dismissed: bool,
    dismiss_listener: Option<Rc<dyn Fn()>>,
}

impl DragController {
    pub fn new(config: DraggableButtonConfig) -> Self {
        Self {
            config,
            surface_size: None,
            position: config.initial_position,
            session: None,
            close_target: None,
            overlapping: false,
            dismissed: false,
            dismiss_listener: None,
        }
    }

    /// Registers the callback invoked exactly once when a drag ends over the
    /// close target. The host is responsible for actually removing the widget.
    pub fn on_dismiss(&mut self, listener: impl Fn() + 'static) {
        self.dismiss_listener = Some(Rc::new(listener));
    }

    /// Reports the host surface size. Called whenever the size becomes known
    /// or changes. Clamping uses the latest reported size; the close target
    /// keeps the placement computed at `Down` for the rest of that session.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = Some(size);
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Button origin in surface coordinates. Defined in all phases.
    pub fn current_position(&self) -> Point {
        self.position
    }

    /// Bounds the renderer should paint the button at this frame.
    pub fn button_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.config.button_size)
    }

    pub fn is_overlapping_close_target(&self) -> bool {
        self.overlapping
    }

    /// Center of the close target; `Some` only while dragging.
    pub fn close_target_position(&self) -> Option<Point> {
        self.close_target.map(|target| target.center)
    }

    /// True once a drag-to-close gesture completed. A dismissed controller
    /// ignores all further events; the host should have removed the widget.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn snapshot(&self) -> DragSnapshot {
        DragSnapshot {
            phase: self.phase(),
            position: self.position,
            overlapping_close_target: self.overlapping,
            close_target: self.close_target,
            dismissed: self.dismissed,
        }
    }

    /// Feeds one touch event into the state machine.
    ///
    /// Returns `true` iff the event was consumed. Out-of-order events
    /// (`Move` without `Down`, a second pointer's `Down` mid-session, any
    /// event after dismissal) are no-ops returning `false`.
    pub fn handle_touch_event(&mut self, event: &TouchEvent) -> bool {
        if self.dismissed {
            return false;
        }
        match event.action {
            TouchAction::Down => self.on_down(event),
            TouchAction::Move => self.on_move(event),
            TouchAction::Up => self.on_up(event),
            TouchAction::Cancel => self.on_cancel(event),
        }
    }

    fn on_down(&mut self, event: &TouchEvent) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer: event.id,
            grab_offset: event.position - self.position,
            origin_at_down: self.position,
        });
        self.close_target = self
            .surface_size
            .map(|surface| CloseTarget::bottom_center(surface, self.config.close_target));
        self.overlapping = self.overlaps_close_target(self.position);
        debug!(
            "drag started by pointer {} at {:?}, button origin {:?}",
            event.id, event.position, self.position
        );
        true
    }

    fn on_move(&mut self, event: &TouchEvent) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if session.pointer != event.id {
            return false;
        }
        self.position = self.clamp_to_surface(event.position - session.grab_offset);
        self.overlapping = self.overlaps_close_target(self.position);
        trace!(
            "drag moved to {:?}, overlapping close target: {}",
            self.position,
            self.overlapping
        );
        true
    }

    fn on_up(&mut self, event: &TouchEvent) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if session.pointer != event.id {
            return false;
        }
        self.session = None;
        self.close_target = None;
        if self.overlapping {
            self.overlapping = false;
            self.dismissed = true;
            debug!("drag released over close target, dismissing");
            if let Some(listener) = self.dismiss_listener.clone() {
                listener();
            }
        } else {
            self.apply_snap_policy();
            debug!("drag released at {:?}", self.position);
        }
        true
    }

    fn on_cancel(&mut self, event: &TouchEvent) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if session.pointer != event.id {
            return false;
        }
        self.position = session.origin_at_down;
        self.session = None;
        self.close_target = None;
        self.overlapping = false;
        debug!("drag cancelled, reverted to {:?}", self.position);
        true
    }

    fn overlaps_close_target(&self, origin: Point) -> bool {
        self.close_target
            .map(|target| target.overlaps_button(origin, self.config.button_size))
            .unwrap_or(false)
    }

    /// Keeps the whole button inside the surface. The lower bound wins when
    /// the surface is smaller than the button. No-op until a surface size
    /// has been reported.
    fn clamp_to_surface(&self, origin: Point) -> Point {
        let Some(surface) = self.surface_size else {
            return origin;
        };
        let max_x = (surface.width - self.config.button_size.width).max(0.0);
        let max_y = (surface.height - self.config.button_size.height).max(0.0);
        Point::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y))
    }

    fn apply_snap_policy(&mut self) {
        match self.config.snap_policy {
            SnapPolicy::None => {}
            SnapPolicy::NearestHorizontalEdge => {
                let Some(surface) = self.surface_size else {
                    return;
                };
                let max_x = (surface.width - self.config.button_size.width).max(0.0);
                let button_center_x = self.position.x + self.config.button_size.width / 2.0;
                self.position.x = if button_center_x <= surface.width / 2.0 {
                    0.0
                } else {
                    max_x
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_on_surface() -> DragController {
        let mut controller = DragController::new(DraggableButtonConfig {
            initial_position: Point::new(50.0, 50.0),
            ..DraggableButtonConfig::default()
        });
        controller.set_surface_size(Size::new(400.0, 800.0));
        controller
    }

    #[test]
    fn move_before_down_is_ignored() {
        let mut controller = controller_on_surface();
        let consumed = controller.handle_touch_event(&TouchEvent::moved(1, Point::new(99.0, 99.0)));
        assert!(!consumed);
        assert_eq!(controller.current_position(), Point::new(50.0, 50.0));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn up_and_cancel_before_down_are_ignored() {
        let mut controller = controller_on_surface();
        assert!(!controller.handle_touch_event(&TouchEvent::up(1, Point::ZERO)));
        assert!(!controller.handle_touch_event(&TouchEvent::cancel(1, Point::ZERO)));
    }

    #[test]
    fn down_preserves_grab_point() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(160.0, 700.0)));
        // Grab offset (50, 50) from touching the button at (100, 100).
        assert_eq!(controller.current_position(), Point::new(110.0, 650.0));
    }

    #[test]
    fn second_down_mid_session_is_ignored() {
        let mut controller = controller_on_surface();
        assert!(controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0))));
        assert!(!controller.handle_touch_event(&TouchEvent::down(2, Point::new(10.0, 10.0))));
        assert!(controller.is_dragging());
        assert_eq!(controller.current_position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn events_from_other_pointers_are_ignored_mid_session() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        assert!(!controller.handle_touch_event(&TouchEvent::moved(2, Point::new(0.0, 0.0))));
        assert!(!controller.handle_touch_event(&TouchEvent::up(2, Point::new(0.0, 0.0))));
        assert!(controller.is_dragging());
        assert_eq!(controller.current_position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn moves_clamp_to_surface_bounds() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(-500.0, -500.0)));
        assert_eq!(controller.current_position(), Point::ZERO);
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(5000.0, 5000.0)));
        assert_eq!(controller.current_position(), Point::new(344.0, 744.0));
    }

    #[test]
    fn clamp_lower_bound_wins_on_tiny_surface() {
        let mut controller = DragController::new(DraggableButtonConfig::default());
        controller.set_surface_size(Size::new(40.0, 40.0));
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(10.0, 10.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(30.0, 30.0)));
        assert_eq!(controller.current_position(), Point::ZERO);
    }

    #[test]
    fn close_target_position_defined_only_while_dragging() {
        let mut controller = controller_on_surface();
        assert_eq!(controller.close_target_position(), None);
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        assert_eq!(
            controller.close_target_position(),
            Some(Point::new(200.0, 744.0))
        );
        controller.handle_touch_event(&TouchEvent::up(1, Point::new(100.0, 100.0)));
        assert_eq!(controller.close_target_position(), None);
    }

    #[test]
    fn cancel_reverts_to_session_start_position() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(300.0, 400.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(120.0, 640.0)));
        assert!(controller.handle_touch_event(&TouchEvent::cancel(1, Point::new(120.0, 640.0))));
        assert_eq!(controller.current_position(), Point::new(50.0, 50.0));
        assert!(!controller.is_dragging());
        assert!(!controller.is_overlapping_close_target());
    }

    #[test]
    fn drag_without_surface_size_has_no_close_target_and_no_clamp() {
        let mut controller = DragController::new(DraggableButtonConfig::default());
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(10.0, 10.0)));
        assert_eq!(controller.close_target_position(), None);
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(-90.0, -90.0)));
        assert_eq!(controller.current_position(), Point::new(-100.0, -100.0));
        controller.handle_touch_event(&TouchEvent::up(1, Point::new(-90.0, -90.0)));
        assert!(!controller.is_dismissed());
    }

    #[test]
    fn dismissed_controller_ignores_everything() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        // Drop the button right onto the close target center.
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(222.0, 766.0)));
        assert!(controller.is_overlapping_close_target());
        controller.handle_touch_event(&TouchEvent::up(1, Point::new(222.0, 766.0)));
        assert!(controller.is_dismissed());
        assert!(!controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0))));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn snap_policy_moves_button_to_nearest_edge_on_release() {
        let mut controller = DragController::new(DraggableButtonConfig {
            initial_position: Point::new(50.0, 50.0),
            snap_policy: SnapPolicy::NearestHorizontalEdge,
            ..DraggableButtonConfig::default()
        });
        controller.set_surface_size(Size::new(400.0, 800.0));

        controller.handle_touch_event(&TouchEvent::down(1, Point::new(78.0, 78.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(300.0, 300.0)));
        controller.handle_touch_event(&TouchEvent::up(1, Point::new(300.0, 300.0)));
        // Button center x = 300 is past the surface midline, so x snaps right.
        assert_eq!(controller.current_position(), Point::new(344.0, 272.0));

        controller.handle_touch_event(&TouchEvent::down(1, Point::new(372.0, 300.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(120.0, 300.0)));
        controller.handle_touch_event(&TouchEvent::up(1, Point::new(120.0, 300.0)));
        assert_eq!(controller.current_position().x, 0.0);
    }

    #[test]
    fn button_rect_tracks_the_drag() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        controller.handle_touch_event(&TouchEvent::moved(1, Point::new(160.0, 700.0)));
        let rect = controller.button_rect();
        assert_eq!(rect.origin(), Point::new(110.0, 650.0));
        assert_eq!(rect.center(), Point::new(138.0, 678.0));
        assert!(rect.contains(138.0, 678.0));
    }

    #[test]
    fn snapshot_mirrors_accessors() {
        let mut controller = controller_on_surface();
        controller.handle_touch_event(&TouchEvent::down(1, Point::new(100.0, 100.0)));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, DragPhase::Dragging);
        assert_eq!(snapshot.position, controller.current_position());
        assert_eq!(
            snapshot.close_target.map(|t| t.center),
            controller.close_target_position()
        );
        assert!(!snapshot.dismissed);
    }
}
