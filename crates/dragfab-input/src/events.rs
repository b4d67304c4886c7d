use dragfab_graphics::Point;

pub type PointerId = u64;

/// Gesture phase of a touch event, in the order a host delivers them.
///
/// A drag session spans `Down` to the matching `Up` or `Cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single touch event in surface coordinates.
///
/// Plain value type; consumption is reported by the handler's return value
/// rather than tracked on the event itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub id: PointerId,
    pub action: TouchAction,
    pub position: Point,
}

impl TouchEvent {
    pub fn new(id: PointerId, action: TouchAction, position: Point) -> Self {
        Self {
            id,
            action,
            position,
        }
    }

    pub fn down(id: PointerId, position: Point) -> Self {
        Self::new(id, TouchAction::Down, position)
    }

    pub fn moved(id: PointerId, position: Point) -> Self {
        Self::new(id, TouchAction::Move, position)
    }

    pub fn up(id: PointerId, position: Point) -> Self {
        Self::new(id, TouchAction::Up, position)
    }

    pub fn cancel(id: PointerId, position: Point) -> Self {
        Self::new(id, TouchAction::Cancel, position)
    }
}
