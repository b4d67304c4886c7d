//! Geometric primitives: Point, Size, Rect

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn distance_is_translation_invariant() {
        let a = Point::new(110.0, 650.0);
        let b = Point::new(172.0, 744.0);
        let shift = Point::new(-37.5, 1021.25);
        let before = a.distance_to(b);
        let after = (a + shift).distance_to(b + shift);
        assert!((before - after).abs() < 1e-3);
    }

    #[test]
    fn rect_center_and_contains() {
        let rect = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(56.0, 56.0));
        assert_eq!(rect.center(), Point::new(38.0, 48.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(66.0, 76.0));
        assert!(!rect.contains(9.9, 20.0));
    }

    #[test]
    fn rect_intersection_includes_touching_edges() {
        let a = Rect::from_origin_size(Point::ZERO, Size::new(10.0, 10.0));
        let b = Rect::from_origin_size(Point::new(10.0, 0.0), Size::new(10.0, 10.0));
        let c = Rect::from_origin_size(Point::new(10.1, 0.0), Size::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn translate_preserves_size() {
        let rect = Rect::from_origin_size(Point::ZERO, Size::new(4.0, 8.0));
        let moved = rect.translate(3.0, -2.0);
        assert_eq!(moved.origin(), Point::new(3.0, -2.0));
        assert_eq!((moved.width, moved.height), (4.0, 8.0));
    }
}
