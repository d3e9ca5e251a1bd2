//! Points and rectangles in photo space.
//!
//! face.com reports coordinates as percentages of the photo's width and
//! height. `Rect` treats y as growing upward, so `top >= bottom`.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Flip the sign of both coordinates.
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// Shift by `(dx, dy)`.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn equals(&self, x: f32, y: f32) -> bool {
        self.x == x && self.y == y
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `width` x `height` centred on `center`.
    pub fn from_center(center: Point, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y + height / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y - height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bottom <= y && self.right >= x && self.left <= x && self.top >= y
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.bottom <= other.bottom
            && self.right >= other.right
            && self.left <= other.left
            && self.top >= other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_negate() {
        let mut p = Point::new(3.0, 8.0);
        p.negate();
        assert_eq!(p, Point::new(-3.0, -8.0));
    }

    #[test]
    fn test_point_equals() {
        let p = Point::new(1.0, 2.0);
        assert!(p.equals(1.0, 2.0));

        let p1 = Point::new(1.1, 2.0);
        let p2 = Point::new(1.0, 3.0);
        let p3 = p1;
        assert_eq!(p1, p3);
        assert_ne!(p1, p2);
    }

    #[test]
    fn test_point_offset() {
        let mut p = Point::new(1.4, 14.2);
        p.offset(0.6, 0.8);
        assert!((p.x - 2.0).abs() < 1e-5);
        assert!((p.y - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_rect_contains_coordinates() {
        let r = Rect {
            bottom: 1.0,
            top: 4.0,
            right: 5.0,
            left: 1.0,
        };
        assert!(r.contains(2.0, 3.0));
        assert!(!r.contains(6.0, 3.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(1.0, 6.0, 7.0, 1.0);
        assert!(r.contains_point(Point::new(5.0, 5.0)));
        assert!(!r.contains_point(Point::new(5.0, 7.0)));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(Point::new(5.0, 5.0), 5.0, 5.0);
        assert!(r.contains_point(Point::new(5.0, 5.0)));
        assert_eq!(r.left, 2.5);
        assert_eq!(r.top, 7.5);
        assert_eq!(r.width(), 5.0);
        assert_eq!(r.height(), 5.0);
        assert_eq!(r.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(0.0, 10.0, 10.0, 0.0);
        let inner = Rect::new(2.0, 8.0, 8.0, 2.0);
        let straddling = Rect::new(5.0, 12.0, 8.0, 2.0);
        assert!(outer.contains_rect(&inner));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&straddling));
        assert!(!inner.contains_rect(&outer));
    }
}
