//! Plain screen-space value types shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};

/// A pixel position. Screen-absolute unless documented otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`, saturating at the `i32` range
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Bounding rectangle as reported by the accessibility backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    #[serde(alias = "w")]
    pub width: i32,
    #[serde(alias = "h")]
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn has_area(&self) -> bool {
        self.size().is_positive()
    }

    /// Whether the whole rectangle lies inside `[0, size.width) x [0, size.height)`
    pub fn fits_within(&self, size: Size) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        self.x >= 0
            && self.y >= 0
            && right <= i64::from(size.width)
            && bottom <= i64::from(size.height)
    }
}

/// Combined extent of all monitors, used only when injecting pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamp a point into `[0, width-1] x [0, height-1]`
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0, self.width.saturating_sub(1).max(0)),
            point.y.clamp(0, self.height.saturating_sub(1).max(0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_has_area() {
        assert!(Rect::new(0, 0, 1, 1).has_area());
        assert!(!Rect::new(10, 10, 0, 20).has_area());
        assert!(!Rect::new(10, 10, 20, -1).has_area());
    }

    #[test]
    fn test_rect_fits_within() {
        let window = Size::new(800, 600);
        assert!(Rect::new(0, 0, 800, 600).fits_within(window));
        assert!(Rect::new(100, 100, 50, 20).fits_within(window));
        assert!(!Rect::new(790, 100, 50, 20).fits_within(window));
        assert!(!Rect::new(-1, 100, 50, 20).fits_within(window));
        assert!(!Rect::new(900, 700, 10, 10).fits_within(window));
    }

    #[test]
    fn test_rect_fits_within_extreme_coordinates() {
        let window = Size::new(800, 600);
        assert!(!Rect::new(i32::MAX - 5, 0, 100, 10).fits_within(window));
        assert!(!Rect::new(0, i32::MAX, 10, i32::MAX).fits_within(window));
        assert!(!Rect::new(i32::MIN, i32::MIN, 10, 10).fits_within(window));
        assert!(Rect::new(0, 0, 800, 600).fits_within(Size::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn test_point_offset_saturates() {
        assert_eq!(
            Point::new(2_147_483_000, 5).offset(1000, 5),
            Point::new(i32::MAX, 10)
        );
        assert_eq!(
            Point::new(i32::MIN + 1, -3).offset(-10, -7),
            Point::new(i32::MIN, -10)
        );
        assert_eq!(Point::new(10, 20).offset(5, -5), Point::new(15, 15));
    }

    #[test]
    fn test_screen_bounds_clamp_degenerate() {
        let bounds = ScreenBounds::new(i32::MIN, 0);
        assert_eq!(bounds.clamp(Point::new(50, 50)), Point::new(0, 0));
    }

    #[test]
    fn test_screen_bounds_clamp() {
        let bounds = ScreenBounds::new(1920, 1080);
        assert_eq!(bounds.clamp(Point::new(-5, 20)), Point::new(0, 20));
        assert_eq!(bounds.clamp(Point::new(1920, 1080)), Point::new(1919, 1079));
        assert_eq!(bounds.clamp(Point::new(640, 480)), Point::new(640, 480));
    }

    #[test]
    fn test_rect_deserializes_short_aliases() {
        let rect: Rect = serde_json::from_str(r#"{"x":1,"y":2,"w":3,"h":4}"#).unwrap();
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }
}
