#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::Sub;

/// A point in board space (CSS pixels from the board's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clamp a card's top-left corner so the whole card stays inside the board.
///
/// Each axis is limited to `[0, board - card]`. When the card is larger than
/// the board on an axis the result is `0` on that axis.
#[must_use]
pub fn clamp_to_bounds(pos: Point, card: Size, board: Size) -> Point {
    Point {
        x: clamp_axis(pos.x, board.width - card.width),
        y: clamp_axis(pos.y, board.height - card.height),
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
