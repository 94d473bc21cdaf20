//! Virtual pixel geometry.
//!
//! The background animates in pixel units. A terminal cell maps to a fixed
//! block of virtual pixels so distances like "200 px" keep a sensible
//! on-screen size regardless of the terminal.

use std::ops::{Add, AddAssign, Sub};

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// A point (or offset) in virtual pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of terminal cell (`column`, `row`).
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self::new(
            (column as f64 + 0.5) * CELL_WIDTH_PX,
            (row as f64 + 0.5) * CELL_HEIGHT_PX,
        )
    }

    /// Euclidean length of this point taken as a vector.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Size of the drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal of `columns` x `rows` cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(
            columns as f64 * CELL_WIDTH_PX,
            rows as f64 * CELL_HEIGHT_PX,
        )
    }

    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// True when there is nothing to draw on.
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
