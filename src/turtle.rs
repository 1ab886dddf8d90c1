//! Turtle state and the plane-geometry primitives shared by compilation and
//! placement.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle stored as min/max corners, in abstract steps or
/// PostScript points depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Builds a rectangle from its edge coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: DVec2::new(x0, y0),
            max: DVec2::new(x1, y1),
        }
    }

    pub fn from_corners(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// The smallest rectangle containing `self` and `point`.
    pub fn union_point(&self, point: DVec2) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Whether both spans are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// A unit-scale relative path instruction for the downstream renderer.
///
/// The coordinate payload is the offset from the current point, in abstract
/// steps; scale and origin are supplied later by placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathOp {
    /// Draw a segment covering the offset.
    Line(DVec2),
    /// Reposition by the offset without drawing.
    Move(DVec2),
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOp::Line(v) => write!(f, "{} {} rlineto", v.x, v.y),
            PathOp::Move(v) => write!(f, "{} {} rmoveto", v.x, v.y),
        }
    }
}

/// Rounds to 15 fractional digits.
///
/// Applied after every trigonometric step so that repeated accumulation stays
/// numerically stable and identical inputs produce identical output on every
/// platform.
pub fn round15(v: f64) -> f64 {
    (v * 1e15).round() / 1e15
}

/// The state of the drawing turtle while one action sequence is compiled.
///
/// Heading 0 points along +x. Created at the origin for each compilation and
/// destroyed when it completes; nothing is shared between compilations.
#[derive(Clone, Debug)]
pub struct TurtleState {
    /// Current heading in radians.
    pub heading: f64,

    /// Current position in abstract steps.
    pub position: DVec2,

    /// Saved `(heading, position)` pairs for `[` / `]`.
    pub stack: Vec<(f64, DVec2)>,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            heading: 0.0,
            position: DVec2::ZERO,
            stack: Vec::new(),
        }
    }
}

impl TurtleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one unit step along the heading and returns the step vector.
    pub fn advance(&mut self) -> DVec2 {
        let step = DVec2::new(round15(self.heading.cos()), round15(self.heading.sin()));
        self.position = DVec2::new(
            round15(self.position.x + step.x),
            round15(self.position.y + step.y),
        );
        step
    }

    /// Turns in place by `radians`.
    pub fn turn(&mut self, radians: f64) {
        self.heading += radians;
    }

    /// Saves the heading and position onto the stack.
    pub fn push(&mut self) {
        self.stack.push((self.heading, self.position));
    }

    /// Restores and returns the most recently saved heading and position, if
    /// any.
    pub fn pop(&mut self) -> Option<(f64, DVec2)> {
        self.stack.pop()
    }
}
