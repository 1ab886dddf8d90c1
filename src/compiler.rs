//! Compiler that converts an action sequence into unit-scale path
//! instructions.
//!
//! The entry point is [`compile`]. It walks the filtered action string left
//! to right, driving a [`TurtleState`](crate::turtle::TurtleState) and
//! recording one relative instruction per move, plus the bounding box of
//! every position visited. The result is abstract: step size is 1 and the
//! start position is the origin, so placement must supply the actual origin
//! and scale later.

use crate::error::{PlotError, Result};
use crate::turtle::{PathOp, Rect, TurtleState};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A compiled drawing: relative path instructions plus the bounding box the
/// turtle covered, in abstract steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompiledPath {
    pub ops: Vec<PathOp>,
    /// Never zero-area: a degenerate axis is widened to `[-0.5, +0.5]` so
    /// downstream scaling cannot divide by zero.
    pub bounds: Rect,
}

impl CompiledPath {
    /// The net displacement of the whole path from the origin.
    pub fn endpoint(&self) -> glam::DVec2 {
        self.ops.iter().fold(glam::DVec2::ZERO, |acc, op| match op {
            PathOp::Line(v) | PathOp::Move(v) => acc + *v,
        })
    }
}

/// Interprets `actions` with the turtle transition table and returns the
/// compiled path.
///
/// `angle_degrees` is the grammar's turning angle; `+` adds the step angle
/// `-angle_degrees` (in radians) to the heading and `-` subtracts it. Every
/// action updates the running bounding box, including the ones that do not
/// move.
///
/// # Errors
///
/// [`PlotError::UnimplementedAction`] for any character outside the action
/// alphabet, and [`PlotError::StackUnderflow`] for a `]` with no matching
/// `[`.
pub fn compile(actions: &str, angle_degrees: f64) -> Result<CompiledPath> {
    let step_angle = (-angle_degrees).to_radians();
    let mut turtle = TurtleState::new();
    let mut ops = Vec::new();
    let mut bounds = Rect::default();

    for (idx, action) in actions.chars().enumerate() {
        match action {
            'F' => ops.push(PathOp::Line(turtle.advance())),
            'f' => ops.push(PathOp::Move(turtle.advance())),
            '+' => turtle.turn(step_angle),
            '-' => turtle.turn(-step_angle),
            '|' => turtle.turn(PI),
            '[' => turtle.push(),
            ']' => {
                let (heading, position) = turtle
                    .pop()
                    .ok_or(PlotError::StackUnderflow(idx))?;
                ops.push(PathOp::Move(position - turtle.position));
                turtle.heading = heading;
                turtle.position = position;
            }
            other => return Err(PlotError::UnimplementedAction(other)),
        }
        bounds = bounds.union_point(turtle.position);
    }

    Ok(CompiledPath {
        ops,
        bounds: widen_degenerate_axes(bounds),
    })
}

/// Treats a collapsed axis as if it spanned one step, centered at zero.
fn widen_degenerate_axes(mut bounds: Rect) -> Rect {
    if bounds.min.x == bounds.max.x {
        bounds.min.x = -0.5;
        bounds.max.x = 0.5;
    }
    if bounds.min.y == bounds.max.y {
        bounds.min.y = -0.5;
        bounds.max.y = 0.5;
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn empty_input_compiles_to_a_unit_box() {
        let path = compile("", 90.0).unwrap();
        assert!(path.ops.is_empty());
        assert_eq!(path.bounds, Rect::new(-0.5, -0.5, 0.5, 0.5));
    }

    #[test]
    fn turns_alone_never_leave_the_origin() {
        let path = compile("++--|", 30.0).unwrap();
        assert!(path.ops.is_empty());
        assert_eq!(path.bounds, Rect::new(-0.5, -0.5, 0.5, 0.5));
    }

    #[test]
    fn single_forward_is_one_unit_line() {
        let path = compile("F", 90.0).unwrap();
        assert_eq!(path.ops, vec![PathOp::Line(DVec2::new(1.0, 0.0))]);
        // the y axis collapsed and is widened around zero
        assert_eq!(path.bounds, Rect::new(0.0, -0.5, 1.0, 0.5));
    }

    #[test]
    fn lowercase_forward_moves_without_drawing() {
        let path = compile("f", 90.0).unwrap();
        assert_eq!(path.ops, vec![PathOp::Move(DVec2::new(1.0, 0.0))]);
        assert_eq!(path.bounds, Rect::new(0.0, -0.5, 1.0, 0.5));
    }

    #[test]
    fn reversal_returns_to_the_origin() {
        let path = compile("F|F", 90.0).unwrap();
        assert_eq!(path.endpoint(), DVec2::ZERO);
        assert_eq!(path.bounds, Rect::new(0.0, -0.5, 1.0, 0.5));
    }

    #[test]
    fn plus_turns_with_the_negated_angle() {
        let path = compile("+F", 90.0).unwrap();
        assert_eq!(path.ops, vec![PathOp::Line(DVec2::new(0.0, -1.0))]);
    }

    #[test]
    fn bracket_excursion_preserves_the_endpoint() {
        let trunk = compile("FF", 60.0).unwrap();
        let branched = compile("F[+F]F", 60.0).unwrap();
        assert_eq!(branched.endpoint(), trunk.endpoint());
        // the excursion is visible in the op count and the bounding box
        assert_eq!(trunk.ops.len(), 2);
        assert_eq!(branched.ops.len(), 4);
        assert_ne!(branched.bounds, trunk.bounds);
    }

    #[test]
    fn pop_emits_the_return_move() {
        let path = compile("[F]", 90.0).unwrap();
        assert_eq!(
            path.ops,
            vec![
                PathOp::Line(DVec2::new(1.0, 0.0)),
                PathOp::Move(DVec2::new(-1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn unbalanced_pop_underflows() {
        assert!(matches!(
            compile("]", 90.0),
            Err(PlotError::StackUnderflow(0))
        ));
        assert!(matches!(
            compile("F[+F]]", 90.0),
            Err(PlotError::StackUnderflow(5))
        ));
    }

    #[test]
    fn unknown_actions_are_reported_by_character() {
        assert!(matches!(
            compile("F&", 90.0),
            Err(PlotError::UnimplementedAction('&'))
        ));
    }
}
