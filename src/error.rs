//! Error taxonomy for grammar elaboration, path compilation, and placement.

use crate::turtle::Rect;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Everything that can go wrong between a grammar and a placed drawing.
///
/// All variants are raised synchronously to the immediate caller; there is no
/// recovery layer inside the crate. A failure aborts the render for that one
/// grammar/depth/region request only.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A rewrite was requested for a negative depth. This also fires when
    /// the draws-already adjustment in
    /// [`Grammar::elaborate`](crate::grammar::Grammar::elaborate) pushes a
    /// requested depth below zero; it is never clamped.
    #[error("rewrite depth must be non-negative, got {0}")]
    InvalidDepth(i32),

    /// A character outside the action alphabet reached the path compiler.
    /// The filter and the compiler agree on the alphabet, so this indicates a
    /// contract violation rather than a recoverable input problem.
    #[error("unimplemented action: '{0}'")]
    UnimplementedAction(char),

    /// A `]` had no matching `[`. Named by the index of the offending action
    /// within the compiled sequence.
    #[error("']' at action {0} has no matching '['")]
    StackUnderflow(usize),

    /// The target rectangle has zero or negative span on an axis; rejected
    /// before any scale factor is computed.
    #[error("degenerate target region ({0:?})")]
    DegenerateRegion(Rect),

    /// A depth was supplied for a region name the layout does not provide.
    #[error("no layout region named '{0}'")]
    UnknownRegion(String),

    /// The document sink failed to write.
    #[error("document write failed: {0}")]
    Io(#[from] std::io::Error),
}
