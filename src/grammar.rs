//! Grammar model and string rewriting.
//!
//! A grammar is a start string, a turning angle, and one or two symbol
//! replacement tables. Each character of a string is either the name of a
//! replacement rule or one of the reserved action characters:
//!
//! | char | meaning |
//! |---|---|
//! | `F` | move forward one step, drawing a line |
//! | `f` | move forward one step without drawing |
//! | `+` | turn by the grammar's angle |
//! | `-` | turn by the grammar's angle, opposite sense |
//! | `\|` | reverse direction (turn 180 degrees) |
//! | `[` | push the drawing state onto the stack |
//! | `]` | pop the drawing state from the stack |

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All characters the path compiler understands.
pub const ACTIONS: &str = "Ff+-[]|";

/// The subset of actions that draw.
pub const DRAWING_ACTIONS: &str = "F";

/// A symbol replacement table. Symbols with no entry are terminals and
/// rewrite to themselves.
pub type Rules = BTreeMap<char, String>;

/// A Lindenmayer rewrite grammar.
///
/// Read-only for the lifetime of a render; every operation takes `&Grammar`,
/// so concurrent placements of the same grammar need no locking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grammar {
    /// Axiom the elaboration starts from.
    pub start: String,

    /// Turning angle in degrees for `+` and `-`.
    pub angle: f64,

    /// Replacements applied on every generation.
    pub rules: Rules,

    /// Optional substitution applied for exactly one generation after the
    /// main pass. Lets rule sets written against an implicit-drawing
    /// convention (some non-`F` symbol draws) be retargeted to the explicit
    /// `F`-draws convention without touching the primary table.
    pub post_rules: Rules,
}

impl Grammar {
    /// Creates a grammar with empty rule tables.
    pub fn new(start: impl Into<String>, angle: f64) -> Self {
        Self {
            start: start.into(),
            angle,
            rules: Rules::new(),
            post_rules: Rules::new(),
        }
    }

    /// Adds a replacement rule (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: &str) -> Self {
        self.rules.insert(symbol, replacement.to_string());
        self
    }

    /// Adds a post-pass replacement rule (builder pattern).
    pub fn with_post_rule(mut self, symbol: char, replacement: &str) -> Self {
        self.post_rules.insert(symbol, replacement.to_string());
        self
    }

    /// Produces the grammar string elaborated to the requested depth.
    ///
    /// If the start string already draws, one is subtracted from the depth so
    /// that depth 1 yields the simplest non-null drawing for every grammar.
    /// An adjusted depth below zero is rejected with
    /// [`PlotError::InvalidDepth`], not clamped. When `post_rules` is
    /// non-empty it is applied for a single extra generation.
    pub fn elaborate(&self, depth: i32) -> Result<String> {
        let draws = self.start.chars().any(|c| DRAWING_ACTIONS.contains(c));
        let depth = if draws { depth - 1 } else { depth };

        let core = rewrite(&self.rules, &self.start, depth)?;
        if self.post_rules.is_empty() {
            Ok(core)
        } else {
            rewrite(&self.post_rules, &core, 1)
        }
    }
}

/// Applies `rules` to `start` for `depth` parallel generations.
///
/// Within one generation every character is replaced by its rule (or kept if
/// it has none) in left-to-right order; characters introduced by a
/// replacement are only rewritten on the next generation. Depth 0 returns
/// `start` unchanged. Output is deterministic for identical inputs.
pub fn rewrite(rules: &Rules, start: &str, depth: i32) -> Result<String> {
    if depth < 0 {
        return Err(PlotError::InvalidDepth(depth));
    }

    let mut current = start.to_string();
    for _ in 0..depth {
        let mut next = String::with_capacity(current.len() * 2);
        for c in current.chars() {
            match rules.get(&c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        current = next;
    }
    Ok(current)
}

/// Strips a grammar string down to the action alphabet, preserving order.
///
/// Non-terminal symbols that survived elaboration (and whitespace inside rule
/// strings) are dropped silently rather than rejected; the compiler remains
/// the hard gate for unknown characters.
pub fn minimize(s: &str) -> String {
    s.chars().filter(|c| ACTIONS.contains(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algae() -> Rules {
        Rules::from([('A', "AB".to_string()), ('B', "A".to_string())])
    }

    #[test]
    fn rewrite_depth_zero_returns_start() {
        assert_eq!(rewrite(&algae(), "A", 0).unwrap(), "A");
    }

    #[test]
    fn rewrite_follows_the_algae_sequence() {
        let rules = algae();
        assert_eq!(rewrite(&rules, "A", 1).unwrap(), "AB");
        assert_eq!(rewrite(&rules, "A", 2).unwrap(), "ABA");
        assert_eq!(rewrite(&rules, "A", 3).unwrap(), "ABAAB");
        assert_eq!(rewrite(&rules, "A", 4).unwrap(), "ABAABABA");
    }

    #[test]
    fn rewrite_rejects_negative_depth() {
        assert!(matches!(
            rewrite(&algae(), "A", -1),
            Err(PlotError::InvalidDepth(-1))
        ));
    }

    #[test]
    fn terminals_rewrite_to_themselves() {
        assert_eq!(rewrite(&algae(), "A+C", 1).unwrap(), "AB+C");
    }

    #[test]
    fn elaborate_depth_zero_is_the_start_for_non_drawing_starts() {
        let hilbert = Grammar::new("X", 90.0)
            .with_rule('X', "-YF+XFX+FY-")
            .with_rule('Y', "+XF-YFY-FX+");
        assert_eq!(hilbert.elaborate(0).unwrap(), "X");
        assert_eq!(hilbert.elaborate(1).unwrap(), "-YF+XFX+FY-");
    }

    #[test]
    fn elaborate_decrements_when_the_start_draws() {
        let koch = Grammar::new("+F--F--F", 60.0).with_rule('F', "F+F--F+F");
        // depth 1 is the shallowest depth that yields a drawing
        assert_eq!(koch.elaborate(1).unwrap(), "+F--F--F");
        assert_eq!(
            koch.elaborate(2).unwrap(),
            "+F+F--F+F--F+F--F+F--F+F--F+F"
        );
    }

    #[test]
    fn elaborate_rejects_depth_zero_when_the_start_draws() {
        let koch = Grammar::new("+F--F--F", 60.0).with_rule('F', "F+F--F+F");
        assert!(matches!(
            koch.elaborate(0),
            Err(PlotError::InvalidDepth(-1))
        ));
    }

    #[test]
    fn post_rules_run_for_one_generation() {
        let gosper = Grammar::new("A", 60.0)
            .with_rule('A', "A-B--B+A++AA+B-")
            .with_rule('B', "+A-BB--B-A++A+B")
            .with_post_rule('A', "F")
            .with_post_rule('B', "F");
        assert_eq!(gosper.elaborate(1).unwrap(), "F-F--F+F++FF+F-");
    }

    #[test]
    fn minimize_keeps_only_actions_in_order() {
        assert_eq!(minimize("-YF+XFX+FY-"), "-F+FF+F-");
        assert_eq!(minimize("BF+FF+B F--F-- BF+FF+B"), "F+FF+F--F--F+FF+");
        assert_eq!(minimize("XYZ \n"), "");
    }
}
