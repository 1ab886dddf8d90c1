//! Named example grammars with page-ready depth suggestions.

use crate::grammar::Grammar;
use serde::Serialize;

/// Depths used when an entry does not say otherwise.
const DEFAULT_DEPTHS: [i32; 4] = [1, 2, 3, 6];

/// One catalog row: a titled grammar plus the rewrite depths suggested for
/// the `left`, `center`, `right`, and `main` regions.
#[derive(Clone, Debug, Serialize)]
pub struct CurveEntry {
    pub name: &'static str,
    pub title: &'static str,
    /// Source links, rendered into the page annotations.
    pub refs: &'static [&'static str],
    /// Rewrite depths for the left, center, right, and main regions.
    pub depths: [i32; 4],
    pub grammar: Grammar,
}

/// The curves shipped with the plotter.
pub fn standard_curves() -> Vec<CurveEntry> {
    vec![
        CurveEntry {
            name: "hilbert",
            title: "Hilbert Curve",
            refs: &["https://www.cs.unh.edu/~charpov/programming-lsystems.html"],
            depths: DEFAULT_DEPTHS,
            grammar: Grammar::new("X", 90.0)
                .with_rule('X', "-YF+XFX+FY-")
                .with_rule('Y', "+XF-YFY-FX+"),
        },
        CurveEntry {
            name: "koch",
            title: "Koch's Snowflake",
            refs: &["https://www.cs.unh.edu/~charpov/programming-lsystems.html"],
            depths: DEFAULT_DEPTHS,
            grammar: Grammar::new("+F--F--F", 60.0).with_rule('F', "F+F--F+F"),
        },
        CurveEntry {
            name: "peano",
            title: "Peano Curve aka Hilbert II",
            refs: &[
                "http://bl.ocks.org/nitaku/8949471",
                "http://mathworld.wolfram.com/HilbertCurve.html",
            ],
            depths: [1, 2, 3, 4],
            grammar: Grammar::new("L", 90.0)
                .with_rule('L', "LFRFL-F-RFLFR+F+LFRFL")
                .with_rule('R', "RFLFR+F+LFRFL-F-RFLFR"),
        },
        CurveEntry {
            name: "gosper",
            title: "Peano-Gosper Curve aka 'Flowsnake'",
            refs: &[
                "https://en.wikipedia.org/wiki/Gosper_curve",
                "http://larryriddle.agnesscott.org/ifs/ksnow/flowsnake.htm",
            ],
            depths: [1, 2, 3, 4],
            grammar: Grammar::new("A", 60.0)
                .with_rule('A', "A-B--B+A++AA+B-")
                .with_rule('B', "+A-BB--B-A++A+B")
                .with_post_rule('A', "F")
                .with_post_rule('B', "F"),
        },
        CurveEntry {
            name: "sierpinski-diamond",
            title: "Sierpinski Diamond",
            refs: &["http://paulbourke.net/fractals/lsys/"],
            depths: [2, 3, 4, 5],
            grammar: Grammar::new("F+XF+F+XF", 90.0)
                .with_rule('X', "XF-F+F-XF+F+XF-F+F-X"),
        },
        CurveEntry {
            name: "sierpinski-arrowhead",
            title: "Sierpinski Arrowhead",
            refs: &["http://paulbourke.net/fractals/lsys/"],
            depths: [2, 3, 4, 8],
            grammar: Grammar::new("YF", 60.0)
                .with_rule('X', "YF+XF+Y")
                .with_rule('Y', "XF-YF-X"),
        },
        CurveEntry {
            name: "sierpinski-square-snowflake",
            title: "Sierpinski Square Snowflake",
            refs: &[
                "https://en.wikipedia.org/wiki/Sierpi%C5%84ski_curve",
                "http://mathworld.wolfram.com/SierpinskiCurve.html",
            ],
            depths: [1, 2, 3, 4],
            grammar: Grammar::new("+BABA", 45.0)
                .with_rule('A', "F--F--")
                .with_rule('B', "BF+FF+B F--F-- BF+FF+B"),
        },
        CurveEntry {
            name: "pentaplexity",
            title: "Pentaplexity",
            refs: &["http://paulbourke.net/fractals/lsys/"],
            depths: [1, 2, 3, 4],
            grammar: Grammar::new("F++F++F++F++F", 36.0)
                .with_rule('F', "F++F++F|F-F++F"),
        },
        CurveEntry {
            name: "dragon",
            title: "Dragon Curve",
            refs: &["http://paulbourke.net/fractals/lsys/"],
            depths: [2, 4, 6, 14],
            grammar: Grammar::new("+FX", 90.0)
                .with_rule('X', "X+YF+")
                .with_rule('Y', "-FX-Y"),
        },
        CurveEntry {
            name: "plant-1",
            title: "Plant 1",
            refs: &["https://www.cs.unh.edu/~charpov/programming-lsystems.html"],
            depths: DEFAULT_DEPTHS,
            grammar: Grammar::new("++++X", 22.5)
                .with_rule('X', "F+[[X]-X]-F[-FX]+X")
                .with_rule('F', "FF"),
        },
        CurveEntry {
            name: "plant-2",
            title: "Plant 2",
            refs: &["https://www.cs.unh.edu/~charpov/programming-lsystems.html"],
            depths: DEFAULT_DEPTHS,
            grammar: Grammar::new("++++F", 22.5)
                .with_rule('F', "FF-[-F+F+F]+[+F-F-F]"),
        },
    ]
}
