//! Fitting compiled paths into page regions.
//!
//! [`PagePlotter`] runs the whole chain for one request: elaborate the
//! grammar, filter it down to actions, compile the turtle path, then scale
//! and translate it so the drawing sits centered inside the target
//! rectangle. Each request produces a fresh instruction block owned by the
//! caller; nothing is cached.

use crate::compiler::compile;
use crate::error::{PlotError, Result};
use crate::grammar::{Grammar, minimize};
use crate::layout::LayoutBoxes;
use crate::turtle::Rect;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Page-level tunables, passed explicitly rather than kept as ambient state.
///
/// Lengths are PostScript points unless noted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Fraction of the fitted scale actually used, leaving the rest as
    /// whitespace around the drawing.
    pub margin_fraction: f64,

    /// Stroke width before scale compensation.
    pub line_width: f64,

    pub page_width: f64,
    pub page_height: f64,

    pub title_font: String,
    pub title_size: f64,
    pub attr_font: String,
    pub attr_size: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            margin_fraction: 0.9,
            line_width: 1.0,
            page_width: 8.5 * 72.0,
            page_height: 11.0 * 72.0,
            title_font: "/Times-Bold".to_string(),
            title_size: 30.0,
            attr_font: "/Arial".to_string(),
            attr_size: 12.0,
        }
    }
}

/// Computes the scale factor and origin that center `bounds` inside
/// `target`.
///
/// The scale is the smaller of the two per-axis candidates multiplied by
/// `margin_fraction`, so the drawing fits on both axes regardless of its
/// natural aspect ratio. Rejects targets without positive span on both axes
/// before any division happens.
pub fn fit_to_region(bounds: Rect, target: Rect, margin_fraction: f64) -> Result<(f64, DVec2)> {
    if !target.has_area() {
        return Err(PlotError::DegenerateRegion(target));
    }

    let sx = target.width() / bounds.width();
    let sy = target.height() / bounds.height();
    let scale = sx.min(sy) * margin_fraction;
    let origin = target.center() - bounds.center() * scale;
    Ok((scale, origin))
}

/// Renders grammars into page regions.
pub struct PagePlotter {
    config: PlotConfig,
}

impl PagePlotter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Elaborates `grammar` at `depth` and emits one instruction block that
    /// draws it centered inside `target`.
    ///
    /// The block brackets the compiled path with a scoped graphics state:
    /// gsave, path reset, origin move, scale, a stroke width divided by the
    /// scale (so rendered line thickness is scale-invariant), then stroke
    /// and grestore.
    pub fn place(&self, grammar: &Grammar, depth: i32, target: Rect) -> Result<String> {
        let actions = minimize(&grammar.elaborate(depth)?);
        let path = compile(&actions, grammar.angle)?;
        let (scale, origin) = fit_to_region(path.bounds, target, self.config.margin_fraction)?;
        log::debug!(
            "placed depth {depth}: {} actions, {} ops, scale {scale:.4}",
            actions.len(),
            path.ops.len(),
        );

        let mut ps = String::new();
        ps.push_str(&format!(
            "\n%Place({depth},({},{},{},{}))\n",
            target.min.x, target.min.y, target.max.x, target.max.y
        ));
        ps.push_str("gsave\n");
        ps.push_str("newpath\n");
        ps.push_str(&format!("{} {} moveto\n", origin.x, origin.y));
        ps.push_str(&format!("{scale} dup scale\n"));
        ps.push_str(&format!(
            "{} setlinewidth\n",
            self.config.line_width / scale
        ));
        for op in &path.ops {
            ps.push_str(&format!("{op}\n"));
        }
        ps.push_str("stroke\n");
        ps.push_str("grestore\n");
        Ok(ps)
    }

    /// The single rendering entry point: one instruction block per
    /// `(region name, depth)` pair, in input order.
    ///
    /// Region names are resolved against `regions`; an unknown name fails
    /// the whole call with [`PlotError::UnknownRegion`]. Callers wanting
    /// partial output must isolate failures per grammar themselves.
    pub fn render(
        &self,
        grammar: &Grammar,
        depths: &[(&str, i32)],
        regions: &LayoutBoxes,
    ) -> Result<Vec<String>> {
        let mut blocks = Vec::with_capacity(depths.len());
        for (name, depth) in depths {
            let target = regions
                .get(*name)
                .copied()
                .ok_or_else(|| PlotError::UnknownRegion((*name).to_string()))?;
            blocks.push(self.place(grammar, *depth, target)?);
        }
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rejects_degenerate_targets() {
        let bounds = Rect::new(-0.5, -0.5, 0.5, 0.5);
        for target in [
            Rect::new(10.0, 10.0, 10.0, 20.0),
            Rect::new(10.0, 10.0, 20.0, 10.0),
            Rect::new(10.0, 10.0, 5.0, 20.0),
        ] {
            assert!(matches!(
                fit_to_region(bounds, target, 0.9),
                Err(PlotError::DegenerateRegion(_))
            ));
        }
    }

    #[test]
    fn fit_centers_the_scaled_bounds() {
        let bounds = Rect::new(0.0, -2.0, 6.0, 1.0);
        let target = Rect::new(100.0, 200.0, 300.0, 260.0);
        let (scale, origin) = fit_to_region(bounds, target, 0.9).unwrap();
        // height is the limiting axis: 60/3 * 0.9
        assert_eq!(scale, 18.0);
        let placed_center = origin + bounds.center() * scale;
        assert_eq!(placed_center, target.center());
    }

    #[test]
    fn fit_uses_the_limiting_axis() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 1.0);
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);
        let (scale, _) = fit_to_region(bounds, target, 1.0).unwrap();
        assert_eq!(scale, 10.0);
    }

    #[test]
    fn place_wraps_the_path_in_a_scoped_state() {
        let koch = Grammar::new("+F--F--F", 60.0).with_rule('F', "F+F--F+F");
        let plotter = PagePlotter::new(PlotConfig::default());
        let block = plotter
            .place(&koch, 1, Rect::new(0.0, 0.0, 100.0, 100.0))
            .unwrap();
        assert!(block.starts_with("\n%Place(1,(0,0,100,100))"));
        for marker in ["gsave", "newpath", "dup scale", "setlinewidth", "stroke", "grestore"] {
            assert!(block.contains(marker), "missing {marker}");
        }
        assert_eq!(block.matches("rlineto").count(), 3);
    }

    #[test]
    fn render_resolves_regions_by_name() {
        let hilbert = Grammar::new("X", 90.0)
            .with_rule('X', "-YF+XFX+FY-")
            .with_rule('Y', "+XF-YFY-FX+");
        let plotter = PagePlotter::new(PlotConfig::default());
        let regions = LayoutBoxes::from([
            ("solo".to_string(), Rect::new(0.0, 0.0, 50.0, 50.0)),
        ]);

        let blocks = plotter
            .render(&hilbert, &[("solo", 1), ("solo", 2)], &regions)
            .unwrap();
        assert_eq!(blocks.len(), 2);

        let missing = plotter.render(&hilbert, &[("nowhere", 1)], &regions);
        assert!(matches!(missing, Err(PlotError::UnknownRegion(name)) if name == "nowhere"));
    }
}
