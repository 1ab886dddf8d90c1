//! Named page regions computed from fixed page fractions.
//!
//! The page is partitioned into seven labelled regions (PostScript
//! coordinates, origin at the bottom left, y up):
//!
//! ```text
//! +----------------4------------------+
//! |                top                |
//! +------------3---+------------------+
//! |                |                  |
//! |       a        2        b         |
//! |                |                  |
//! +----------+-2---+-----+------------+
//! |          |           |            |
//! 0 left     1  center   3   right    4
//! |          |           |            |
//! +----------+-----1-----+------------+
//! |                                   |
//! |                                   |
//! |               main                |
//! |                                   |
//! |                                   |
//! +---------------0-------------------+
//! ```
//!
//! The drawing regions are `left`, `center`, `right`, and `main`; `top`,
//! `a`, and `b` hold annotations. Nothing downstream depends on how the
//! regions are computed, only that each has positive span on both axes.

use crate::place::PlotConfig;
use crate::turtle::Rect;
use std::collections::BTreeMap;

/// Named target regions for one page, in points.
pub type LayoutBoxes = BTreeMap<String, Rect>;

/// Partitions the page into the seven named regions.
pub fn layout_boxes(config: &PlotConfig) -> LayoutBoxes {
    // region edges as fractions of the page size
    let xf = [0.05, 0.35, 0.23, 0.65, 0.95];
    let yf = [0.03, 0.58, 0.80, 0.86, 0.97];
    let x: Vec<f64> = xf.iter().map(|f| f * config.page_width).collect();
    let y: Vec<f64> = yf.iter().map(|f| f * config.page_height).collect();

    LayoutBoxes::from([
        ("main".to_string(), Rect::new(x[0], y[0], x[4], y[1])),
        ("left".to_string(), Rect::new(x[0], y[1], x[1], y[2])),
        ("center".to_string(), Rect::new(x[1], y[1], x[3], y[2])),
        ("right".to_string(), Rect::new(x[3], y[1], x[4], y[2])),
        ("a".to_string(), Rect::new(x[0], y[2], x[2], y[3])),
        ("b".to_string(), Rect::new(x[2], y[2], x[4], y[3])),
        ("top".to_string(), Rect::new(x[0], y[3], x[4], y[4])),
    ])
}

/// Stroked outlines of every region, for layout debugging.
pub fn region_outlines(regions: &LayoutBoxes, config: &PlotConfig) -> String {
    let mut ps = String::from("\n%RegionOutlines\ngsave\n");
    ps.push_str(&format!("{} setlinewidth\n", config.line_width));
    ps.push_str("1 setlinejoin\n");
    for rect in regions.values() {
        ps.push_str("newpath\n");
        ps.push_str(&format!("{} {} moveto\n", rect.min.x, rect.min.y));
        ps.push_str(&format!("{} {} lineto\n", rect.min.x, rect.max.y));
        ps.push_str(&format!("{} {} lineto\n", rect.max.x, rect.max.y));
        ps.push_str(&format!("{} {} lineto\n", rect.max.x, rect.min.y));
        ps.push_str(&format!("{} {} lineto\n", rect.min.x, rect.min.y));
        ps.push_str("closepath stroke\n");
    }
    ps.push_str("grestore\n");
    ps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_regions_with_positive_spans() {
        let config = PlotConfig::default();
        let regions = layout_boxes(&config);
        let names: Vec<&str> = regions.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b", "center", "left", "main", "right", "top"]);
        for (name, rect) in &regions {
            assert!(rect.has_area(), "{name} has no area");
            assert!(rect.min.x >= 0.0 && rect.max.x <= config.page_width);
            assert!(rect.min.y >= 0.0 && rect.max.y <= config.page_height);
        }
    }

    #[test]
    fn drawing_regions_tile_the_middle_band() {
        let regions = layout_boxes(&PlotConfig::default());
        let left = regions["left"];
        let center = regions["center"];
        let right = regions["right"];
        assert_eq!(left.max.x, center.min.x);
        assert_eq!(center.max.x, right.min.x);
        assert_eq!(left.min.y, center.min.y);
        assert_eq!(center.min.y, right.min.y);
    }

    #[test]
    fn outlines_close_every_region() {
        let config = PlotConfig::default();
        let regions = layout_boxes(&config);
        let ps = region_outlines(&regions, &config);
        assert_eq!(ps.matches("closepath stroke").count(), regions.len());
    }
}
