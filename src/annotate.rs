//! Title, reference, and rule annotations for one page.

use crate::catalog::CurveEntry;
use crate::error::{PlotError, Result};
use crate::layout::LayoutBoxes;
use crate::place::PlotConfig;
use crate::turtle::Rect;

fn region(regions: &LayoutBoxes, name: &str) -> Result<Rect> {
    regions
        .get(name)
        .copied()
        .ok_or_else(|| PlotError::UnknownRegion(name.to_string()))
}

/// PDF link annotation for one reference line, so the URL is clickable in
/// viewers that honor `pdfmark`.
fn pdfmark(x: f64, y: f64, y_top: f64, url: &str) -> String {
    format!(
        concat!(
            "\n%pdfmark",
            "\n[",
            "\n  /Rect [",
            "\n    {x}",
            "\n    {y0}",
            "\n    {x}",
            "\n      ({url})",
            "\n      stringwidth pop add",
            "\n    {y1}",
            "\n  ]",
            "\n  /Action <<",
            "\n    /Subtype /URI",
            "\n    /URI ({url})",
            "\n  >>",
            "\n  /Border [0 0 1]",
            "\n  /Color [0 0 1]",
            "\n  /Subtype /Link",
            "\n  /ANN",
            "\npdfmark",
            "\n\n",
        ),
        x = x,
        y0 = y - 2.0,
        y1 = y_top - 2.0,
        url = url,
    )
}

/// Emits the title centered in `top`, the reference list under it (each with
/// a link annotation), the grammar attributes into region `a`, and the rule
/// tables into region `b`.
pub fn title_block(entry: &CurveEntry, regions: &LayoutBoxes, config: &PlotConfig) -> Result<String> {
    let top = region(regions, "top")?;
    let a = region(regions, "a")?;
    let b = region(regions, "b")?;

    let mut ps = String::from("\n%TitleBlock\ngsave\n");

    // title, centered
    ps.push_str(&format!("{} findfont\n", config.title_font));
    ps.push_str(&format!("{} scalefont setfont\n", config.title_size));
    ps.push_str(&format!(
        "{} ({}) stringwidth pop 2 div sub {} moveto\n",
        top.center().x,
        entry.title,
        top.max.y - config.title_size
    ));
    ps.push_str(&format!("({}) show\n", entry.title));

    // references
    ps.push_str(&format!("{} findfont\n", config.attr_font));
    ps.push_str(&format!("{} scalefont setfont\n", config.attr_size));
    let x = top.min.x;
    let mut y = top.max.y - config.title_size - config.attr_size;
    for url in entry.refs {
        y -= config.attr_size;
        ps.push_str(&format!("{x} {y} moveto\n"));
        ps.push_str(&format!("({url}) show\n"));
        ps.push_str(&pdfmark(x, y, y + config.attr_size, url));
    }

    // grammar attributes
    ps.push_str(&format!("{} {} moveto\n", a.min.x, a.max.y));
    let attrs = [
        format!("angle : {}", entry.grammar.angle),
        format!("start : {}", entry.grammar.start),
    ];
    for line in attrs {
        ps.push_str(&format!("0 {} rmoveto\n", -config.attr_size));
        ps.push_str(&format!("({line}) gsave show grestore\n"));
    }

    // rule tables
    ps.push_str(&format!("{} {} moveto\n", b.min.x, b.max.y));
    for (symbol, replacement) in &entry.grammar.rules {
        ps.push_str(&format!("0 {} rmoveto\n", -config.attr_size));
        ps.push_str(&format!("({symbol} : {replacement}) gsave show grestore\n"));
    }
    for (symbol, replacement) in &entry.grammar.post_rules {
        ps.push_str(&format!("0 {} rmoveto\n", -config.attr_size));
        ps.push_str(&format!(
            "(post {symbol} : {replacement}) gsave show grestore\n"
        ));
    }

    ps.push_str("grestore\n");
    Ok(ps)
}
