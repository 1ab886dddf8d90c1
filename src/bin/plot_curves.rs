//! Renders the standard curve catalog, one page per curve, to
//! `lsys-examples.ps`.
//!
//! Pass `--outlines` to also stroke the layout region boundaries on every
//! page.

use std::fs::File;
use std::io::BufWriter;

use lsys_plot::{
    DscDocument, PagePlotter, PlotConfig, PlotError, layout_boxes, region_outlines,
    standard_curves, title_block,
};

/// Region names paired positionally with each entry's suggested depths.
const REGION_ORDER: [&str; 4] = ["left", "center", "right", "main"];

const OUTPUT_PATH: &str = "lsys-examples.ps";

fn main() -> Result<(), PlotError> {
    env_logger::init();
    let outlines = std::env::args().any(|arg| arg == "--outlines");

    let config = PlotConfig::default();
    let regions = layout_boxes(&config);
    let plotter = PagePlotter::new(config.clone());

    // Render everything before opening the sink: a curve that fails is
    // skipped, and the header's page count covers only the pages that
    // survived.
    let mut pages = Vec::new();
    for entry in standard_curves() {
        let depths: Vec<(&str, i32)> = REGION_ORDER.iter().copied().zip(entry.depths).collect();
        match plotter.render(&entry.grammar, &depths, &regions) {
            Ok(mut blocks) => {
                blocks.push(title_block(&entry, &regions, &config)?);
                if outlines {
                    blocks.push(region_outlines(&regions, &config));
                }
                pages.push(blocks);
            }
            Err(err) => log::error!("skipping {}: {err}", entry.name),
        }
    }

    let file = File::create(OUTPUT_PATH)?;
    let mut doc = DscDocument::new(
        BufWriter::new(file),
        "Lindenmayer System Examples",
        pages.len(),
        &config,
    )?;
    for blocks in &pages {
        doc.add_page(blocks)?;
    }
    doc.finish()?;
    log::info!("wrote {} pages to {OUTPUT_PATH}", pages.len());
    Ok(())
}
