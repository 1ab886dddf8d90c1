//! Structured PostScript document output.
//!
//! Accepts one page of instruction blocks at a time and writes an Adobe
//! Document Structuring Conventions wrapper around them: document header,
//! per-page markers with an ordinal, and the end-of-file trailer. The sink
//! never inspects block contents and owns nothing beyond the page counter.

use crate::error::Result;
use crate::place::PlotConfig;
use std::io::Write;

/// Writes a DSC-structured document to any byte sink.
pub struct DscDocument<W: Write> {
    writer: W,
    npages: usize,
    page: usize,
}

impl<W: Write> DscDocument<W> {
    /// Writes the document header and wraps the sink.
    ///
    /// `npages` must be the number of pages the caller will actually add;
    /// the header declares it up front. The header carries no timestamp, so
    /// identical inputs produce byte-identical documents.
    pub fn new(mut writer: W, title: &str, npages: usize, config: &PlotConfig) -> Result<Self> {
        write!(
            writer,
            "%!PS-Adobe-3.0\n\
             %%Title: {title}\n\
             %%Creator: lsys-plot\n\
             %%BoundingBox: 0 0 {} {}\n\
             %%Pages: {npages}\n\
             %%EndComments\n",
            config.page_width, config.page_height
        )?;
        Ok(Self {
            writer,
            npages,
            page: 1,
        })
    }

    /// Writes one page: the page marker, the blocks in order, `showpage`.
    pub fn add_page(&mut self, blocks: &[String]) -> Result<()> {
        write!(self.writer, "\n%%Page: {} {}\n", self.page, self.npages)?;
        for block in blocks {
            self.writer.write_all(block.as_bytes())?;
        }
        self.writer.write_all(b"\nshowpage\n")?;
        self.page += 1;
        Ok(())
    }

    /// Writes the trailer and hands the sink back.
    pub fn finish(mut self) -> Result<W> {
        self.writer.write_all(b"\n%%EOF\n")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
