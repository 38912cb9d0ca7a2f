//! Export pipeline: enumerate the deck, capture every slide, write the PDF

use crate::capture::{capture_slides, CapturedSlide};
use crate::grid;
use crate::pdf::{PageLayout, SlideDocument};
use crate::{ExportConfig, Presentation, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Outcome of a successful export
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Screenshots in capture order
    pub slides: Vec<CapturedSlide>,
    /// Where the PDF was written
    pub pdf_path: PathBuf,
    /// Number of pages in the PDF
    pub pages: usize,
}

/// Run a full export against `deck`.
///
/// The deck is closed whatever happens. A failure before the document is
/// finalized leaves no PDF behind; screenshots already taken stay on disk.
pub fn run<P: Presentation>(mut deck: P, config: &ExportConfig) -> Result<ExportReport> {
    let outcome = drive(&mut deck, config);

    let closed = deck.close();
    if let Err(e) = &closed {
        warn!("Failed to close browser cleanly: {}", e);
    }

    let report = outcome?;
    closed?;
    Ok(report)
}

fn drive<P: Presentation>(deck: &mut P, config: &ExportConfig) -> Result<ExportReport> {
    config.validate()?;

    info!("Opening presentation at {}", config.url);
    deck.open(&config.url)?;

    debug!("Enumerating slides");
    let slide_grid = grid::enumerate(deck, config.max_verticals)?;

    std::fs::create_dir_all(&config.output_dir)?;
    let mut document = SlideDocument::new(&config.title, PageLayout::default());

    debug!("Capturing {} slides", slide_grid.len());
    let slides = capture_slides(deck, &slide_grid, &config.output_dir, |_, png| {
        document.add_png(png)
    })?;

    let pdf_path = config.pdf_path();
    debug!("Finalizing {}", pdf_path.display());
    let pages = document.finish(&pdf_path)?;

    Ok(ExportReport { slides, pdf_path, pages })
}

/// Launch Chrome and export the deck at `config.url`.
#[cfg(feature = "cdp")]
pub fn export_with_chrome(config: &ExportConfig) -> Result<ExportReport> {
    config.validate()?;
    let deck = crate::cdp::CdpPresentation::launch(config.clone())?;
    run(deck, config)
}
