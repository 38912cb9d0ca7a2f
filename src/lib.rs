//! Reveal.js slide exporter
//!
//! Drives a browser through every slide of a Reveal.js presentation,
//! screenshots each one and assembles the images into a single PDF, one
//! slide per landscape page.
//!
//! # Features
//!
//! - **CDP Backend** (default): Uses Chrome DevTools Protocol via headless Chrome
//! - **Pluggable deck**: the pipeline only talks to the [`Presentation`] trait,
//!   so it can be driven without a browser
//!
//! # Example
//!
//! ```no_run
//! use revealshot::{ExportConfig, Viewport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExportConfig {
//!     url: "http://localhost:1947/".to_string(),
//!     viewport: Viewport { width: 1280, height: 720 },
//!     ..Default::default()
//! };
//!
//! let report = revealshot::export_with_chrome(&config)?;
//! println!("{} pages written to {}", report.pages, report.pdf_path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod capture;
pub mod cli;
pub mod export;
pub mod grid;
pub mod pdf;

#[cfg(feature = "cdp")]
pub mod cdp;

pub use capture::CapturedSlide;
pub use export::{run, ExportReport};
pub use grid::SlideCoord;

#[cfg(feature = "cdp")]
pub use export::export_with_chrome;

/// How the exporter waits for a slide to finish its transition before
/// taking the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleMode {
    /// Sleep for `settle_ms` after every move
    Fixed,
    /// Wait for the deck's `slidetransitionend` event, falling back to
    /// `settle_ms` when it never fires
    TransitionEvent,
}

/// Configuration for an export run
///
/// The defaults target a deck served on the local network, captured with a
/// 1920x1080 viewport and a 60 second navigation budget, with
/// `presentation.pdf` written to the working directory.
///
/// # Examples
///
/// ```
/// let cfg = revealshot::ExportConfig::default();
/// assert_eq!(cfg.max_verticals, 8);
/// assert_eq!(cfg.pdf_path(), std::path::PathBuf::from("./presentation.pdf"));
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Presentation URL
    pub url: String,
    /// Chrome/Chromium executable; `None` lets the launcher find one
    pub chrome_path: Option<PathBuf>,
    /// Run the browser without a window
    pub headless: bool,
    /// Viewport dimensions (also the screenshot size)
    pub viewport: Viewport,
    /// Timeout for the initial page load in milliseconds
    pub navigation_timeout_ms: u64,
    /// Upper bound on the wait for the deck's ready signal after load
    pub load_delay_ms: u64,
    /// Transition wait strategy
    pub settle: SettleMode,
    /// Fixed settle delay, or the fallback when waiting for the transition event.
    /// Must stay below `navigation_timeout_ms`.
    pub settle_ms: u64,
    /// Cap applied to the vertical slide count of each group
    pub max_verticals: usize,
    /// Directory receiving `slide-<n>.png` and the PDF
    pub output_dir: PathBuf,
    /// File name of the PDF inside `output_dir`
    pub pdf_name: String,
    /// Document title stored in the PDF metadata
    pub title: String,
}

impl ExportConfig {
    /// Full path of the output document
    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir.join(&self.pdf_name)
    }

    /// Reject values that would make the run meaningless before a browser
    /// is launched.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::ConfigError("presentation URL is empty".into()));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.pdf_name.trim().is_empty() {
            return Err(Error::ConfigError("output PDF name is empty".into()));
        }
        // In-page waits run under the tab's default timeout, which is the
        // navigation timeout.
        for (name, wait) in [("settle", self.settle_ms), ("load delay", self.load_delay_ms)] {
            if wait >= self.navigation_timeout_ms {
                return Err(Error::ConfigError(format!(
                    "{} of {}ms must be shorter than the {}ms navigation timeout",
                    name, wait, self.navigation_timeout_ms
                )));
            }
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.1.201:1947/".to_string(),
            chrome_path: None,
            headless: true,
            viewport: Viewport::default(),
            navigation_timeout_ms: 60000,
            load_delay_ms: 3000,
            settle: SettleMode::TransitionEvent,
            settle_ms: 1000,
            max_verticals: 8,
            output_dir: PathBuf::from("."),
            pdf_name: "presentation.pdf".to_string(),
            title: "Presentation".to_string(),
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// A live slide deck the exporter can walk through.
///
/// Implementations own the browser session; the pipeline calls [`close`]
/// exactly once, whatever the outcome of the run.
///
/// [`close`]: Presentation::close
pub trait Presentation {
    /// Navigate to the deck and wait until it reports ready
    fn open(&mut self, url: &str) -> Result<()>;

    /// Number of top-level (horizontal) slide groups
    fn horizontal_count(&mut self) -> Result<usize>;

    /// Number of vertical slides nested under group `h`
    fn vertical_count(&mut self, h: usize) -> Result<usize>;

    /// Move to `coord` and wait for the transition to settle
    fn show_slide(&mut self, coord: SlideCoord) -> Result<()>;

    /// PNG of the current viewport
    fn capture_png(&mut self) -> Result<Vec<u8>>;

    /// Release the browser and clean up resources
    fn close(self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.viewport.width, 1920);
        assert_eq!(config.viewport.height, 1080);
        assert_eq!(config.navigation_timeout_ms, 60000);
        assert_eq!(config.settle, SettleMode::TransitionEvent);
        assert!(config.headless);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_viewport() {
        let config = ExportConfig {
            viewport: Viewport { width: 0, height: 1080 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn validate_rejects_settle_beyond_navigation_timeout() {
        let config = ExportConfig {
            navigation_timeout_ms: 5000,
            settle_ms: 5000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let config = ExportConfig {
            navigation_timeout_ms: 2000,
            settle_ms: 500,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))), "load delay of 3000ms");

        let config = ExportConfig {
            navigation_timeout_ms: 5000,
            settle_ms: 4999,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_url() {
        let config = ExportConfig {
            url: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }
}
