//! Command-line surface of the `revealshot` binary

use crate::{ExportConfig, SettleMode, Viewport};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Screenshot every slide of a Reveal.js deck into a PDF
#[derive(Debug, Parser)]
#[command(name = "revealshot", version, about)]
pub struct Cli {
    /// Presentation URL
    #[arg(long, env = "REVEALSHOT_URL", default_value = "http://192.168.1.201:1947/")]
    pub url: String,

    /// Chrome/Chromium executable (auto-detected when omitted)
    #[arg(long, env = "REVEALSHOT_CHROME")]
    pub chrome: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long, env = "REVEALSHOT_HEADFUL")]
    pub headful: bool,

    /// Viewport width in pixels
    #[arg(long, env = "REVEALSHOT_WIDTH", default_value_t = 1920)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, env = "REVEALSHOT_HEIGHT", default_value_t = 1080)]
    pub height: u32,

    /// Page load timeout in milliseconds
    #[arg(long, env = "REVEALSHOT_NAVIGATION_TIMEOUT_MS", default_value_t = 60000)]
    pub navigation_timeout_ms: u64,

    /// Longest wait for the deck to report ready after load
    #[arg(long, env = "REVEALSHOT_LOAD_DELAY_MS", default_value_t = 3000)]
    pub load_delay_ms: u64,

    /// How to wait for slide transitions
    #[arg(long, env = "REVEALSHOT_SETTLE", value_enum, default_value_t = Settle::Transition)]
    pub settle: Settle,

    /// Fixed settle delay, or the fallback when no transition event fires
    /// (must be shorter than the navigation timeout)
    #[arg(long, env = "REVEALSHOT_SETTLE_MS", default_value_t = 1000)]
    pub settle_ms: u64,

    /// Cap on vertical slides captured per horizontal group
    #[arg(long, env = "REVEALSHOT_MAX_VERTICALS", default_value_t = 8)]
    pub max_verticals: usize,

    /// Directory for screenshots and the PDF
    #[arg(long, short = 'o', env = "REVEALSHOT_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Output PDF file name
    #[arg(long, env = "REVEALSHOT_PDF", default_value = "presentation.pdf")]
    pub pdf: String,

    /// Title stored in the PDF metadata
    #[arg(long, env = "REVEALSHOT_TITLE", default_value = "Presentation")]
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Settle {
    /// Sleep a fixed delay after each move
    Fixed,
    /// Wait for the deck's transition-end event
    Transition,
}

impl From<Settle> for SettleMode {
    fn from(s: Settle) -> Self {
        match s {
            Settle::Fixed => SettleMode::Fixed,
            Settle::Transition => SettleMode::TransitionEvent,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> ExportConfig {
        ExportConfig {
            url: self.url,
            chrome_path: self.chrome,
            headless: !self.headful,
            viewport: Viewport {
                width: self.width,
                height: self.height,
            },
            navigation_timeout_ms: self.navigation_timeout_ms,
            load_delay_ms: self.load_delay_ms,
            settle: self.settle.into(),
            settle_ms: self.settle_ms,
            max_verticals: self.max_verticals,
            output_dir: self.out_dir,
            pdf_name: self.pdf,
            title: self.title,
        }
    }
}
