//! Chrome DevTools Protocol adapter implementation

use crate::{Error, ExportConfig, Presentation, Result, SettleMode, SlideCoord};
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resolves `true` once Reveal reports ready, `false` after `{{TIMEOUT}}` ms
/// or when there is no Reveal global at all.
const READY_SCRIPT: &str = r#"new Promise(function(resolve){
    if (typeof Reveal === 'undefined') { resolve(false); return; }
    if (typeof Reveal.isReady === 'function' && Reveal.isReady()) { resolve(true); return; }
    var timer = setTimeout(function(){ resolve(false); }, {{TIMEOUT}});
    Reveal.on('ready', function(){ clearTimeout(timer); resolve(true); });
})"#;

/// Listener goes in before the move so a fast transition is not missed.
const TRANSITION_SCRIPT: &str = r#"new Promise(function(resolve){
    var timer = null;
    function done(fired){
        if (timer !== null) clearTimeout(timer);
        Reveal.off('slidetransitionend', onEnd);
        resolve(fired);
    }
    function onEnd(){ done(true); }
    Reveal.on('slidetransitionend', onEnd);
    var cur = Reveal.getIndices();
    if (cur.h === {{H}} && (cur.v || 0) === {{V}}) { done(true); return; }
    timer = setTimeout(function(){ done(false); }, {{TIMEOUT}});
    Reveal.slide({{H}}, {{V}});
})"#;

/// CDP-backed Reveal.js deck (uses the `headless_chrome` crate)
///
/// Launches Chrome with the configured viewport, drives a single tab and
/// talks to the deck through the page's `Reveal` global.
pub struct CdpPresentation {
    browser: Browser,
    tab: Arc<Tab>,
    config: ExportConfig,
}

impl CdpPresentation {
    pub fn launch(config: ExportConfig) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .path(config.chrome_path.clone())
            .idle_browser_timeout(Duration::from_millis(config.navigation_timeout_ms.max(30000)))
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build launch options: {}", e))
            })?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab, config })
    }

    /// Evaluate `script` in the page and return the JSON value it produced.
    fn eval(&self, script: &str, await_promise: bool) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, await_promise)
            .map_err(|e| Error::ScriptError(format!("Evaluation failed: {}", e)))?;

        result.value.ok_or_else(|| {
            Error::ScriptError(format!("No value returned from `{}`", script.trim()))
        })
    }

    fn eval_count(&self, script: &str) -> Result<usize> {
        let value = self.eval(script, false)?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| Error::ScriptError(format!("Expected a slide count, got {}", value)))
    }

    fn wait_until_ready(&self) -> Result<()> {
        let script = READY_SCRIPT.replace("{{TIMEOUT}}", &self.config.load_delay_ms.to_string());
        let ready = self.eval(&script, true)?.as_bool().unwrap_or(false);
        if !ready {
            warn!("Deck did not report ready within {}ms; continuing", self.config.load_delay_ms);
        }
        Ok(())
    }
}

impl Presentation for CdpPresentation {
    fn open(&mut self, url: &str) -> Result<()> {
        let timeout_ms = self.config.navigation_timeout_ms;
        self.tab.set_default_timeout(Duration::from_millis(timeout_ms));

        let started = Instant::now();
        let timed_out = |e: anyhow::Error, what: &str| {
            if started.elapsed() >= Duration::from_millis(timeout_ms) {
                Error::Timeout(timeout_ms)
            } else {
                Error::LoadError(format!("{}: {}", what, e))
            }
        };

        self.tab
            .navigate_to(url)
            .map_err(|e| timed_out(e, "Navigation failed"))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| timed_out(e, "Wait for navigation failed"))?;
        debug!("Navigated to {} in {:?}", url, started.elapsed());

        self.wait_until_ready()
    }

    fn horizontal_count(&mut self) -> Result<usize> {
        self.eval_count("Reveal.getHorizontalSlides().length")
    }

    fn vertical_count(&mut self, h: usize) -> Result<usize> {
        // Reveal's own getVerticalSlides() is deck-wide; count the stack of group `h`.
        self.eval_count(&format!(
            "Reveal.getHorizontalSlides()[{}].querySelectorAll(':scope > section').length",
            h
        ))
    }

    fn show_slide(&mut self, coord: SlideCoord) -> Result<()> {
        match self.config.settle {
            SettleMode::Fixed => {
                self.tab
                    .evaluate(&format!("Reveal.slide({}, {})", coord.h, coord.v), false)
                    .map_err(|e| {
                        Error::ScriptError(format!("Failed to move to {}: {}", coord, e))
                    })?;
                std::thread::sleep(Duration::from_millis(self.config.settle_ms));
            }
            SettleMode::TransitionEvent => {
                let script = TRANSITION_SCRIPT
                    .replace("{{H}}", &coord.h.to_string())
                    .replace("{{V}}", &coord.v.to_string())
                    .replace("{{TIMEOUT}}", &self.config.settle_ms.to_string());
                let fired = self.eval(&script, true)?.as_bool().unwrap_or(false);
                if !fired {
                    debug!(
                        "No transition event for {}, used {}ms fallback",
                        coord, self.config.settle_ms
                    );
                }
            }
        }
        Ok(())
    }

    fn capture_png(&mut self) -> Result<Vec<u8>> {
        self.tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::CaptureError(format!("Screenshot failed: {}", e)))
    }

    fn close(self) -> Result<()> {
        // Dropping the browser terminates the Chrome child process.
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
