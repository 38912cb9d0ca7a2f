//! Error types for the slide exporter

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while exporting a presentation
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch the browser or open a tab
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to load the presentation URL
    #[error("Failed to load presentation: {0}")]
    LoadError(String),

    /// The in-page slide deck API was missing or returned something unexpected
    #[error("Slide deck script failed: {0}")]
    ScriptError(String),

    /// Failed to capture a screenshot
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// Failed to decode an image or serialize the document
    #[error("PDF assembly failed: {0}")]
    PdfError(String),

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error while writing screenshots or the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_the_budget() {
        assert_eq!(Error::Timeout(60000).to_string(), "Operation timed out after 60000ms");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
