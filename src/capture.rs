//! Sequential slide capture
//!
//! Moves the deck to each coordinate in grid order, screenshots it and
//! leaves `slide-<n>.png` next to the output document.

use crate::{Presentation, Result, SlideCoord};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A screenshot written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedSlide {
    /// 1-based capture position, also the PDF page number
    pub index: usize,
    /// Where the deck was when the screenshot was taken
    pub coord: SlideCoord,
    /// Location of the PNG file
    pub path: PathBuf,
}

/// Path of the `n`th screenshot (1-based)
pub fn screenshot_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("slide-{}.png", n))
}

/// Capture every coordinate of `grid` in order.
///
/// `on_capture` receives each screenshot right after it hits the disk; an
/// error from it, from the deck or from the filesystem stops the run and the
/// remaining slides are not visited.
pub fn capture_slides<P, F>(
    deck: &mut P,
    grid: &[SlideCoord],
    dir: &Path,
    mut on_capture: F,
) -> Result<Vec<CapturedSlide>>
where
    P: Presentation,
    F: FnMut(&CapturedSlide, &[u8]) -> Result<()>,
{
    let total = grid.len();
    let mut captured = Vec::with_capacity(total);

    for (i, &coord) in grid.iter().enumerate() {
        let index = i + 1;
        info!("Capturing slide {} / {} {}", index, total, coord);

        deck.show_slide(coord)?;
        let png = deck.capture_png()?;

        let path = screenshot_path(dir, index);
        std::fs::write(&path, &png)?;
        debug!("Wrote {} ({} bytes)", path.display(), png.len());

        let slide = CapturedSlide { index, coord, path };
        on_capture(&slide, &png)?;
        info!("Slide {} captured.", index);
        captured.push(slide);
    }

    Ok(captured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    /// Deck that records moves and fails the capture at a chosen position
    struct ScriptedDeck {
        shown: Vec<SlideCoord>,
        fail_at: Option<usize>,
    }

    impl Presentation for ScriptedDeck {
        fn open(&mut self, _url: &str) -> Result<()> {
            Ok(())
        }

        fn horizontal_count(&mut self) -> Result<usize> {
            Ok(0)
        }

        fn vertical_count(&mut self, _h: usize) -> Result<usize> {
            Ok(0)
        }

        fn show_slide(&mut self, coord: SlideCoord) -> Result<()> {
            self.shown.push(coord);
            Ok(())
        }

        fn capture_png(&mut self) -> Result<Vec<u8>> {
            if self.fail_at == Some(self.shown.len()) {
                return Err(Error::CaptureError("boom".into()));
            }
            Ok(vec![self.shown.len() as u8])
        }

        fn close(self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn screenshot_names_are_one_based() {
        assert_eq!(screenshot_path(Path::new("out"), 1), Path::new("out").join("slide-1.png"));
        assert_eq!(screenshot_path(Path::new("."), 13), Path::new(".").join("slide-13.png"));
    }

    #[test]
    fn captures_in_grid_order() {
        let dir = tempfile::tempdir().unwrap();
        let grid = crate::grid::build_grid(&[1, 0], 8);
        let mut deck = ScriptedDeck { shown: Vec::new(), fail_at: None };
        let mut seen = Vec::new();

        let slides = capture_slides(&mut deck, &grid, dir.path(), |slide, png| {
            seen.push((slide.index, png.to_vec()));
            Ok(())
        })
        .unwrap();

        assert_eq!(deck.shown, grid);
        assert_eq!(slides.len(), 3);
        assert_eq!(seen, vec![(1, vec![1]), (2, vec![2]), (3, vec![3])]);
        for slide in &slides {
            assert_eq!(slide.coord, grid[slide.index - 1]);
            assert_eq!(std::fs::read(&slide.path).unwrap(), vec![slide.index as u8]);
        }
    }

    #[test]
    fn failure_stops_remaining_captures() {
        let dir = tempfile::tempdir().unwrap();
        let grid = crate::grid::build_grid(&[3], 8);
        let mut deck = ScriptedDeck { shown: Vec::new(), fail_at: Some(2) };

        let res = capture_slides(&mut deck, &grid, dir.path(), |_, _| Ok(()));

        assert!(matches!(res, Err(Error::CaptureError(_))));
        assert_eq!(deck.shown.len(), 2);
        assert!(screenshot_path(dir.path(), 1).exists());
        assert!(!screenshot_path(dir.path(), 2).exists());
    }
}
