//! Slide grid enumeration
//!
//! A Reveal.js deck is a row of horizontal groups, each optionally holding a
//! stack of vertical slides. The exporter visits them column by column.

use crate::{Presentation, Result};
use log::info;
use std::fmt;

/// Zero-based position of a slide in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideCoord {
    /// Horizontal group index
    pub h: usize,
    /// Vertical index inside the group
    pub v: usize,
}

impl SlideCoord {
    pub fn new(h: usize, v: usize) -> Self {
        Self { h, v }
    }
}

impl fmt::Display for SlideCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(h: {}, v: {})", self.h, self.v)
    }
}

/// Build the capture order from per-group vertical counts.
///
/// Each group contributes `v = 0..=min(max_verticals, count)`. The upper
/// bound is inclusive, so a group always yields at least one coordinate and
/// one more than its capped count. Exported decks rely on this order, keep
/// it stable.
pub fn build_grid(vertical_counts: &[usize], max_verticals: usize) -> Vec<SlideCoord> {
    vertical_counts
        .iter()
        .enumerate()
        .flat_map(|(h, &count)| {
            let last = count.min(max_verticals);
            (0..=last).map(move |v| SlideCoord { h, v })
        })
        .collect()
}

/// Query the live deck for its layout and build the grid.
///
/// Any failed query aborts the enumeration; no partial grid is returned.
pub fn enumerate<P: Presentation>(deck: &mut P, max_verticals: usize) -> Result<Vec<SlideCoord>> {
    let horizontals = deck.horizontal_count()?;
    let mut counts = Vec::with_capacity(horizontals);
    for h in 0..horizontals {
        counts.push(deck.vertical_count(h)?);
    }

    let grid = build_grid(&counts, max_verticals);
    info!("Total slides detected: {} ({} horizontal groups)", grid.len(), horizontals);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_groups_with_cap() {
        let grid = build_grid(&[3, 10], 8);
        assert_eq!(grid.len(), 13);
        assert_eq!(grid[0], SlideCoord::new(0, 0));
        assert_eq!(grid[3], SlideCoord::new(0, 3));
        assert_eq!(grid[4], SlideCoord::new(1, 0));
        assert_eq!(grid[12], SlideCoord::new(1, 8));
    }

    #[test]
    fn length_is_sum_of_capped_counts_plus_one() {
        let counts = [0, 1, 8, 9, 25];
        let expected: usize = counts.iter().map(|&c: &usize| c.min(8) + 1).sum();
        assert_eq!(build_grid(&counts, 8).len(), expected);
    }

    #[test]
    fn order_is_strictly_increasing() {
        let grid = build_grid(&[2, 0, 5], 8);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        for h in 0..3 {
            let first = grid.iter().find(|c| c.h == h).unwrap();
            assert_eq!(first.v, 0);
        }
    }

    #[test]
    fn no_groups_means_empty_grid() {
        assert!(build_grid(&[], 8).is_empty());
    }

    #[test]
    fn display_matches_progress_format() {
        assert_eq!(SlideCoord::new(1, 4).to_string(), "(h: 1, v: 4)");
    }
}
