use ndarray::Array2;

use crate::coord::{Dimensions, Point};

/// Escape-time counts indexed `[[y, x]]`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    max_iter: u16,
    counts: Array2<u16>,
}

impl Grid {
    pub fn new(dims: Dimensions, max_iter: u16) -> Self {
        Self {
            max_iter,
            counts: Array2::zeros((dims.height, dims.width)),
        }
    }

    pub(crate) fn from_counts(counts: Array2<u16>, max_iter: u16) -> Self {
        debug_assert!(counts.iter().all(|&i| i <= max_iter));
        Self { max_iter, counts }
    }

    pub fn width(&self) -> usize {
        self.counts.ncols()
    }

    pub fn height(&self) -> usize {
        self.counts.nrows()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        self.counts.get([y, x]).copied()
    }

    pub fn set(&mut self, p: Point<usize>, iterations: u16) {
        debug_assert!(iterations <= self.max_iter, "count above iteration cap");
        self.counts[[p.y, p.x]] = iterations;
    }

    /// `(x, y, iterations)` with x varying fastest.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u16)> + '_ {
        self.counts
            .indexed_iter()
            .map(|((y, x), &iterations)| (x, y, iterations))
    }

    pub fn total_iterations(&self) -> u64 {
        self.counts.iter().map(|&i| u64::from(i)).sum()
    }

    /// Pixels that never escaped within the cap.
    pub fn in_set_count(&self) -> usize {
        self.counts.iter().filter(|&&i| i == self.max_iter).count()
    }
}
