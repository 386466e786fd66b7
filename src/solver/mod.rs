use crate::complex::{origin, C};
use crate::coord::{Dimensions, Viewport};
use crate::defaults;
use crate::grid::Grid;

pub mod array;
pub mod nested;

pub use array::ArraySolver;
pub use nested::LoopSolver;

/// Squared escape radius: |z| > 2.
pub const BAILOUT: f64 = 4.0;

/// Iterates z <- z^2 + c from the origin and returns the step count at escape,
/// or `max_iter` if z stays bounded.
#[inline]
pub fn escape_time(c: C<f64>, max_iter: u16) -> u16 {
    let mut z = origin();
    let mut i = 0;
    while z.norm_sqr() <= BAILOUT && i < max_iter {
        z = (z * z) + c;
        i += 1;
    }
    i
}

pub trait Solver {
    fn max_iter(&self) -> u16;

    fn solve(&self, viewport: &Viewport, dims: Dimensions) -> Grid;
}

/// Everything one benchmark run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub dims: Dimensions,
    pub max_iter: u16,
    pub viewport: Viewport,
}

impl Params {
    pub fn new(width: usize, height: usize, max_iter: u16) -> Self {
        Self {
            dims: Dimensions::new(width, height),
            max_iter,
            viewport: Viewport::default(),
        }
    }

    pub fn solve_with<S: Solver + ?Sized>(&self, solver: &S) -> Grid {
        debug_assert_eq!(solver.max_iter(), self.max_iter);
        solver.solve(&self.viewport, self.dims)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(defaults::WIDTH, defaults::HEIGHT, defaults::MAX_ITER)
    }
}
