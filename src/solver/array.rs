use ndarray::{Array2, Zip};

use crate::complex::C;
use crate::coord::{Dimensions, Viewport};
use crate::defaults;
use crate::grid::Grid;
use crate::solver::{escape_time, Solver};

/// Materializes the plane points up front, then runs the kernel in one `Zip` pass.
#[derive(Clone, Debug)]
pub struct ArraySolver {
    iterations: u16,
}

impl ArraySolver {
    pub fn new(iterations: u16) -> Self {
        Self { iterations }
    }

    pub fn coordinates(viewport: &Viewport, dims: Dimensions) -> Array2<C<f64>> {
        Array2::from_shape_fn((dims.height, dims.width), |(y, x)| {
            viewport.to_complex(x, y, dims)
        })
    }
}

impl Default for ArraySolver {
    fn default() -> Self {
        Self::new(defaults::MAX_ITER)
    }
}

impl Solver for ArraySolver {
    fn max_iter(&self) -> u16 {
        self.iterations
    }

    fn solve(&self, viewport: &Viewport, dims: Dimensions) -> Grid {
        let ca = Self::coordinates(viewport, dims);
        let mut ia: Array2<u16> = Array2::zeros(ca.raw_dim());
        Zip::from(&mut ia)
            .and(&ca)
            .for_each(|iv, &cv| *iv = escape_time(cv, self.iterations));
        Grid::from_counts(ia, self.iterations)
    }
}
