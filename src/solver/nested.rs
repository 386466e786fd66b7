use crate::coord::{Dimensions, Viewport};
use crate::defaults;
use crate::grid::Grid;
use crate::solver::{escape_time, Solver};

/// Plain y-outer, x-inner loop over every pixel.
#[derive(Clone, Debug)]
pub struct LoopSolver {
    iterations: u16,
}

impl LoopSolver {
    pub fn new(iterations: u16) -> Self {
        Self { iterations }
    }
}

impl Default for LoopSolver {
    fn default() -> Self {
        Self::new(defaults::MAX_ITER)
    }
}

impl Solver for LoopSolver {
    fn max_iter(&self) -> u16 {
        self.iterations
    }

    fn solve(&self, viewport: &Viewport, dims: Dimensions) -> Grid {
        let mut grid = Grid::new(dims, self.iterations);
        for p in dims.pixels() {
            let c = viewport.to_complex(p.x, p.y, dims);
            grid.set(p, escape_time(c, self.iterations));
        }
        grid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_solve_fills_requested_shape() {
        let grid = LoopSolver::new(20).solve(&Viewport::default(), Dimensions::new(30, 20));
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        assert!(grid.iter().all(|(_, _, i)| i <= 20));
    }

    #[test]
    fn test_center_of_default_view_is_in_set() {
        // (2, 1) of a 3x2 grid lands exactly on c = 0
        let grid = LoopSolver::default().solve(&Viewport::default(), Dimensions::new(3, 2));
        assert_eq!(grid.get(2, 1), Some(100));
        // (-2, -1) escapes on the first step
        assert_eq!(grid.get(0, 0), Some(1));
    }
}
