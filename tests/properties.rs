use mandelbench::complex::c;
use mandelbench::coord::{Dimensions, Viewport};
use mandelbench::solver::{escape_time, ArraySolver, LoopSolver, Params, Solver};
use proptest::prelude::*;

#[test]
fn deep_interior_reaches_cap() {
    for &(re, im) in &[(0.0, 0.0), (-0.25, 0.0), (-1.0, 0.0), (-0.1, -0.2)] {
        assert_eq!(escape_time(c(re, im), 100), 100);
    }
}

#[test]
fn right_edge_escapes_quickly() {
    let v = Viewport::default();
    let dims = Dimensions::new(800, 600);
    // last column, middle row: c ~ (0.996, 0)
    let grid = LoopSolver::default().solve(&v, dims);
    let i = grid.get(799, 300).unwrap();
    assert!(i <= 4, "got {}", i);
    assert!(escape_time(c(2.0, 0.0), 100) <= 2);
}

#[test]
fn default_grid_center_row_contains_set_members() {
    let grid = Params::default().solve_with(&LoopSolver::default());
    // pixel 533 of 800 maps to x ~ -0.0013, row 300 to y = 0
    assert_eq!(grid.get(533, 300), Some(100));
    assert!(grid.in_set_count() > 0);
    assert!(grid.in_set_count() < 800 * 600);
}

proptest! {
    #[test]
    fn counts_stay_within_cap(re in -3.0f64..3.0, im in -3.0f64..3.0, max_iter in 0u16..200) {
        prop_assert!(escape_time(c(re, im), max_iter) <= max_iter);
    }

    #[test]
    fn pixels_map_inside_half_open_viewport(
        width in 1usize..2000,
        height in 1usize..2000,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let dims = Dimensions::new(width, height);
        let px = ((width as f64) * fx) as usize;
        let py = ((height as f64) * fy) as usize;
        let z = Viewport::default().to_complex(px.min(width - 1), py.min(height - 1), dims);
        prop_assert!(z.re >= -2.0 && z.re < 1.0);
        prop_assert!(z.im >= -1.0 && z.im < 1.0);
    }

    #[test]
    fn solvers_agree(width in 1usize..40, height in 1usize..40, max_iter in 1u16..60) {
        let params = Params::new(width, height, max_iter);
        let a = params.solve_with(&LoopSolver::new(max_iter));
        let b = params.solve_with(&ArraySolver::new(max_iter));
        prop_assert_eq!(a, b);
    }
}
