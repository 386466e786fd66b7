pub mod bench;
pub mod complex;
pub mod coord;
pub mod error;
pub mod grid;
pub mod run;
pub mod solver;
pub mod writer;

pub use error::{Error, Result};

pub mod defaults {
    pub const WIDTH: usize = 800;
    pub const HEIGHT: usize = 600;
    pub const MAX_ITER: u16 = 100;

    pub const XMIN: f64 = -2.0;
    pub const XMAX: f64 = 1.0;
    pub const YMIN: f64 = -1.0;
    pub const YMAX: f64 = 1.0;

    pub const OUTPUT_FILE: &str = "mandelbrot_rust_data.csv";

    use crate::solver::LoopSolver;
    use crate::writer::CsvWriter;
    pub type Solver = LoopSolver;
    pub type Writer = CsvWriter;
}
