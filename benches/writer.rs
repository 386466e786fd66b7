use std::io;

use mandelbench::bench::{Benchmark, BenchmarkReport};
use mandelbench::solver::{LoopSolver, Params};
use mandelbench::writer::{CsvWriter, GridWriter};

const REPEATS: usize = 10;

fn benchmark_csv(height: usize) -> Benchmark {
    let width: usize = (4 * height) / 3;
    let grid = Params::new(width, height, 100).solve_with(&LoopSolver::default());
    let f = move || {
        let _ = CsvWriter.write(&grid, io::sink());
    };
    Benchmark::iter(&format!("csv-{}", height), REPEATS, f)
}

fn main() {
    BenchmarkReport::with_benches(&[benchmark_csv(300), benchmark_csv(600), benchmark_csv(1200)])
        .report("writer");
}
