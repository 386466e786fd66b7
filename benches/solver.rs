use mandelbench::bench::{Benchmark, BenchmarkReport};
use mandelbench::solver::{ArraySolver, LoopSolver, Params, Solver};

const REPEATS: usize = 5;

fn benchmark_solver<S>(name: &str, solver: S, height: usize) -> Benchmark
where
    S: Solver + 'static,
{
    let width: usize = (4 * height) / 3;
    let params = Params::new(width, height, solver.max_iter());
    let f = move || {
        params.solve_with(&solver);
    };
    Benchmark::iter(&format!("solver-{}-{}", name, height), REPEATS, f)
}

fn main() {
    let mut benches = vec![];
    for height in [300, 600, 1200] {
        benches.push(benchmark_solver("loop", LoopSolver::default(), height));
        benches.push(benchmark_solver("array", ArraySolver::default(), height));
    }
    BenchmarkReport::with_benches(&benches).report("solver");
}
