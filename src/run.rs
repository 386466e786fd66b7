use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::bench::timed;
use crate::error::Result;
use crate::grid::Grid;
use crate::solver::{Params, Solver};
use crate::writer::GridWriter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub output: PathBuf,
    pub rows: usize,
    /// Lines the sink rejected; the run still completes.
    pub failed_lines: usize,
    pub total_iterations: u64,
}

/// Solves the grid and times only that step.
pub fn solve_timed<S: Solver + ?Sized>(params: &Params, solver: &S) -> (Grid, Duration) {
    tracing::debug!(
        width = params.dims.width,
        height = params.dims.height,
        max_iter = params.max_iter,
        "solving"
    );
    let (grid, elapsed) = timed(|| params.solve_with(solver));
    tracing::info!(
        ?elapsed,
        total_iterations = grid.total_iterations(),
        in_set = grid.in_set_count(),
        "grid solved"
    );
    (grid, elapsed)
}

/// Compute, report the time through `on_timed`, then serialize to `output`.
///
/// `on_timed` fires before the output file is touched, so the timing line is
/// emitted even when the file cannot be created.
pub fn execute<S, W, F>(
    params: &Params,
    solver: &S,
    writer: &W,
    output: &Path,
    on_timed: F,
) -> Result<RunSummary>
where
    S: Solver + ?Sized,
    W: GridWriter,
    F: FnOnce(Duration),
{
    let (grid, elapsed) = solve_timed(params, solver);
    on_timed(elapsed);

    let written = writer.write_file(&grid, output)?;
    tracing::info!(
        output = %output.display(),
        rows = written.rows,
        failed = written.failed,
        "grid written"
    );

    Ok(RunSummary {
        elapsed,
        output: output.to_path_buf(),
        rows: written.rows,
        failed_lines: written.failed,
        total_iterations: grid.total_iterations(),
    })
}
