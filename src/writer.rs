use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Outcome of a best-effort serialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Written {
    /// Data rows handed to the sink, header excluded.
    pub rows: usize,
    /// Lines (header included) whose write returned an error.
    pub failed: usize,
    pub flushed: bool,
}

impl Written {
    pub fn is_complete(&self) -> bool {
        self.failed == 0 && self.flushed
    }

    fn record(&mut self, line: io::Result<()>) {
        if let Err(e) = line {
            if self.failed == 0 {
                tracing::warn!(error = %e, "write failed, continuing");
            }
            self.failed += 1;
        }
    }
}

pub trait GridWriter {
    /// Serializes every cell of `grid` into `out`. Individual write errors do not
    /// stop the output; they are counted in the returned `Written`.
    fn write<W: Write>(&self, grid: &Grid, out: W) -> Written;

    /// Only file creation is fatal.
    fn write_file<P: AsRef<Path>>(&self, grid: &Grid, path: P) -> Result<Written> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        let written = self.write(grid, BufWriter::new(file));
        if !written.is_complete() {
            tracing::warn!(
                output = %path.display(),
                failed = written.failed,
                flushed = written.flushed,
                "output may be incomplete"
            );
        }
        Ok(written)
    }
}

pub const CSV_HEADER: &str = "x,y,iter";

/// `x,y,iter` rows, row-major.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvWriter;

impl GridWriter for CsvWriter {
    fn write<W: Write>(&self, grid: &Grid, mut out: W) -> Written {
        let mut written = Written::default();
        written.record(writeln!(out, "{}", CSV_HEADER));
        for (x, y, iterations) in grid.iter() {
            written.record(writeln!(out, "{},{},{}", x, y, iterations));
            written.rows += 1;
        }
        match out.flush() {
            Ok(()) => written.flushed = true,
            Err(e) => tracing::warn!(error = %e, "flush failed"),
        }
        written
    }
}
