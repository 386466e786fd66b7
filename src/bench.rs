use std::fs;
use std::io::{self, stdout, Write};
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Runs `f` once and returns its value along with the wall-clock time it took.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[derive(Clone)]
pub struct Benchmark {
    f: Rc<dyn Fn()>,
    name: String,
    iterations: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
}

impl Unit {
    pub fn format(&self, d: &Duration, width: usize) -> String {
        let (symbol, value) = match self {
            Self::Nanosecond => ("ns", d.as_nanos()),
            Self::Microsecond => ("us", d.as_micros()),
            Self::Millisecond => ("ms", d.as_millis()),
            Self::Second => ("s", d.as_secs() as u128),
        };
        format!("{:>width$}{:<2}", value, symbol)
    }

    /// Largest unit that keeps the value below `treshold`.
    pub fn scaled(d: &Duration, treshold: u128) -> Self {
        if d.as_nanos() < treshold {
            Self::Nanosecond
        } else if d.as_micros() < treshold {
            Self::Microsecond
        } else if d.as_millis() < treshold {
            Self::Millisecond
        } else {
            Self::Second
        }
    }
}

impl Benchmark {
    pub fn iter<F: Fn() + 'static>(name: &str, n: usize, f: F) -> Self {
        Self {
            f: Rc::new(f),
            name: name.to_string(),
            iterations: n.max(1),
        }
    }

    pub fn once<F: Fn() + 'static>(name: &str, f: F) -> Self {
        Self::iter(name, 1, f)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> Duration {
        let ((), elapsed) = timed(|| {
            for _ in 0..self.iterations {
                (self.f)();
            }
        });
        elapsed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchResult {
    pub name: String,
    pub iterations: usize,
    pub total: Duration,
}

impl BenchResult {
    pub fn per_call(&self) -> Duration {
        self.total.div_f64(self.iterations as f64)
    }
}

#[derive(Default)]
pub struct BenchmarkReport {
    benches: Vec<Benchmark>,
    results: Vec<BenchResult>,
}

impl BenchmarkReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bench(&mut self, bench: Benchmark) {
        self.benches.push(bench);
    }

    pub fn with_benches(benches: &[Benchmark]) -> Self {
        let mut this = Self::new();
        for bench in benches {
            this.add_bench(bench.clone());
        }
        this
    }

    pub fn results(&self) -> &[BenchResult] {
        &self.results
    }

    pub fn run(&mut self) {
        for bench in &self.benches {
            let total = bench.run();
            tracing::debug!(bench = bench.name(), ?total, "benchmark finished");
            self.results.push(BenchResult {
                name: bench.name.clone(),
                iterations: bench.iterations,
                total,
            });
            print!(".");
            let _ = stdout().flush();
        }
        println!();
    }

    pub fn show(&self) {
        println!(
            "  {: <30} {: >8}   {: >8}",
            "benchmark", "total", "per_call"
        );
        for r in &self.results {
            let per_call = r.per_call();
            println!(
                "  {: <30} {}   {}",
                r.name,
                Unit::scaled(&r.total, 100000).format(&r.total, 6),
                Unit::scaled(&per_call, 100000).format(&per_call, 6),
            )
        }
    }

    pub fn to_csv(&self) -> String {
        let mut lines: Vec<String> = vec!["benchmark,total_us,iterations,per_call_us".to_string()];
        for r in &self.results {
            lines.push(format!(
                "{},{},{},{}",
                r.name,
                r.total.as_micros(),
                r.iterations,
                r.per_call().as_micros(),
            ));
        }
        lines.push("".to_string());
        lines.join("\n")
    }

    pub fn write_csv<P: AsRef<Path>>(&self, filename: P) -> io::Result<()> {
        fs::write(filename, self.to_csv())
    }

    pub fn report(&mut self, name: &str) {
        print!("Benchmark: {}", name);
        self.run();
        self.show();
        let filename = format!("benchmark_{}.csv", name);
        if let Err(e) = self.write_csv(&filename) {
            tracing::error!(%filename, error = %e, "could not write benchmark report");
        }
    }
}
