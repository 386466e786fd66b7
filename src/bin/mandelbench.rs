use std::path::Path;

use mandelbench::defaults;
use mandelbench::run;
use mandelbench::solver::Params;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let params = Params::default();
    let output = Path::new(defaults::OUTPUT_FILE);
    let result = run::execute(
        &params,
        &defaults::Solver::default(),
        &defaults::Writer::default(),
        output,
        |elapsed| println!("Time: {:.6} seconds", elapsed.as_secs_f64()),
    );

    match result {
        Ok(summary) => println!("Result saved to {}", summary.output.display()),
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            println!("{}", e);
        }
    }
}
