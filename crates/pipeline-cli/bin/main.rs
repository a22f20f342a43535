//! Runs the string-processing pipeline described on the command line,
//! reading lines from standard input until the `<END>` sentinel or EOF.
//!
//! ```text
//! pipeline-cli <queue_size> <stage1> [stage2 ...]
//! ```

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let argv = std::env::args();
    let stdin = tokio::io::stdin();

    if let Err(err) = pipeline_cli::run(argv, stdin).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
