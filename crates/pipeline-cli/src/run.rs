use crate::args::Args;
use crate::error::CliError;
use pipeline::{Pipeline, StageSpec};
use tokio::io::{AsyncRead, BufReader};
use tracing::info;

/// Parses `argv`, builds the pipeline it describes, pumps `input` through
/// it to completion, and reports success. `argv` includes the program name
/// at index 0, matching `std::env::args()`.
pub async fn run<I, R>(argv: I, input: R) -> Result<(), CliError>
where
    I: Iterator<Item = String>,
    R: AsyncRead + Unpin,
{
    let args = Args::parse(argv)?;

    let mut specs = Vec::with_capacity(args.stage_names.len());
    for name in &args.stage_names {
        let transform = pipeline_stages::lookup(name)?;
        specs.push(StageSpec::new(name.clone(), transform));
    }
    info!(queue_size = args.queue_size, stages = ?args.stage_names, "assembling pipeline");

    let pipeline = Pipeline::build(args.queue_size, specs)?;
    pipeline.pump(BufReader::new(input)).await?;

    pipeline.wait_finished().await;
    pipeline.join().await;
    info!("all stages finished");
    println!("Pipeline shutdown complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> impl Iterator<Item = String> {
        words.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[tokio::test]
    async fn runs_a_single_stage_pipeline_to_completion() {
        let input = &b"hello\nworld\n"[..];
        let result = run(argv(&["prog", "4", "uppercaser"]), input).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_unknown_stage_names() {
        let input = &b""[..];
        let err = run(argv(&["prog", "4", "not-a-stage"]), input).await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn rejects_bad_arguments() {
        let input = &b""[..];
        let err = run(argv(&["prog", "0", "uppercaser"]), input).await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn eof_without_sentinel_still_completes() {
        let input = &b"only one line, no terminator"[..];
        let result = run(argv(&["prog", "2", "flipper", "uppercaser"]), input).await;
        assert!(result.is_ok());
    }
}
