use crate::args::ArgsError;
use thiserror::Error;

/// Top-level error type for a CLI invocation, carrying enough information
/// to pick the process's exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    UnknownStage(#[from] pipeline_stages::UnknownStage),

    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),

    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The process exit code this error maps to: `1` for argument and
    /// stage-lookup failures (analogous to the source's usage/loader
    /// errors), `2` for a stage that failed to initialize.
    ///
    /// `PipelineError::NoStages` is an argument error ("no stages"), not an
    /// init failure, even though it surfaces through `pipeline::Pipeline`;
    /// it is matched separately rather than collapsed into the `2` the rest
    /// of `PipelineError` maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Args(_) | Self::UnknownStage(_) | Self::Io(_) => 1,
            Self::Pipeline(pipeline::PipelineError::NoStages) => 1,
            Self::Pipeline(pipeline::PipelineError::StageInit { .. }) => 2,
        }
    }
}
