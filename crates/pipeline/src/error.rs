//! Error types for pipeline assembly.

use pipeline_sync::QueueError;
use thiserror::Error;

/// Errors raised while assembling a [`crate::Pipeline`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A pipeline needs at least one stage to be meaningful.
    #[error("pipeline must have at least one stage")]
    NoStages,

    /// A stage's queue could not be constructed.
    #[error("stage {name:?} failed to initialize: {source}")]
    StageInit {
        name: String,
        #[source]
        source: QueueError,
    },
}
