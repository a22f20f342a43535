//! Stage Workers and Pipeline Assembly
//!
//! Turns a list of named [`Transform`]s into a running chain of stages: each
//! stage owns a [`pipeline_sync::BoundedQueue`], a worker task that drains
//! it through the transform, and a hook into the next stage's queue.
//!
//! # Example
//!
//! ```
//! use pipeline::{Pipeline, StageSpec, Transform};
//! use std::sync::Arc;
//!
//! struct Upper;
//!
//! impl Transform for Upper {
//!     fn name(&self) -> &str { "upper" }
//!     async fn apply(&self, line: &str) -> Option<String> {
//!         Some(line.to_uppercase())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = Pipeline::build(16, vec![StageSpec::new("upper", Arc::new(Upper))]).unwrap();
//! pipeline.feed("hello".to_string()).await;
//! pipeline.feed(pipeline::SENTINEL.to_string()).await;
//! pipeline.wait_finished().await;
//! pipeline.join().await;
//! # }
//! ```

mod error;
mod invariants;
mod pipeline;
mod sentinel;
mod stage;
mod successor;
mod transform;

pub use error::PipelineError;
pub use pipeline::{Pipeline, StageSpec};
pub use sentinel::SENTINEL;
pub use transform::{Transform, TransformBoxed};
