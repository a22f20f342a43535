//! Command-line front end for the string-processing pipeline.
//!
//! Parses an invocation line of the form `<queue_size> <stage1> [stage2 ...]`,
//! resolves each stage name against [`pipeline_stages`], assembles a
//! [`pipeline::Pipeline`], and pumps standard input through it until the
//! sentinel or end of input.

mod args;
mod error;
mod run;

pub use args::{Args, ArgsError};
pub use error::CliError;
pub use run::run;
