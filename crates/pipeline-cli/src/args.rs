use thiserror::Error;

/// Errors raised while parsing the invocation line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error(
        "usage: pipeline-cli <queue_size> <stage1> [stage2 ...]\n\
         available stages: logger, typewriter, uppercaser, rotator, flipper, expander\n\
         example: pipeline-cli 20 uppercaser rotator logger"
    )]
    Usage,

    #[error("queue size must be a positive integer, got {0:?}")]
    InvalidQueueSize(String),
}

/// The parsed invocation line: a queue capacity shared by every stage, and
/// the ordered list of stage names to run.
pub struct Args {
    pub queue_size: usize,
    pub stage_names: Vec<String>,
}

impl Args {
    /// Parses `argv` including the program name at index 0, matching
    /// `std::env::args()`.
    pub fn parse<I: Iterator<Item = String>>(argv: I) -> Result<Self, ArgsError> {
        let argv: Vec<String> = argv.collect();
        if argv.len() < 3 {
            return Err(ArgsError::Usage);
        }

        let queue_size: usize = argv[1]
            .parse()
            .ok()
            .filter(|&n: &usize| n > 0)
            .ok_or_else(|| ArgsError::InvalidQueueSize(argv[1].clone()))?;

        Ok(Self {
            queue_size,
            stage_names: argv[2..].to_vec(),
        })
    }
}
