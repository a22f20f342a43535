use pipeline::Transform;

/// Prints every line that passes through, prefixed with `[logger] `, and
/// forwards it unchanged.
///
/// This print is part of the pipeline's documented output, not a diagnostic
/// trace, so it goes straight to stdout rather than through the tracing
/// subscriber used for the crate's own internal logging.
pub struct Logger;

impl Transform for Logger {
    fn name(&self) -> &str {
        "logger"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        println!("[logger] {line}");
        Some(line.to_string())
    }
}
