use pipeline::Transform;
use std::io::Write;
use std::time::Duration;

const CHARACTER_DELAY: Duration = Duration::from_millis(100);

/// Prints a line one character at a time with a delay between each, like a
/// typewriter, then forwards the line unchanged.
///
/// Like [`crate::logger::Logger`], this print is part of the pipeline's
/// documented output rather than a diagnostic trace.
pub struct Typewriter;

impl Transform for Typewriter {
    fn name(&self) -> &str {
        "typewriter"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "[typewriter] ");
        let _ = stdout.flush();
        for ch in line.chars() {
            let _ = write!(stdout, "{ch}");
            let _ = stdout.flush();
            tokio::time::sleep(CHARACTER_DELAY).await;
        }
        let _ = writeln!(stdout);
        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn forwards_the_line_unchanged() {
        assert_eq!(Typewriter.apply("ab").await, Some("ab".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_line_has_no_delay() {
        let start = tokio::time::Instant::now();
        Typewriter.apply("").await;
        assert_eq!(tokio::time::Instant::now(), start);
    }
}
