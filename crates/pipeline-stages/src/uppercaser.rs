use pipeline::Transform;

/// Converts every ASCII alphabetic byte in a line to uppercase.
///
/// Non-ASCII bytes pass through unchanged, matching `char::to_ascii_uppercase`
/// rather than a locale-aware uppercase mapping.
pub struct Uppercaser;

impl Transform for Uppercaser {
    fn name(&self) -> &str {
        "uppercaser"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        Some(line.to_ascii_uppercase())
    }
}
