use pipeline::Transform;

/// Reverses the order of characters in a line.
pub struct Flipper;

impl Transform for Flipper {
    fn name(&self) -> &str {
        "flipper"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        Some(line.chars().rev().collect())
    }
}
