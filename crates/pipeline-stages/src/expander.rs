use pipeline::Transform;

/// Inserts a single space between every pair of adjacent characters.
pub struct Expander;

impl Transform for Expander {
    fn name(&self) -> &str {
        "expander"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        let mut expanded = String::with_capacity(line.len().saturating_mul(2));
        for (i, ch) in line.chars().enumerate() {
            if i > 0 {
                expanded.push(' ');
            }
            expanded.push(ch);
        }
        Some(expanded)
    }
}
