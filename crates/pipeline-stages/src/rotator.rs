use pipeline::Transform;

/// Rotates a line one position to the right: the last character moves to
/// the front, everything else shifts over by one.
///
/// Operates on `char`s rather than bytes, so a line is rotated as Unicode
/// scalar values instead of raw bytes; for ASCII input the two agree.
pub struct Rotator;

impl Transform for Rotator {
    fn name(&self) -> &str {
        "rotator"
    }

    async fn apply(&self, line: &str) -> Option<String> {
        let Some(last) = line.chars().last() else {
            return Some(String::new());
        };
        let rest_len = line.len() - last.len_utf8();
        let mut rotated = String::with_capacity(line.len());
        rotated.push(last);
        rotated.push_str(&line[..rest_len]);
        Some(rotated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn moves_last_character_to_front() {
        assert_eq!(Rotator.apply("abcd").await, Some("dabc".to_string()));
    }

    #[tokio::test]
    async fn single_character_is_unchanged() {
        assert_eq!(Rotator.apply("x").await, Some("x".to_string()));
    }

    #[tokio::test]
    async fn empty_line_stays_empty() {
        assert_eq!(Rotator.apply("").await, Some(String::new()));
    }
}
