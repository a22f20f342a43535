use std::future::Future;
use std::pin::Pin;

/// A stage's transformation: consumes one line, produces zero or one output
/// lines.
///
/// Returning `None` tells the worker to drop the line silently, the same
/// contract the filter-style stages use (see `pipeline-stages`). Returning
/// `Some` forwards the line to the stage's successor, if it has one.
pub trait Transform: Send + Sync {
    /// The name surfaced in the invocation line and in diagnostics.
    fn name(&self) -> &str;

    fn apply(&self, line: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Object-safe counterpart of [`Transform`], so stages can hold
/// `Arc<dyn TransformBoxed>` regardless of the concrete implementation.
///
/// Every `T: Transform` gets this for free via the blanket impl below.
pub trait TransformBoxed: Send + Sync {
    fn name(&self) -> &str;

    fn apply_boxed<'a>(&'a self, line: &'a str) -> Pin<Box<dyn Future<Output = Option<String>> + Send + 'a>>;
}

impl<T: Transform> TransformBoxed for T {
    fn name(&self) -> &str {
        Transform::name(self)
    }

    fn apply_boxed<'a>(&'a self, line: &'a str) -> Pin<Box<dyn Future<Output = Option<String>> + Send + 'a>> {
        Box::pin(self.apply(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Shout;

    impl Transform for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        async fn apply(&self, line: &str) -> Option<String> {
            Some(format!("{line}!"))
        }
    }

    struct Drop3rd(std::sync::atomic::AtomicUsize);

    impl Transform for Drop3rd {
        fn name(&self) -> &str {
            "drop3rd"
        }

        async fn apply(&self, line: &str) -> Option<String> {
            let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            if n % 3 == 2 {
                None
            } else {
                Some(line.to_string())
            }
        }
    }

    #[tokio::test]
    async fn boxed_dispatch_matches_direct_call() {
        let t: Arc<dyn TransformBoxed> = Arc::new(Shout);
        assert_eq!(t.name(), "shout");
        assert_eq!(t.apply_boxed("hi").await, Some("hi!".to_string()));
    }

    #[tokio::test]
    async fn boxed_dispatch_can_skip_a_line() {
        let t: Arc<dyn TransformBoxed> = Arc::new(Drop3rd(std::sync::atomic::AtomicUsize::new(0)));
        assert_eq!(t.apply_boxed("a").await, Some("a".to_string()));
        assert_eq!(t.apply_boxed("b").await, Some("b".to_string()));
        assert_eq!(t.apply_boxed("c").await, None);
    }
}
