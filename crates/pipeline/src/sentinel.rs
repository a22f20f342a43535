/// The end-of-stream marker threaded through every stage's queue.
///
/// A stage that dequeues this value stops reading, raises its `finished`
/// latch, forwards the marker to its successor (if any), and returns.
pub const SENTINEL: &str = "<END>";
