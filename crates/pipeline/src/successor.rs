use pipeline_sync::BoundedQueue;
use std::sync::Arc;

/// A non-owning capability to hand a line to the next stage's queue.
///
/// Wrapping the `Arc<BoundedQueue<String>>` instead of passing it around
/// directly keeps a stage's worker from doing anything to its successor
/// besides enqueueing: no `wait_finished`, no `signal_finished`, no way to
/// drain it. The successor's own worker owns that queue's lifecycle.
#[derive(Clone)]
pub(crate) struct Successor(Arc<BoundedQueue<String>>);

impl Successor {
    pub(crate) fn new(queue: Arc<BoundedQueue<String>>) -> Self {
        Self(queue)
    }

    pub(crate) async fn enqueue(&self, line: String) {
        self.0.enqueue(line).await;
    }
}
