use crate::error::PipelineError;
use crate::invariants::debug_assert_finished_before_forward;
use crate::sentinel::SENTINEL;
use crate::successor::Successor;
use crate::transform::TransformBoxed;
use pipeline_sync::BoundedQueue;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One stage of the pipeline: a queue, a transform, and the worker task that
/// drains the queue through the transform into the stage's successor.
///
/// The worker starts as soon as the stage is built, which is also the only
/// point at which its successor is fixed: building stages back-to-front
/// (see [`crate::Pipeline::build`]) means every `Stage` knows its successor
/// before its first dequeue, so no interior mutability is needed to wire the
/// pipeline together.
pub(crate) struct Stage {
    pub(crate) queue: Arc<BoundedQueue<String>>,
    worker: JoinHandle<()>,
}

impl Stage {
    pub(crate) fn spawn(
        name: String,
        capacity: usize,
        transform: Arc<dyn TransformBoxed>,
        successor: Option<Successor>,
    ) -> Result<Self, PipelineError> {
        let queue = Arc::new(
            BoundedQueue::new(capacity).map_err(|source| PipelineError::StageInit { name, source })?,
        );
        let worker = {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move { run(queue, transform, successor).await })
        };
        Ok(Self { queue, worker })
    }

    pub(crate) async fn enqueue(&self, line: String) {
        self.queue.enqueue(line).await;
    }

    pub(crate) async fn wait_finished(&self) {
        self.queue.wait_finished().await;
    }

    pub(crate) async fn join(self) {
        let _ = self.worker.await;
    }
}

/// A stage's entire lifetime: dequeue, transform, forward, repeat, until the
/// sentinel is seen.
///
/// The latch is raised *before* the sentinel is forwarded downstream, not
/// after: forwarding can block if the successor's queue is full, and a
/// waiter blocked on this stage's `wait_finished` should never be held up by
/// a downstream back-pressure stall that has nothing to do with whether this
/// stage is done consuming.
async fn run(queue: Arc<BoundedQueue<String>>, transform: Arc<dyn TransformBoxed>, successor: Option<Successor>) {
    loop {
        let line = queue.dequeue().await;
        if line == SENTINEL {
            queue.signal_finished();
            debug_assert_finished_before_forward!(queue.is_finished());
            if let Some(successor) = &successor {
                successor.enqueue(SENTINEL.to_string()).await;
            }
            return;
        }

        if let Some(output) = transform.apply_boxed(&line).await {
            if let Some(successor) = &successor {
                successor.enqueue(output).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;
    use std::time::Duration;

    struct Upper;

    impl Transform for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        async fn apply(&self, line: &str) -> Option<String> {
            Some(line.to_uppercase())
        }
    }

    struct EvenOnly(std::sync::atomic::AtomicUsize);

    impl Transform for EvenOnly {
        fn name(&self) -> &str {
            "even-only"
        }

        async fn apply(&self, line: &str) -> Option<String> {
            let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            if n % 2 == 0 {
                Some(line.to_string())
            } else {
                None
            }
        }
    }

    #[tokio::test]
    async fn terminal_stage_signals_finished_on_sentinel() {
        let stage = Stage::spawn(
            "upper".to_string(),
            4,
            Arc::new(Upper),
            None,
        )
        .unwrap();

        stage.enqueue("hi".to_string()).await;
        stage.enqueue(SENTINEL.to_string()).await;

        tokio::time::timeout(Duration::from_millis(200), stage.wait_finished())
            .await
            .expect("stage must signal finished after draining the sentinel");
        stage.join().await;
    }

    #[tokio::test]
    async fn transform_output_is_forwarded_to_successor() {
        let next_queue = Arc::new(BoundedQueue::new(4).unwrap());
        let successor = Successor::new(Arc::clone(&next_queue));
        let stage = Stage::spawn("upper".to_string(), 4, Arc::new(Upper), Some(successor)).unwrap();

        stage.enqueue("abc".to_string()).await;
        assert_eq!(next_queue.dequeue().await, "ABC");

        stage.enqueue(SENTINEL.to_string()).await;
        assert_eq!(next_queue.dequeue().await, SENTINEL);
        stage.join().await;
    }

    #[tokio::test]
    async fn dropped_lines_are_never_forwarded() {
        let next_queue = Arc::new(BoundedQueue::new(4).unwrap());
        let successor = Successor::new(Arc::clone(&next_queue));
        let stage = Stage::spawn(
            "even-only".to_string(),
            4,
            Arc::new(EvenOnly(std::sync::atomic::AtomicUsize::new(0))),
            Some(successor),
        )
        .unwrap();

        stage.enqueue("a".to_string()).await;
        stage.enqueue("b".to_string()).await;
        stage.enqueue("c".to_string()).await;
        stage.enqueue(SENTINEL.to_string()).await;

        assert_eq!(next_queue.dequeue().await, "a");
        assert_eq!(next_queue.dequeue().await, "c");
        assert_eq!(next_queue.dequeue().await, SENTINEL);
        stage.join().await;
    }
}
