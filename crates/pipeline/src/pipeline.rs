use crate::error::PipelineError;
use crate::invariants::debug_assert_all_stages_finished;
use crate::sentinel::SENTINEL;
use crate::stage::Stage;
use crate::successor::Successor;
use crate::transform::TransformBoxed;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One named stage and the transform it runs, as handed to
/// [`Pipeline::build`].
pub struct StageSpec {
    pub name: String,
    pub transform: Arc<dyn TransformBoxed>,
}

impl StageSpec {
    pub fn new(name: impl Into<String>, transform: Arc<dyn TransformBoxed>) -> Self {
        Self { name: name.into(), transform }
    }
}

/// An assembled chain of stages, each wired to the next, each already
/// running its own worker task.
///
/// `Pipeline` owns every stage's queue and worker; once it is dropped, any
/// task still blocked enqueueing into one of its queues is orphaned the same
/// way dropping any other `Arc`-shared resource would orphan a holder.
/// Callers are expected to drive a pipeline to completion with [`pump`],
/// [`wait_finished`], and [`join`] rather than dropping it early.
///
/// [`pump`]: Pipeline::pump
/// [`wait_finished`]: Pipeline::wait_finished
/// [`join`]: Pipeline::join
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Builds a pipeline from an ordered list of stage specs, each getting a
    /// queue of `capacity` and its own worker task.
    ///
    /// Stages are constructed back-to-front: the last spec becomes the final
    /// stage (no successor), and every earlier stage is built already
    /// knowing the queue of the stage built just before it. This fixes each
    /// stage's successor before its worker is ever spawned, so the hook
    /// never needs to change after the fact.
    pub fn build(capacity: usize, specs: Vec<StageSpec>) -> Result<Self, PipelineError> {
        if specs.is_empty() {
            return Err(PipelineError::NoStages);
        }

        let mut built = Vec::with_capacity(specs.len());
        let mut successor = None;
        for spec in specs.into_iter().rev() {
            let stage = Stage::spawn(spec.name, capacity, spec.transform, successor.take())?;
            successor = Some(Successor::new(Arc::clone(&stage.queue)));
            built.push(stage);
        }
        built.reverse();
        Ok(Self { stages: built })
    }

    /// Enqueues one line into the first stage.
    pub async fn feed(&self, line: String) {
        self.stages[0].enqueue(line).await;
    }

    /// Reads lines from `reader` and feeds them into the first stage until
    /// the sentinel is seen or the reader reaches EOF.
    ///
    /// If EOF arrives without a sentinel line, one is fed in on the caller's
    /// behalf so every worker still has a well-defined way to stop.
    pub async fn pump<R>(&self, reader: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut saw_sentinel = false;
        while let Some(line) = lines.next_line().await? {
            let is_sentinel = line == SENTINEL;
            self.feed(line).await;
            if is_sentinel {
                saw_sentinel = true;
                break;
            }
        }
        if !saw_sentinel {
            self.feed(SENTINEL.to_string()).await;
        }
        Ok(())
    }

    /// Waits until every stage has drained the sentinel and raised its
    /// `finished` latch.
    pub async fn wait_finished(&self) {
        for stage in &self.stages {
            stage.wait_finished().await;
        }
        debug_assert_all_stages_finished!(true);
    }

    /// Consumes the pipeline, joining every stage's worker task.
    ///
    /// Call this after [`wait_finished`](Pipeline::wait_finished) returns;
    /// by then every worker is on its way to returning on its own, and this
    /// just waits for the task scheduler to get around to it.
    pub async fn join(self) {
        for stage in self.stages {
            stage.join().await;
        }
    }
}
