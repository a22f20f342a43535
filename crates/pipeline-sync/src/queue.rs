use crate::error::QueueError;
use crate::invariants::{debug_assert_not_empty_signaled, debug_assert_not_full_signaled, debug_assert_within_capacity};
use crate::latch::Latch;
use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};

/// A fixed-capacity, single-consumer, multi-producer FIFO of owned values with
/// blocking back-pressure.
///
/// `enqueue` suspends the calling task while the queue is full; `dequeue`
/// suspends while it is empty. A separate [`Latch`] carries the "finished"
/// signal, which is independent of queue content: a stage raises it once,
/// after it has consumed the sentinel, and every [`BoundedQueue::wait_finished`]
/// caller observes it regardless of how many items have already drained.
///
/// Exactly one task may call `dequeue` at a time (the stage's worker); any
/// number of tasks may call `enqueue` concurrently (upstream producers).
/// Ordering is FIFO with respect to enqueues that complete-before one
/// another; fairness across concurrently blocked producers is not
/// guaranteed, matching the single-consumer queue this type models.
pub struct BoundedQueue<T> {
    capacity: usize,
    inner: Mutex<VecDeque<T>>,
    not_full: Notify,
    not_empty: Notify,
    finished: Latch,
}

impl<T: Send> BoundedQueue<T> {
    /// Creates a new queue with room for `capacity` items.
    ///
    /// Returns [`QueueError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            not_full: Notify::new(),
            not_empty: Notify::new(),
            finished: Latch::new(),
        })
    }

    /// The queue's fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enqueues `item`, suspending while the queue is full.
    ///
    /// The queue takes ownership of `item`; the caller never sees it again.
    pub async fn enqueue(&self, item: T) {
        let mut item = Some(item);
        loop {
            {
                let mut guard = self.inner.lock().await;
                debug_assert_within_capacity!(guard.len(), self.capacity);
                if guard.len() < self.capacity {
                    guard.push_back(item.take().expect("item already moved"));
                    let len_after = guard.len();
                    drop(guard);
                    self.not_empty.notify_one();
                    debug_assert_not_empty_signaled!(len_after > 0, true);
                    return;
                }
            }
            // Queue was full under the lock above; register for relief and
            // recheck once more before actually suspending, so a dequeue
            // racing with this enqueue is never missed (see Latch::wait).
            let not_full = self.not_full.notified();
            tokio::pin!(not_full);
            not_full.as_mut().enable();
            {
                let guard = self.inner.lock().await;
                if guard.len() < self.capacity {
                    continue;
                }
            }
            not_full.await;
        }
    }

    /// Dequeues the next item, suspending while the queue is empty.
    pub async fn dequeue(&self) -> T {
        loop {
            {
                let mut guard = self.inner.lock().await;
                if let Some(item) = guard.pop_front() {
                    let len_after = guard.len();
                    drop(guard);
                    self.not_full.notify_one();
                    debug_assert_not_full_signaled!(len_after < self.capacity, true);
                    return item;
                }
            }
            let not_empty = self.not_empty.notified();
            tokio::pin!(not_empty);
            not_empty.as_mut().enable();
            {
                let guard = self.inner.lock().await;
                if !guard.is_empty() {
                    continue;
                }
            }
            not_empty.await;
        }
    }

    /// The number of items currently enqueued but not yet dequeued.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Raises this queue's "finished" latch. Idempotent; may only be called
    /// by the stage's own worker.
    pub fn signal_finished(&self) {
        self.finished.signal();
    }

    /// Waits for this queue's "finished" latch to be raised.
    pub async fn wait_finished(&self) {
        self.finished.wait().await;
    }

    /// Returns `true` without blocking if `finished` has been raised.
    pub fn is_finished(&self) -> bool {
        self.finished.is_raised()
    }
}

// No explicit destroy(): `VecDeque<T>`'s own `Drop` frees every item still
// owned by the queue when it is dropped, which is the Rust-idiomatic
// equivalent of the source's manual free-on-destroy loop.
