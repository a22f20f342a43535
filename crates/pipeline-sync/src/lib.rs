//! Pipeline-Sync - Blocking Hand-Off Primitives for Stage Pipelines
//!
//! The two primitives a staged, concurrent string-processing pipeline is
//! built from:
//!
//! - [`Latch`]: a manually-reset, one-shot signal that survives a `signal()`
//!   issued before any waiter has arrived.
//! - [`BoundedQueue`]: a fixed-capacity, single-consumer FIFO with blocking
//!   put/get, plus an independent `finished` latch.
//!
//! # Example
//!
//! ```
//! use pipeline_sync::BoundedQueue;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let queue = BoundedQueue::new(16).unwrap();
//! queue.enqueue("hello".to_string()).await;
//! assert_eq!(queue.dequeue().await, "hello");
//! # }
//! ```

mod error;
mod invariants;
mod latch;
mod queue;

pub use error::QueueError;
pub use latch::Latch;
pub use queue::BoundedQueue;
