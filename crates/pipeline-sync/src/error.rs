use thiserror::Error;

/// Errors raised while constructing or operating a [`crate::BoundedQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue was asked to allocate with a non-positive capacity.
    #[error("queue capacity must be a positive integer")]
    InvalidCapacity,
}
