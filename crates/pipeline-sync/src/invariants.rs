//! Debug assertion macros for [`crate::BoundedQueue`] invariants.
//!
//! These macros provide runtime checks for invariants that must hold at
//! every externally observable moment. They are only active in debug builds
//! (`#[cfg(debug_assertions)]`), so there is zero overhead in release builds.

// =============================================================================
// INV-Q-01: Bounded Occupancy
// =============================================================================

/// Assert that queue length never exceeds capacity.
///
/// **Invariant**: `0 <= len <= capacity`
macro_rules! debug_assert_within_capacity {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len <= $capacity,
            "INV-Q-01 violated: queue length {} exceeds capacity {}",
            $len,
            $capacity
        )
    };
}

// =============================================================================
// INV-Q-02: Not-Empty Relief Signaling
// =============================================================================

/// Assert that a successful enqueue wakes a potential `not_empty` waiter.
macro_rules! debug_assert_not_empty_signaled {
    ($pushed:expr, $signaled:expr) => {
        debug_assert!(
            !$pushed || $signaled,
            "INV-Q-02 violated: item enqueued but not_empty was not signaled"
        )
    };
}

// =============================================================================
// INV-Q-03: Not-Full Relief Signaling
// =============================================================================

/// Assert that a successful dequeue wakes a potential `not_full` waiter.
macro_rules! debug_assert_not_full_signaled {
    ($popped:expr, $signaled:expr) => {
        debug_assert!(
            !$popped || $signaled,
            "INV-Q-03 violated: item dequeued but not_full was not signaled"
        )
    };
}

pub(crate) use debug_assert_not_empty_signaled;
pub(crate) use debug_assert_not_full_signaled;
pub(crate) use debug_assert_within_capacity;
