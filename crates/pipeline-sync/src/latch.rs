//! One-shot, manually-reset rendezvous used for the "finished" signal on a
//! [`crate::BoundedQueue`].

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// A manually-reset binary signal that survives a [`Latch::signal`] issued
/// before any waiter has arrived.
///
/// Unlike a one-shot channel, a `Latch` can be [`reset`](Latch::reset) and
/// raised again; unlike a plain `AtomicBool`, [`wait`](Latch::wait) actually
/// suspends the task instead of spinning.
#[derive(Debug, Default)]
pub struct Latch {
    raised: AtomicBool,
    notify: Notify,
}

impl Latch {
    /// Creates a new latch in the `lowered` state.
    pub fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    /// Raises the latch and wakes every current and future waiter.
    ///
    /// Idempotent: raising an already-raised latch has no additional effect.
    pub fn signal(&self) {
        self.raised.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    /// Lowers the latch. Does not wake anyone.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Release);
    }

    /// Returns `true` without blocking if the latch is currently raised.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Waits until the latch is raised.
    ///
    /// Returns immediately if the latch was already raised on entry. The
    /// `Notified` future is created and registered as a waiter *before* the
    /// second predicate check, so a `signal()` racing with this call is never
    /// lost: either it lands before the first check (caught there), after
    /// registration (delivered as a wakeup), or in between (caught by the
    /// second check).
    pub async fn wait(&self) {
        loop {
            if self.is_raised() {
                return;
            }
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // `enable()` registers this waiter immediately, before we
            // re-check the predicate, so a `signal()` landing anywhere
            // between the first check and the final `.await` is still
            // observed instead of lost.
            notified.as_mut().enable();
            if self.is_raised() {
                return;
            }
            notified.await;
        }
    }
}
