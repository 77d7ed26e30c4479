//! Cooperative cancellation of running searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheap, clonable cancellation flag polled by the search loop.
///
/// Cancellation is cooperative, never preemptive: the loop checks the flag
/// once per iteration and, on observing it, returns the canonical empty
/// [`Path`](crate::Path). That result is indistinguishable from "no path
/// exists" at the API surface, so callers that care must check
/// [`is_cancelled`](CancelFlag::is_cancelled) after the search returns.
///
/// All clones share one flag, so a search running on another thread can be
/// cancelled from anywhere.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// creates a fresh, uncancelled flag
    pub fn new() -> CancelFlag {
        CancelFlag::default()
    }

    /// Requests cancellation. Observed by every clone of this flag.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// true once [`cancel`](CancelFlag::cancel) has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
