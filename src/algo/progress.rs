//! Progress reporting and cooperative cancellation for long-running algorithms.
//!
//! A [`Progress`] carries a callback that algorithms invoke as they advance,
//! and an optional shared abort flag they poll between units of work. Aborting
//! is advisory: an algorithm stops at its next poll and returns
//! [`MeshError::Aborted`](crate::error::MeshError::Aborted).
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use islet::algo::Progress;
//!
//! let abort = Arc::new(AtomicBool::new(false));
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! })
//! .with_abort_flag(Arc::clone(&abort));
//!
//! assert!(!progress.abort_requested());
//! abort.store(true, Ordering::Relaxed);
//! assert!(progress.abort_requested());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A progress callback plus an optional abort flag.
///
/// The callback receives:
/// - `current`: Current step
/// - `total`: Total number of steps
/// - `message`: Description of the current operation
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
    abort: Option<Arc<AtomicBool>>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            abort: None,
        }
    }

    /// Attach a flag that another thread may set to request an early stop.
    pub fn with_abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Report progress as a fraction in `[0, 1]`, mapped onto 1000 steps.
    #[inline]
    pub fn report_fraction(&self, fraction: f64, message: &str) {
        let steps = (fraction.clamp(0.0, 1.0) * 1000.0).round() as usize;
        (self.callback)(steps, 1000, message);
    }

    /// Whether an abort has been requested.
    #[inline]
    pub fn abort_requested(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Create a no-op progress reporter that discards all updates and never aborts.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress")
            .field("abortable", &self.abort.is_some())
            .finish_non_exhaustive()
    }
}
