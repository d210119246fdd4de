//! Cooperative progress reporting and cancellation.
//!
//! Long-running calculators take an `Option<&dyn ProgressReporter>`. At each
//! phase boundary they report how far they got and ask whether the caller
//! wants them to stop. A calculator that sees a cancellation request returns
//! "not completed" (`None`) and drops all partial results.
//!
//! The engine never spawns threads. Callers pick their own threading model
//! and flip a [`CancellationToken`] from wherever they like.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// One progress report from a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate<'a> {
    pub completed: usize,
    pub total: usize,
    /// `floor(100 * completed / total)`, 0 when `total` is 0.
    pub percent: u32,
    /// Human-readable phase, e.g. `"Calculating reciprocated edges."`.
    pub description: &'a str,
}

/// Injected capability through which a calculator reports progress and
/// learns that it should stop.
pub trait ProgressReporter {
    fn is_cancellation_requested(&self) -> bool;

    fn report_progress(&self, update: ProgressUpdate<'_>);
}

/// Integer percentage of `completed` out of `total`.
pub fn progress_percent(completed: usize, total: usize) -> u32 {
    debug_assert!(completed <= total);
    if total == 0 {
        return 0;
    }
    ((completed as u128 * 100) / total as u128) as u32
}

/// Phase boundary: return `false` if cancellation was requested, otherwise
/// report progress and return `true`. A missing reporter always continues.
pub fn report_progress_and_check_cancellation(
    progress: Option<&dyn ProgressReporter>,
    completed: usize,
    total: usize,
    metric_description: &str,
) -> bool {
    let Some(progress) = progress else {
        return true;
    };

    if progress.is_cancellation_requested() {
        tracing::debug!(metric = metric_description, completed, total, "cancellation requested");
        return false;
    }

    let description = format!("Calculating {metric_description}.");
    let percent = progress_percent(completed, total);
    tracing::trace!(percent, "{description}");
    progress.report_progress(ProgressUpdate { completed, total, percent, description: &description });
    true
}

// ============================================================================
// CancellationToken
// ============================================================================

/// Shareable cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl ProgressReporter for CancellationToken {
    fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled()
    }

    fn report_progress(&self, _update: ProgressUpdate<'_>) {}
}

// ============================================================================
// ProgressLog
// ============================================================================

/// Owned copy of a [`ProgressUpdate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
    pub description: String,
}

/// Reporter that records every update and can cancel itself after a fixed
/// number of reports. Handy for hosts that poll progress from another thread.
#[derive(Debug, Default)]
pub struct ProgressLog {
    events: Mutex<Vec<ProgressEvent>>,
    token: CancellationToken,
    cancel_after: Option<usize>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation once `reports` updates have been recorded.
    pub fn cancel_after_reports(reports: usize) -> Self {
        let log = Self { cancel_after: Some(reports), ..Self::default() };
        if reports == 0 {
            log.token.cancel();
        }
        log
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressReporter for ProgressLog {
    fn is_cancellation_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    fn report_progress(&self, update: ProgressUpdate<'_>) {
        let mut events = self.events.lock();
        events.push(ProgressEvent {
            completed: update.completed,
            total: update.total,
            percent: update.percent,
            description: update.description.to_string(),
        });
        if self.cancel_after.is_some_and(|n| events.len() >= n) {
            self.token.cancel();
        }
    }
}
