//! Progress hooks for interactive callers.
//!
//! The pipeline reports position through this trait instead of printing
//! anything itself; non-interactive callers pass [`NoProgress`].

/// Observes pipeline progress. Callbacks are invoked from the sequential
/// analysis loop and must be cheap.
pub trait ProgressObserver: Send + Sync {
    /// A section is about to be analyzed. `section` is 1-based.
    fn on_section(&self, section: usize, total: usize);

    /// All sections are analyzed; the combine step is about to run.
    fn on_summary(&self);
}

/// Observer that ignores all progress events.
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_section(&self, _section: usize, _total: usize) {}

    fn on_summary(&self) {}
}
