//! Execution-context facade for asynchronous persistence work.
//!
//! # Responsibility
//! - Decouple view-model orchestration from how jobs actually run.
//!
//! # Invariants
//! - Dispatch never blocks the caller beyond enqueueing the job.
//! - Jobs are fire-and-forget; completion is reported through the
//!   response streams they publish to.

/// Dispatches one-shot jobs onto an execution context.
pub trait Scheduler {
    /// Runs `job` on the scheduler's execution context.
    fn dispatch(&self, job: Box<dyn FnOnce() + Send + 'static>);
}

/// Runs every job on a freshly spawned background thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct BackgroundScheduler;

impl Scheduler for BackgroundScheduler {
    fn dispatch(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        std::thread::spawn(job);
    }
}

/// Runs every job immediately on the calling thread.
///
/// Used by tests and the CLI probe where deterministic ordering of
/// response emissions matters more than concurrency.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn dispatch(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        job();
    }
}
