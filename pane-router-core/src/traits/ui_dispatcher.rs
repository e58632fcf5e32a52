//! UI-affinity thread boundary

/// Work that must run on the UI-affinity thread
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Marshals jobs onto the UI-affinity thread.
///
/// Pane, history and view state may only be touched from inside a job.
pub trait UiDispatcher: Send + Sync {
    fn dispatch(&self, job: UiJob);
}

/// Runs jobs inline on the calling thread (headless hosts and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateUiDispatcher;

impl UiDispatcher for ImmediateUiDispatcher {
    fn dispatch(&self, job: UiJob) {
        job();
    }
}
