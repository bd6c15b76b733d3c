/// Source of time and deferred callbacks.
pub trait Scheduler {
    /// Milliseconds on a monotonic-enough clock.
    fn now(&self) -> f64;

    /// Runs `task` once after `delay_ms`. Dropping the returned handle before
    /// then cancels the task.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Owned cancellation token for a scheduled task.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}
