use gloo::timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. Dropping the returned timer cancels the
/// task if it has not run yet.
pub trait Scheduler {
    type Timer;

    fn after(&self, delay_ms: u32, task: Task) -> Self::Timer;
}

/// `setTimeout` on the page's event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Timer = Timeout;

    fn after(&self, delay_ms: u32, task: Task) -> Self::Timer {
        Timeout::new(delay_ms, task)
    }
}
