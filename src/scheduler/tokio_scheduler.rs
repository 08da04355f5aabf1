use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::runtime;
use super::{MINIMUM_PERIOD, RepeatingTask, Scheduler, Task, TimerHandle};

/// A [`Scheduler`] backed by a tokio runtime.
///
/// One-shot tasks are spawned as a `sleep` followed by the task. Periodic
/// tasks run on a tokio `interval`; a tick that falls behind is delayed
/// rather than bursting to catch up.
///
/// Tasks run on the runtime's worker threads, so they must be `Send`.
///
/// # Examples
///
/// ```rust
/// use combinars::scheduler::{Scheduler, TokioScheduler};
/// use std::sync::mpsc;
/// use std::time::Duration;
///
/// let scheduler = TokioScheduler::current();
/// let (sender, receiver) = mpsc::channel();
/// scheduler.schedule_after(Duration::from_millis(5), Box::new(move || {
///     let _ = sender.send("fired");
/// }));
/// assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok("fired"));
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler spawning its timers on `handle`.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler on the current runtime, or on the global runtime
    /// when called outside one.
    #[must_use]
    pub fn current() -> Self {
        Self::new(runtime::handle())
    }

    /// Returns the runtime handle timers are spawned on.
    #[must_use]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::current()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            time::sleep(delay).await;
            task();
        });
    }

    fn schedule_every(&self, period: Duration, mut task: RepeatingTask) -> TimerHandle {
        let period = period.max(MINIMUM_PERIOD);
        // The first deadline is fixed at submission, not when the task is first polled.
        let start = {
            let _guard = self.handle.enter();
            Instant::now() + period
        };

        let join = self.handle.spawn(async move {
            let mut interval = time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                task();
            }
        });

        let abort = join.abort_handle();
        TimerHandle::new(move || {
            tracing::trace!("aborting periodic timer task");
            abort.abort();
        })
    }
}

static_assertions::assert_impl_all!(TokioScheduler: Send, Sync, Clone);
