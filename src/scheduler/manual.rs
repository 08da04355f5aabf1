//! A scheduler driven by a virtual clock.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{MINIMUM_PERIOD, RepeatingTask, Scheduler, Task, TimerHandle};

/// Work waiting in the queue.
enum Scheduled {
    Once(Task),
    Every { period: Duration, task: RepeatingTask },
}

/// Queue ordering: deadline first, then submission order.
type QueueKey = (Duration, u64);

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<QueueKey, Scheduled>,
    /// Id of the periodic task currently running outside the lock.
    firing: Option<u64>,
    /// Set when the firing task was cancelled while it ran.
    firing_cancelled: bool,
}

impl ManualState {
    fn cancel(&mut self, id: u64) {
        self.queue.retain(|&(_, queued_id), _| queued_id != id);
        if self.firing == Some(id) {
            self.firing_cancelled = true;
        }
    }
}

/// Marks a periodic task as running outside the lock.
///
/// Dropping the guard without [`rearm`](Self::rearm) (the task panicked)
/// clears the mark and leaves the timer out of the queue.
struct Firing<'a> {
    state: &'a Mutex<ManualState>,
    id: u64,
}

impl Firing<'_> {
    fn rearm(self, deadline: Duration, scheduled: Scheduled) {
        let mut state = self.state.lock();
        if state.firing == Some(self.id) {
            state.firing = None;
            if !state.firing_cancelled {
                state.queue.insert((deadline, self.id), scheduled);
            }
        }
    }
}

impl Drop for Firing<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.firing == Some(self.id) {
            state.firing = None;
        }
    }
}

/// A [`Scheduler`] whose clock only moves when [`advance`](Self::advance)
/// is called.
///
/// Tasks never run on their own: `advance` runs every task that falls due
/// within the advanced span, in deadline order, on the calling thread.
/// Tasks may schedule further tasks; those run in the same `advance` call
/// if they fall due within it.
///
/// Clones share the same clock and queue.
///
/// # Examples
///
/// ```rust
/// use combinars::scheduler::{ManualScheduler, Scheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// scheduler.schedule_after(Duration::from_millis(50), Box::new(move || {
///     flag.store(true, Ordering::SeqCst);
/// }));
///
/// scheduler.advance(Duration::from_millis(49));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// Creates a scheduler with its clock at zero and nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of queued tasks, periodic timers included.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `duration`, running every task due by the
    /// new time.
    ///
    /// Each task runs with the clock set to its own deadline. Periodic tasks
    /// are re-armed one period after the deadline they just ran for.
    ///
    /// # Panics
    ///
    /// A panicking task propagates out of `advance`, leaving the clock at
    /// that task's deadline. A periodic task that panics is not re-armed:
    /// its timer ends there. The scheduler stays usable.
    pub fn advance(&self, duration: Duration) {
        let target = self.state.lock().now + duration;

        loop {
            let (key, scheduled) = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .first_key_value()
                    .is_some_and(|(&(deadline, _), _)| deadline <= target);
                if !due {
                    break;
                }
                let Some((key, scheduled)) = state.queue.pop_first() else {
                    break;
                };
                state.now = key.0;
                if matches!(scheduled, Scheduled::Every { .. }) {
                    state.firing = Some(key.1);
                    state.firing_cancelled = false;
                }
                (key, scheduled)
            };

            let (deadline, id) = key;
            tracing::trace!(?deadline, id, "manual scheduler firing task");

            match scheduled {
                Scheduled::Once(task) => task(),
                Scheduled::Every { period, mut task } => {
                    let firing = Firing {
                        state: &self.state,
                        id,
                    };
                    task();
                    firing.rearm(deadline + period, Scheduled::Every { period, task });
                }
            }
        }

        self.state.lock().now = target;
    }

    fn enqueue(&self, delay: Duration, scheduled: Scheduled) -> u64 {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.queue.insert((deadline, id), scheduled);
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, task: Task) {
        self.enqueue(delay, Scheduled::Once(task));
    }

    fn schedule_every(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        let period = period.max(MINIMUM_PERIOD);
        let id = self.enqueue(period, Scheduled::Every { period, task });
        let state = Arc::downgrade(&self.state);
        TimerHandle::new(move || {
            if let Some(state) = state.upgrade() {
                state.lock().cancel(id);
            }
        })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Arc::clone(&log), log)
    }

    #[rstest]
    fn tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, handle) = recorder();
        let late = Arc::clone(&handle);
        scheduler.schedule_after(Duration::from_millis(20), Box::new(move || late.lock().push("late")));
        let early = Arc::clone(&handle);
        scheduler.schedule_after(Duration::from_millis(10), Box::new(move || early.lock().push("early")));

        scheduler.advance(Duration::from_millis(30));
        assert_eq!(*log.lock(), vec!["early", "late"]);
    }

    #[rstest]
    fn equal_deadlines_run_in_submission_order() {
        let scheduler = ManualScheduler::new();
        let (log, handle) = recorder();
        for label in ["first", "second", "third"] {
            let entry = Arc::clone(&handle);
            scheduler.schedule_after(Duration::ZERO, Box::new(move || entry.lock().push(label)));
        }
        scheduler.advance(Duration::ZERO);
        assert_eq!(*log.lock(), vec!["first", "second", "third"]);
    }

    #[rstest]
    fn zero_delay_never_runs_synchronously() {
        let scheduler = ManualScheduler::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        scheduler.schedule_after(Duration::ZERO, Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        scheduler.advance(Duration::ZERO);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn clock_reports_task_deadline_while_running() {
        let scheduler = ManualScheduler::new();
        let observed = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&observed);
        let clock = scheduler.clone();
        scheduler.schedule_after(Duration::from_millis(7), Box::new(move || {
            *slot.lock() = Some(clock.now());
        }));
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*observed.lock(), Some(Duration::from_millis(7)));
        assert_eq!(scheduler.now(), Duration::from_millis(100));
    }

    #[rstest]
    fn periodic_task_can_cancel_itself() {
        let scheduler = ManualScheduler::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<TimerHandle>>> = Arc::new(Mutex::new(None));

        let counter = Arc::clone(&runs);
        let own_handle = Arc::clone(&slot);
        let handle = scheduler.schedule_every(
            Duration::from_millis(5),
            Box::new(move || {
                if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                    if let Some(handle) = own_handle.lock().take() {
                        handle.cancel();
                    }
                }
            }),
        );
        *slot.lock() = Some(handle);

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[rstest]
    fn panicking_periodic_task_ends_its_timer() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let scheduler = ManualScheduler::new();
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let timer = scheduler.schedule_every(
            Duration::from_millis(10),
            Box::new(move || {
                if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                    panic!("tick failed");
                }
            }),
        );

        let outcome = catch_unwind(AssertUnwindSafe(|| scheduler.advance(Duration::from_millis(50))));
        assert!(outcome.is_err());
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.now(), Duration::from_millis(20));
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.state.lock().firing.is_none());
        drop(timer);

        let (log, handle) = recorder();
        let _next = scheduler.schedule_every(
            Duration::from_millis(10),
            Box::new(move || handle.lock().push("tick")),
        );
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(*log.lock(), vec!["tick", "tick", "tick"]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[rstest]
    fn zero_period_is_rounded_up() {
        let scheduler = ManualScheduler::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _timer = scheduler.schedule_every(
            Duration::ZERO,
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        scheduler.advance(Duration::from_millis(3));
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }
}
