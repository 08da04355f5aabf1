//! Time-based task scheduling for the timer decorators.
//!
//! [`delay`](crate::function::delay) and [`Throttle`](crate::function::Throttle)
//! do not assume an ambient event loop. They submit work to a [`Scheduler`],
//! which offers two capabilities:
//!
//! - run a task once after a delay ([`Scheduler::schedule_after`])
//! - run a task periodically until cancelled ([`Scheduler::schedule_every`])
//!
//! Two implementations are provided:
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the host.
//!   Deterministic; suited to single-threaded hosts and tests.
//! - [`TokioScheduler`] (feature `async`): timers backed by a tokio runtime.
//!
//! # Examples
//!
//! ```rust
//! use combinars::scheduler::{ManualScheduler, Scheduler};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let ticks = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&ticks);
//! let timer = scheduler.schedule_every(
//!     Duration::from_millis(10),
//!     Box::new(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//! );
//!
//! scheduler.advance(Duration::from_millis(35));
//! assert_eq!(ticks.load(Ordering::SeqCst), 3);
//!
//! timer.cancel();
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(ticks.load(Ordering::SeqCst), 3);
//! ```

mod manual;

#[cfg(feature = "async")]
pub mod runtime;

#[cfg(feature = "async")]
mod tokio_scheduler;

pub use manual::ManualScheduler;

#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;

use std::fmt;
use std::time::Duration;

/// A task run once.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A task run on every tick of a periodic timer.
pub type RepeatingTask = Box<dyn FnMut() + Send + 'static>;

/// The shortest period a periodic timer runs with.
///
/// Shorter periods, including zero, are rounded up to this value.
pub const MINIMUM_PERIOD: Duration = Duration::from_millis(1);

/// A facility that runs tasks after a delay or at a fixed period.
pub trait Scheduler {
    /// Runs `task` once, no earlier than `delay` from now.
    ///
    /// Never runs the task synchronously inside this call, even for a zero
    /// delay.
    fn schedule_after(&self, delay: Duration, task: Task);

    /// Runs `task` every `period`, the first time one period from now.
    ///
    /// The timer runs until the returned handle is cancelled or dropped.
    fn schedule_every(&self, period: Duration, task: RepeatingTask) -> TimerHandle;
}

/// Ownership of a periodic timer.
///
/// Dropping the handle cancels the timer. Use [`TimerHandle::detach`] to
/// let the timer run for the rest of the process instead.
#[must_use = "dropping a TimerHandle cancels its timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TimerHandle {
    /// Creates a handle that runs `cancel` when the timer is released.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the timer. Ticks already running are not interrupted.
    pub fn cancel(mut self) {
        self.release();
    }

    /// Releases the handle without stopping the timer.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    /// Returns `true` while the handle still controls a timer.
    pub const fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TimerHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

static_assertions::assert_impl_all!(TimerHandle: Send);
static_assertions::assert_impl_all!(ManualScheduler: Send, Sync, Clone);
