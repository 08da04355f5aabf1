//! Rate limiting of function calls.
//!
//! A [`Throttle`] lets at most one call through per window. A periodic timer
//! on a [`Scheduler`] reopens the window; calls made while it is closed are
//! dropped, not queued.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::scheduler::{Scheduler, TimerHandle};

/// A function wrapper that runs at most once per `wait` window.
///
/// The window is driven by a periodic timer with period `wait`, started when
/// the wrapper is created. A call runs the function immediately when the
/// window is open and closes it; the next timer tick reopens it. The window
/// starts open.
///
/// Arguments are passed as a single value `A`; use a tuple for several.
///
/// Dropping the wrapper, or calling [`Throttle::cancel`], stops the timer.
///
/// # Examples
///
/// ```rust
/// use combinars::function::throttle;
/// use combinars::scheduler::ManualScheduler;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let double = throttle(&scheduler, |value: i32| value * 2, Duration::from_millis(100));
///
/// assert_eq!(double.call(1), Some(2));
/// scheduler.advance(Duration::from_millis(10));
/// assert_eq!(double.call(2), None);
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(double.call(3), Some(6));
/// ```
pub struct Throttle<A, R, F> {
    function: F,
    available: Arc<AtomicBool>,
    timer: TimerHandle,
    wait: Duration,
    _signature: PhantomData<fn(A) -> R>,
}

/// Wraps `function` so that it runs at most once per `wait`.
///
/// Equivalent to [`Throttle::new`].
#[inline]
pub fn throttle<S, A, R, F>(scheduler: &S, function: F, wait: Duration) -> Throttle<A, R, F>
where
    S: Scheduler + ?Sized,
    F: Fn(A) -> R,
{
    Throttle::new(scheduler, function, wait)
}

impl<A, R, F> Throttle<A, R, F>
where
    F: Fn(A) -> R,
{
    /// Creates the wrapper and starts its window timer on `scheduler`.
    pub fn new<S>(scheduler: &S, function: F, wait: Duration) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let available = Arc::new(AtomicBool::new(true));
        let reopen = Arc::clone(&available);
        let timer = scheduler.schedule_every(
            wait,
            Box::new(move || reopen.store(true, Ordering::Release)),
        );
        Self {
            function,
            available,
            timer,
            wait,
            _signature: PhantomData,
        }
    }

    /// Runs the function if the window is open, returning its result.
    ///
    /// Returns `None` without running anything while the window is closed.
    pub fn call(&self, arguments: A) -> Option<R> {
        if self.available.swap(false, Ordering::AcqRel) {
            tracing::trace!(wait = ?self.wait, "throttled call executed");
            Some((self.function)(arguments))
        } else {
            tracing::trace!(wait = ?self.wait, "throttled call dropped");
            None
        }
    }
}

impl<A, R, F> Throttle<A, R, F> {
    /// Returns `true` if the next call would run.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Returns the window length.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Stops the window timer and discards the wrapper.
    pub fn cancel(self) {
        tracing::debug!(wait = ?self.wait, "throttle timer cancelled");
        drop(self);
    }
}

impl<A, R, F> fmt::Debug for Throttle<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("available", &self.is_available())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
