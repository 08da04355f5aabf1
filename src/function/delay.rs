use std::time::Duration;

use crate::scheduler::Scheduler;

/// Calls `function(arguments)` once, no earlier than `wait` from now.
///
/// Returns immediately. The call is never made synchronously, even with a
/// zero `wait`. The function's result is discarded and the call cannot be
/// cancelled.
///
/// Arguments are passed as a single value `A`; use a tuple for several.
///
/// # Examples
///
/// ```rust
/// use combinars::function::delay;
/// use combinars::scheduler::ManualScheduler;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
/// delay(
///     &scheduler,
///     move |(name, count): (&'static str, u32)| sink.lock().unwrap().push(format!("{name}:{count}")),
///     Duration::from_millis(50),
///     ("late", 2),
/// );
///
/// assert!(log.lock().unwrap().is_empty());
/// scheduler.advance(Duration::from_millis(50));
/// assert_eq!(*log.lock().unwrap(), vec!["late:2".to_string()]);
/// ```
pub fn delay<S, A, R, F>(scheduler: &S, function: F, wait: Duration, arguments: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!(wait_ms = wait.as_millis(), "delayed call scheduled");
    scheduler.schedule_after(
        wait,
        Box::new(move || {
            let _ = function(arguments);
        }),
    );
}
