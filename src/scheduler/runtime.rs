//! Runtime sharing for [`TokioScheduler`](super::TokioScheduler).
//!
//! Timers need a tokio runtime to drive them. Hosts that already run one
//! keep their own: [`handle`] returns the current runtime's handle whenever
//! it is called from inside a runtime, so timers inherit the caller's
//! tracing context and clock (including a paused test clock).
//!
//! Synchronous hosts get a lazily-created multi-thread runtime shared by the
//! whole process. It is built on first use and never dropped.
//!
//! # Examples
//!
//! ```rust
//! use combinars::scheduler::runtime::{global, handle};
//!
//! // Outside any runtime the global runtime is used.
//! let obtained = handle();
//! let answer = global().block_on(async move {
//!     obtained.spawn(async { 42 }).await
//! });
//! assert_eq!(answer.ok(), Some(42));
//! ```

use std::cell::RefCell;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

// =============================================================================
// Global Runtime
// =============================================================================

/// Process-wide runtime, created on first access.
///
/// Multi-thread scheduler with one worker per CPU core, time driver enabled.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tracing::debug!(workers = num_cpus::get(), "starting global timer runtime");
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("combinars-timer")
        .enable_time()
        .build()
        .expect("failed to create global tokio runtime")
});

/// Returns the process-wide runtime, creating it on first call.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

// =============================================================================
// Handle Caching
// =============================================================================

thread_local! {
    /// Per-thread clone of the global runtime's handle.
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns a handle to the current runtime, or to the global one.
///
/// # Handle Priority
///
/// 1. Inside a tokio runtime: `Handle::current()`
/// 2. Otherwise: the global runtime's handle, cached per thread
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current) = Handle::try_current() {
        return current;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
