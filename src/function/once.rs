//! Functions that run at most once.
//!
//! This module provides [`Once`], a wrapper that calls its function on the
//! first invocation and replays the cached result on every later one,
//! whatever arguments those later calls pass.
//!
//! # Examples
//!
//! ```rust
//! use combinars::function::once;
//! use std::cell::Cell;
//!
//! let launches = Cell::new(0);
//! let launch = once(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch.call("moon"), "launched at moon");
//! assert_eq!(launch.call("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`].
#[derive(Debug)]
pub enum OnceState<R, F> {
    /// Not called yet. Holds the function.
    Pending(F),
    /// Called. Holds the first call's result.
    Called(R),
    /// The function panicked during its one call.
    Poisoned,
}

/// A function wrapper that invokes the underlying function at most once.
///
/// Arguments are passed as a single value `A`; use a tuple for several.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; it keeps its state in a `RefCell`.
pub struct Once<A, R, F> {
    state: RefCell<OnceState<R, F>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs at most once.
///
/// Equivalent to [`Once::new`].
#[inline]
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

impl<A, R, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    /// Creates a new wrapper; `function` is not called yet.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }
}

impl<A, R: Clone, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    /// Calls the function with `arguments` on the first call and returns its
    /// result; every later call returns a clone of that first result.
    ///
    /// # Panics
    ///
    /// - If the function panics, the wrapper becomes poisoned and the panic
    ///   propagates.
    /// - If the wrapper is already poisoned. This includes a call made from
    ///   inside the function while it runs; that outer call then finishes
    ///   poisoned as well.
    pub fn call(&self, arguments: A) -> R {
        {
            let state = self.state.borrow();
            match &*state {
                OnceState::Called(result) => return result.clone(),
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Pending(_) => {}
            }
        }

        // Stay Poisoned unless the function returns normally. The borrow ends
        // before the call so a re-entrant call sees Poisoned instead of a
        // `BorrowMutError`.
        let function = {
            let mut state = self.state.borrow_mut();
            let OnceState::Pending(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
            else {
                unreachable!()
            };
            function
        };

        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }

    /// Returns a clone of the cached result, without calling the function.
    ///
    /// `None` until the first call has completed.
    pub fn get(&self) -> Option<R> {
        match &*self.state.borrow() {
            OnceState::Called(result) => Some(result.clone()),
            OnceState::Pending(_) | OnceState::Poisoned => None,
        }
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns whether the function has already run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns whether the function panicked during its call.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Consumes the wrapper and returns the cached result, if any.
    pub fn into_result(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Called(result) => Some(result),
            OnceState::Pending(_) | OnceState::Poisoned => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}
