//! Function decorators.
//!
//! Each decorator wraps a function in a value that owns whatever state the
//! modified call semantics need. No state is shared between two wrappers.
//!
//! - [`identity`]: returns its argument
//! - [`Once`]: runs on the first call, then replays that result
//! - [`Memoize`]: runs once per distinct argument value
//! - [`Throttle`]: runs at most once per time window
//! - [`delay`]: runs once after a wait
//!
//! Decorators take their arguments as a single value; pass a tuple when the
//! wrapped function needs several.
//!
//! The timer-based decorators ([`Throttle`], [`delay`]) are driven by a
//! [`Scheduler`](crate::scheduler::Scheduler) passed in by the caller.
//!
//! # Examples
//!
//! ```rust
//! use combinars::function::{memoize, once};
//!
//! let initialize = once(|(): ()| "ready");
//! assert_eq!(initialize.call(()), "ready");
//!
//! let fibonacci = memoize(|&n: &u64| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci.call(50), 12_586_269_025);
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;
mod utils;

pub use delay::delay;
pub use memoize::{Memoize, memoize};
#[cfg(feature = "serde")]
pub use memoize::{MemoizeSerialized, memoize_serialized};
pub use once::{Once, OnceState, once};
pub use throttle::{Throttle, throttle};
pub use utils::identity;
