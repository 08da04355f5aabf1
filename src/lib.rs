//! # combinars
//!
//! A utility library of collection combinators, object helpers and function
//! decorators for Rust.
//!
//! ## Overview
//!
//! - **Collections**: one traversal primitive ([`collection::each`]) over
//!   sequences and keyed mappings, and the search, fold and reordering
//!   operations built on it
//! - **Objects**: merging of keyed mappings ([`object::extend`],
//!   [`object::defaults`])
//! - **Functions**: call-once, memoizing, throttling and delaying wrappers
//! - **Scheduling**: the timer facility the time-based wrappers run on, with
//!   a tokio-backed and a manually driven implementation
//!
//! ## Feature Flags
//!
//! - `collection`: collection operations (enables `object`)
//! - `object`: mapping helpers
//! - `function`: function decorators and the scheduler abstraction
//! - `async`: tokio-backed scheduler and shared runtime
//! - `serde`: memoization keyed by serialized arguments
//! - `fxhash`: `FxHash` for internal hash maps
//! - `full`: enable all of the above except `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let words = vec!["apple", "kiwi", "banana"];
//! let lengths = map(&words, |word| word.len());
//! assert_eq!(reduce(&lengths, |total, length| total + length, 0), 15);
//!
//! let shout = once(|word: &str| word.to_uppercase());
//! assert_eq!(shout.call("hi"), "HI");
//! assert_eq!(shout.call("bye"), "HI");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, types and traits.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "function")]
    pub use crate::scheduler::{ManualScheduler, Scheduler, TimerHandle};

    #[cfg(feature = "async")]
    pub use crate::scheduler::TokioScheduler;
}

pub mod error;

#[allow(dead_code)]
mod hashing;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "function")]
pub mod scheduler;
