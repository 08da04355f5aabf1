//! Small helper combinators.

/// Returns the value unchanged.
///
/// Handy as a default callback: wherever an operation expects a function
/// and the caller has nothing to transform, `identity` fits.
///
/// # Laws
///
/// - `map(s, |x| identity(x.clone())) == s`
///
/// # Examples
///
/// ```
/// use combinars::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with collection operations
///
/// ```
/// use combinars::collection::map;
/// use combinars::function::identity;
///
/// let values = vec![3, 1, 2];
/// assert_eq!(map(&values, |value| identity(*value)), values);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
