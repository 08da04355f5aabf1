//! Head and tail slicing of sequences.

/// Returns the first element of `sequence`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::first;
///
/// assert_eq!(first(&[3, 2, 1]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns a copy of the first `count` elements of `sequence`.
///
/// If `count` exceeds the length, the whole sequence is returned.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element of `sequence`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::last;
///
/// assert_eq!(last(&[3, 2, 1]), Some(&1));
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns a copy of the last `count` elements of `sequence`.
///
/// The copy starts at `max(0, len - count)`, so asking for more elements
/// than exist returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}
