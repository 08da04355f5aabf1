//! Arbitrarily nested sequences and their flattening.
//!
//! [`Nested`] is a rose tree: every node is either a leaf value or a
//! sequence of further nodes, to any depth. [`flatten`] walks the tree
//! depth-first, left to right, with an explicit stack so that very deep
//! nesting cannot overflow the call stack. Dropping a tree is iterative for
//! the same reason; the derived `Clone`, `PartialEq` and `Debug` still recurse.
//!
//! The [`nested!`](crate::nested) macro builds trees from bracket literals:
//!
//! ```rust
//! use combinars::collection::flatten;
//! use combinars::nested;
//!
//! let tree = nested![1, [2], [3, [[4]]]];
//! assert_eq!(flatten(&tree), vec![1, 2, 3, 4]);
//! ```

/// A value or a sequence of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A plain element.
    Leaf(T),
    /// A sequence that may itself contain sequences.
    Sequence(Vec<Self>),
}

impl<T> Nested<T> {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the nesting depth: 0 for a leaf, 1 + the deepest child for a
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collection::Nested;
    ///
    /// let tree = Nested::Sequence(vec![
    ///     Nested::Leaf(1),
    ///     Nested::Sequence(vec![Nested::Leaf(2)]),
    /// ]);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, level)) = stack.pop() {
            if let Self::Sequence(children) = node {
                deepest = deepest.max(level + 1);
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let Self::Sequence(children) = self else {
            return;
        };
        let mut stack = std::mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let Self::Sequence(grandchildren) = &mut node {
                stack.append(grandchildren);
            }
        }
    }
}

/// Flattens a nested sequence into a single sequence of leaves.
///
/// Leaves keep their depth-first, left-to-right order; empty inner
/// sequences contribute nothing.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::{Nested, flatten};
///
/// let tree = vec![
///     Nested::Leaf('a'),
///     Nested::Sequence(vec![Nested::Leaf('b'), Nested::Sequence(vec![])]),
///     Nested::Leaf('c'),
/// ];
/// assert_eq!(flatten(&tree), vec!['a', 'b', 'c']);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut results = Vec::new();
    let mut stack = vec![nested.iter()];
    while let Some(level) = stack.last_mut() {
        let Some(node) = level.next() else {
            stack.pop();
            continue;
        };
        match node {
            Nested::Leaf(value) => results.push(value.clone()),
            Nested::Sequence(children) => stack.push(children.iter()),
        }
    }
    results
}

/// Builds a `Vec<Nested<_>>` from a bracketed literal.
///
/// Every bracket group becomes a [`Nested::Sequence`]; everything else is a
/// leaf expression. Leaves must be single tokens, so wrap compound
/// expressions such as `-1` or `x + 1` in parentheses.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::Nested;
/// use combinars::nested;
///
/// let tree = nested![1, [(-2), [3]]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Leaf(1),
///         Nested::Sequence(vec![
///             Nested::Leaf(-2),
///             Nested::Sequence(vec![Nested::Leaf(3)]),
///         ]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@node [$($inner:tt),*]) => {
        $crate::collection::Nested::Sequence(vec![$($crate::nested!(@node $inner)),*])
    };
    (@node $leaf:expr) => {
        $crate::collection::Nested::Leaf($leaf)
    };
    ($($item:tt),*) => {
        vec![$($crate::nested!(@node $item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flatten_of_flat_sequence_is_identity() {
        let tree = crate::nested![1, 2, 3];
        assert_eq!(flatten(&tree), vec![1, 2, 3]);
    }

    #[rstest]
    fn flatten_of_empty_is_empty() {
        let tree: Vec<Nested<i32>> = Vec::new();
        assert!(flatten(&tree).is_empty());
    }

    #[rstest]
    fn flatten_handles_deep_nesting_without_recursion() {
        let mut node = Nested::Leaf(7);
        for _ in 0..100_000 {
            node = Nested::Sequence(vec![node]);
        }
        let tree = vec![node];
        assert_eq!(flatten(&tree), vec![7]);
        drop(tree);
    }

    #[rstest]
    fn deep_tree_drops_without_recursion() {
        let mut node = Nested::Sequence(Vec::new());
        for level in 0..200_000 {
            node = Nested::Sequence(vec![Nested::Leaf(level), node]);
        }
        assert_eq!(node.depth(), 200_001);
        drop(node);
    }

    #[rstest]
    fn dropping_a_tree_drops_every_leaf() {
        use std::rc::Rc;

        let marker = Rc::new(());
        let tree = crate::nested![
            (Rc::clone(&marker)),
            [(Rc::clone(&marker)), [[(Rc::clone(&marker))]]]
        ];
        assert_eq!(Rc::strong_count(&marker), 4);
        drop(tree);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[rstest]
    fn depth_of_leaf_is_zero() {
        assert_eq!(Nested::Leaf(1).depth(), 0);
        assert!(Nested::Leaf(1).is_leaf());
    }
}
