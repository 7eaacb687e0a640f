//! `ValuePairs`: the literal ↔ numeric vocabulary of a criterion
//!
//! Literals are unique keys, iterated in lexicographic order. Numeric codes may
//! repeat (exclusive criteria allow aliases), so reverse lookup returns the
//! lexicographically first literal carrying the code. The table only grows:
//! re-registering a literal replaces its code.

use std::collections::BTreeMap;

/// Mapping from literal names to numeric codes, ordered by literal.
///
/// # Example
///
/// ```
/// use criteria::ValuePairs;
///
/// let mut pairs = ValuePairs::new();
/// pairs.insert("Normal", 0);
/// pairs.insert("InCall", 2);
/// pairs.insert("Phone", 2);
/// pairs.insert("Call", 2); // aliases resolve to the first literal by name
///
/// assert_eq!(pairs.numerical("Phone"), Some(2));
/// assert_eq!(pairs.literal(2), Some("Call"));
/// assert_eq!(pairs.literal(7), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePairs {
    pairs: BTreeMap<String, i32>,
}

impl ValuePairs {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `literal` as `numerical`.
    ///
    /// Returns the code previously associated with `literal`, if any.
    pub fn insert(&mut self, literal: impl Into<String>, numerical: i32) -> Option<i32> {
        self.pairs.insert(literal.into(), numerical)
    }

    /// Forward lookup: the code of `literal`.
    #[must_use]
    pub fn numerical(&self, literal: &str) -> Option<i32> {
        self.pairs.get(literal).copied()
    }

    /// Reverse lookup: the first literal, by name, whose code is `numerical`.
    #[must_use]
    pub fn literal(&self, numerical: i32) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(_, n)| **n == numerical)
            .map(|(l, _)| l.as_str())
    }

    /// Whether `literal` is registered.
    #[must_use]
    pub fn contains_literal(&self, literal: &str) -> bool {
        self.pairs.contains_key(literal)
    }

    /// Pairs ordered by literal.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.pairs.iter().map(|(l, n)| (l.as_str(), *n))
    }

    /// Number of registered literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no literal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
