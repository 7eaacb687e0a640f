//! `MatchMethod`: the comparison strategies a rule can apply to a criterion
//!
//! Rules name a method (`"Is"`, `"Includes"`, ...) and a target value. The names
//! map onto a closed enum; evaluation is an exhaustive `match`, so there is no
//! runtime table of predicates to fall out of sync with configuration.
//!
//! Which methods a criterion accepts depends on its
//! [`CriterionKind`](crate::CriterionKind).

use std::fmt;

/// A comparison between a criterion's current state and a target value.
///
/// # Example
///
/// ```
/// use criteria::MatchMethod;
///
/// assert_eq!(MatchMethod::from_name("Includes"), Some(MatchMethod::Includes));
/// assert!(MatchMethod::Includes.evaluate(0b101, 0b001));
/// assert!(!MatchMethod::Includes.evaluate(0b101, 0b010));
/// assert_eq!(MatchMethod::from_name("includes"), None); // case-sensitive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchMethod {
    /// State equals the target (whole bit-field for inclusive criteria).
    Is,
    /// State differs from the target.
    IsNot,
    /// Every bit of the target is set in the state.
    Includes,
    /// No bit of the target is set in the state.
    Excludes,
}

impl MatchMethod {
    /// All methods, in declaration order.
    pub const ALL: [Self; 4] = [Self::Is, Self::IsNot, Self::Includes, Self::Excludes];

    /// Resolve a method from its rule name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Is" => Some(Self::Is),
            "IsNot" => Some(Self::IsNot),
            "Includes" => Some(Self::Includes),
            "Excludes" => Some(Self::Excludes),
            _ => None,
        }
    }

    /// The name rules use for this method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Is => "Is",
            Self::IsNot => "IsNot",
            Self::Includes => "Includes",
            Self::Excludes => "Excludes",
        }
    }

    /// Compare `state` against `target`.
    ///
    /// This is the raw strategy; it does not check whether a criterion's kind
    /// offers the method. Use [`Criterion::matches`](crate::Criterion::matches)
    /// for rule evaluation.
    #[inline]
    #[must_use]
    pub fn evaluate(self, state: i32, target: i32) -> bool {
        match self {
            Self::Is => state == target,
            Self::IsNot => state != target,
            Self::Includes => state & target == target,
            Self::Excludes => state & target == 0,
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
