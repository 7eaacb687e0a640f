//! `CriterionKind`: exclusive (single value) vs inclusive (flag set)

use crate::{InvalidFlag, MatchMethod, ValuePairs};
use std::fmt;

/// How a criterion's integer state is interpreted.
///
/// Both kinds store a plain `i32`. The kind selects formatting, value pair
/// validation, and which [`MatchMethod`]s rules may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CriterionKind {
    /// The state is exactly one value of the vocabulary at a time.
    #[default]
    Exclusive,
    /// The state is a bit-field; every set bit is one flag of the vocabulary.
    Inclusive,
}

const EXCLUSIVE_METHODS: &[MatchMethod] = &[MatchMethod::Is, MatchMethod::IsNot];
const INCLUSIVE_METHODS: &[MatchMethod] = &MatchMethod::ALL;

impl CriterionKind {
    /// `true` for [`CriterionKind::Inclusive`].
    #[must_use]
    pub fn is_inclusive(self) -> bool {
        matches!(self, Self::Inclusive)
    }

    /// The kind name used in descriptions and exports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Exclusive => "Exclusive",
            Self::Inclusive => "Inclusive",
        }
    }

    /// Match methods available to criteria of this kind.
    #[must_use]
    pub fn match_methods(self) -> &'static [MatchMethod] {
        match self {
            Self::Exclusive => EXCLUSIVE_METHODS,
            Self::Inclusive => INCLUSIVE_METHODS,
        }
    }

    /// Resolve a rule's method name against this kind.
    ///
    /// Returns `None` for unknown names and for names this kind does not offer
    /// (`"Includes"` on an exclusive criterion).
    #[must_use]
    pub fn match_method(self, name: &str) -> Option<MatchMethod> {
        MatchMethod::from_name(name).filter(|method| self.supports(*method))
    }

    /// Whether `method` is offered by this kind.
    #[must_use]
    pub fn supports(self, method: MatchMethod) -> bool {
        self.match_methods().contains(&method)
    }

    /// Check that `numerical` may be registered as `literal`.
    ///
    /// Exclusive criteria accept anything. Inclusive criteria require a single
    /// set bit that no other literal already names.
    pub(crate) fn validate_value_pair(
        self,
        pairs: &ValuePairs,
        numerical: i32,
        literal: &str,
    ) -> Result<(), InvalidFlag> {
        match self {
            Self::Exclusive => Ok(()),
            Self::Inclusive => {
                if numerical == 0 {
                    return Err(InvalidFlag::Zero);
                }
                if !(numerical as u32).is_power_of_two() {
                    return Err(InvalidFlag::NotPowerOfTwo);
                }
                match pairs.iter().find(|(l, n)| *n == numerical && *l != literal) {
                    Some((owner, _)) => Err(InvalidFlag::Duplicate {
                        literal: owner.to_owned(),
                    }),
                    None => Ok(()),
                }
            }
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
