//! Export document for criteria.
//!
//! Plain data handed to whatever serializer the host uses. With feature
//! `"serde"` the types derive `Serialize`/`Deserialize`; field names follow the
//! framework's XML vocabulary (`SelectionCriterion`, `ValuePair`, `Literal`, ...).
//!
//! | Document type | Runtime type | Export | Import |
//! |---------------|--------------|--------|--------|
//! | [`CriteriaElement`] | [`Criteria`] | `Criteria::to_element()` | `Criteria::from_element()` |
//! | [`CriterionElement`] | [`Criterion`] | `Criterion::to_element()` | `Criterion::from_element()` |
//! | [`ValuePairElement`] | one vocabulary entry | | |
//!
//! ```json
//! { "SelectionCriterion": [
//!     { "Name": "Mode", "Kind": "Exclusive", "Value": "InCall", "State": 2,
//!       "ValuePair": [ { "Literal": "InCall", "Numerical": 2 },
//!                      { "Literal": "Normal", "Numerical": 0 } ] } ] }
//! ```

use crate::{Criteria, Criterion, CriterionError, CriterionKind};

/// One criterion: identity, current state and vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct CriterionElement {
    /// Criterion name.
    pub name: String,
    /// Exclusive or inclusive.
    pub kind: CriterionKind,
    /// Formatted state, informational only. Import restores from `state`.
    pub value: String,
    /// Numeric state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: i32,
    /// Vocabulary ordered by literal.
    #[cfg_attr(feature = "serde", serde(rename = "ValuePair", default))]
    pub value_pairs: Vec<ValuePairElement>,
}

/// One literal ↔ numeric association.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct ValuePairElement {
    /// Literal name.
    pub literal: String,
    /// Numeric code.
    pub numerical: i32,
}

/// Every criterion of a registry, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriteriaElement {
    /// One entry per criterion.
    #[cfg_attr(feature = "serde", serde(rename = "SelectionCriterion", default))]
    pub selection_criteria: Vec<CriterionElement>,
}

impl Criterion {
    /// Export name, kind, state and vocabulary.
    #[must_use]
    pub fn to_element(&self) -> CriterionElement {
        CriterionElement {
            name: self.criterion_name().to_owned(),
            kind: self.kind(),
            value: self.formatted_state(),
            state: self.criterion_state(),
            value_pairs: self
                .value_pairs()
                .iter()
                .map(|(literal, numerical)| ValuePairElement {
                    literal: literal.to_owned(),
                    numerical,
                })
                .collect(),
        }
    }

    /// Rebuild a criterion from an exported element.
    ///
    /// Every pair goes through [`add_value_pair`](Self::add_value_pair), so an
    /// inclusive element with a bad flag is rejected. The state is restored
    /// without counting as a modification.
    ///
    /// # Errors
    ///
    /// [`CriterionError::InvalidValue`] from the first rejected pair.
    pub fn from_element(element: &CriterionElement) -> Result<Self, CriterionError> {
        let mut criterion = Self::new(element.name.as_str(), element.kind);
        for pair in &element.value_pairs {
            criterion.add_value_pair(pair.numerical, pair.literal.as_str())?;
        }
        criterion.restore_state(element.state);
        Ok(criterion)
    }
}

impl Criteria {
    /// Export every criterion, one `SelectionCriterion` each, in creation order.
    #[must_use]
    pub fn to_element(&self) -> CriteriaElement {
        CriteriaElement {
            selection_criteria: self.iter().map(Criterion::to_element).collect(),
        }
    }

    /// Rebuild a registry from an exported document.
    ///
    /// # Errors
    ///
    /// [`CriterionError::DuplicateCriterion`] if two entries share a name, or
    /// [`CriterionError::InvalidValue`] from a rejected pair.
    pub fn from_element(element: &CriteriaElement) -> Result<Self, CriterionError> {
        let mut criteria = Self::new();
        for entry in &element.selection_criteria {
            criteria.insert(Criterion::from_element(entry)?)?;
        }
        Ok(criteria)
    }
}
