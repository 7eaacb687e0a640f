//! `Criterion`: a named piece of system state and its vocabulary

use crate::format::{self, Description};
use crate::{CriterionError, CriterionKind, MatchMethod, ValuePairs, FLAG_DELIMITER};
use tracing::{debug, info, warn};

/// A named, typed piece of observed system state.
///
/// The state is a plain `i32`; the [`CriterionKind`] decides whether it holds one
/// vocabulary value (exclusive) or a set of flags (inclusive). State changes are
/// counted so downstream consumers can detect which criteria moved since the
/// last [`reset_modified_status`](Self::reset_modified_status).
///
/// # Example
///
/// ```
/// use criteria::{Criterion, CriterionError};
///
/// let mut mode = Criterion::exclusive("Mode");
/// mode.add_value_pair(0, "Normal").unwrap();
/// mode.add_value_pair(2, "InCall").unwrap();
///
/// mode.set_criterion_state(2);
/// assert_eq!(mode.formatted_state(), "InCall");
/// assert_eq!(mode.matches("Is", 2), Ok(true));
/// assert!(matches!(
///     mode.matches("Includes", 2),
///     Err(CriterionError::UnknownMatchMethod { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Criterion {
    name: String,
    kind: CriterionKind,
    value_pairs: ValuePairs,
    state: i32,
    modifications: u32,
}

impl Criterion {
    /// Create a criterion of the given kind with state 0 and no vocabulary.
    pub fn new(name: impl Into<String>, kind: CriterionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value_pairs: ValuePairs::new(),
            state: 0,
            modifications: 0,
        }
    }

    /// Create an exclusive criterion.
    pub fn exclusive(name: impl Into<String>) -> Self {
        Self::new(name, CriterionKind::Exclusive)
    }

    /// Create an inclusive criterion.
    pub fn inclusive(name: impl Into<String>) -> Self {
        Self::new(name, CriterionKind::Inclusive)
    }

    // ───────────────────────────────────────────────────────────────────────────
    // State
    // ───────────────────────────────────────────────────────────────────────────

    /// Overwrite the state.
    ///
    /// Not validated against the vocabulary. Counts as a modification only when
    /// `state` differs from the current one.
    pub fn set_criterion_state(&mut self, state: i32) {
        if self.state == state {
            debug!(
                criterion = %self.name,
                state,
                "selection criterion not modified: value already set"
            );
            return;
        }
        self.state = state;
        self.modifications = self.modifications.saturating_add(1);
        info!(
            criterion = %self.name,
            "{}",
            self.formatted_description(false, false)
        );
    }

    /// Current state.
    #[must_use]
    pub fn criterion_state(&self) -> i32 {
        self.state
    }

    /// Criterion name.
    #[must_use]
    pub fn criterion_name(&self) -> &str {
        &self.name
    }

    /// Criterion kind.
    #[must_use]
    pub fn kind(&self) -> CriterionKind {
        self.kind
    }

    /// `true` if the state is a flag set.
    #[must_use]
    pub fn is_inclusive(&self) -> bool {
        self.kind.is_inclusive()
    }

    /// `true` if the state changed since the last reset.
    #[must_use]
    pub fn has_been_modified(&self) -> bool {
        self.modifications > 0
    }

    /// Number of state changes since the last reset (saturating).
    #[must_use]
    pub fn modification_count(&self) -> u32 {
        self.modifications
    }

    /// Clear the modification counter. The state is kept.
    pub fn reset_modified_status(&mut self) {
        self.modifications = 0;
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Vocabulary
    // ───────────────────────────────────────────────────────────────────────────

    /// Register `literal` as a name for `numerical`.
    ///
    /// Exclusive criteria accept every pair; re-registering a literal replaces
    /// its code. Aliased codes resolve to the first literal by name.
    ///
    /// # Errors
    ///
    /// On inclusive criteria, [`CriterionError::InvalidValue`] when `numerical` is
    /// zero, has more than one bit set, or is already named by another literal.
    /// The vocabulary is unchanged on error.
    pub fn add_value_pair(
        &mut self,
        numerical: i32,
        literal: impl Into<String>,
    ) -> Result<(), CriterionError> {
        let literal = literal.into();
        if let Err(reason) = self
            .kind
            .validate_value_pair(&self.value_pairs, numerical, &literal)
        {
            let err = CriterionError::InvalidValue {
                criterion: self.name.clone(),
                literal,
                numerical,
                reason,
            };
            warn!(criterion = %self.name, "{err}");
            return Err(err);
        }

        debug!(criterion = %self.name, %literal, numerical, "value pair registered");
        self.value_pairs.insert(literal, numerical);
        Ok(())
    }

    /// First literal registered for `numerical`.
    #[must_use]
    pub fn literal_value(&self, numerical: i32) -> Option<&str> {
        self.value_pairs.literal(numerical)
    }

    /// Code of `literal`.
    ///
    /// Inclusive criteria also accept several literals joined by
    /// [`FLAG_DELIMITER`] and return the OR of their flags; any unknown
    /// literal makes the whole lookup miss.
    #[must_use]
    pub fn numerical_value(&self, literal: &str) -> Option<i32> {
        match self.kind {
            CriterionKind::Exclusive => self.value_pairs.numerical(literal),
            CriterionKind::Inclusive => literal
                .split(FLAG_DELIMITER)
                .try_fold(0, |acc, part| self.value_pairs.numerical(part).map(|n| acc | n)),
        }
    }

    /// The vocabulary.
    #[must_use]
    pub fn value_pairs(&self) -> &ValuePairs {
        &self.value_pairs
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Matching
    // ───────────────────────────────────────────────────────────────────────────

    /// Evaluate a rule: does the current state satisfy `method` against `target`?
    ///
    /// # Errors
    ///
    /// [`CriterionError::UnknownMatchMethod`] when `method` is not a method of
    /// this criterion's kind. Rule evaluators should treat this as a
    /// configuration error.
    pub fn matches(&self, method: &str, target: i32) -> Result<bool, CriterionError> {
        let method = self
            .kind
            .match_method(method)
            .ok_or_else(|| self.unknown_method(method))?;
        Ok(method.evaluate(self.state, target))
    }

    /// Evaluate an already-resolved method.
    ///
    /// # Errors
    ///
    /// [`CriterionError::UnknownMatchMethod`] when this criterion's kind does not
    /// offer `method`.
    pub fn matches_with(&self, method: MatchMethod, target: i32) -> Result<bool, CriterionError> {
        if !self.kind.supports(method) {
            return Err(self.unknown_method(method.name()));
        }
        Ok(method.evaluate(self.state, target))
    }

    /// Whether rules may use `method` on this criterion.
    #[must_use]
    pub fn is_match_method_available(&self, method: &str) -> bool {
        self.kind.match_method(method).is_some()
    }

    /// Methods rules may use on this criterion.
    #[must_use]
    pub fn match_methods(&self) -> &'static [MatchMethod] {
        self.kind.match_methods()
    }

    fn unknown_method(&self, method: &str) -> CriterionError {
        CriterionError::UnknownMatchMethod {
            criterion: self.name.clone(),
            method: method.to_owned(),
            available: self.match_methods().iter().map(|m| m.name()).collect(),
        }
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Formatting
    // ───────────────────────────────────────────────────────────────────────────

    /// The state rendered through the vocabulary.
    ///
    /// Exclusive: the literal of the state, or `"<none>"` when unregistered.
    /// Inclusive: set flags in ascending bit order joined by `|`, unnamed bits
    /// as their decimal code, `"<none>"` when no bit is set.
    #[must_use]
    pub fn formatted_state(&self) -> String {
        format::formatted_state(self.kind, &self.value_pairs, self.state)
    }

    /// The vocabulary rendered as `{Literal = code, ...}`.
    #[must_use]
    pub fn list_possible_values(&self) -> String {
        format::possible_values(self.kind, &self.value_pairs)
    }

    /// Summary of name, state and (optionally) kind and vocabulary.
    #[must_use]
    pub fn formatted_description(&self, with_type_info: bool, human_readable: bool) -> String {
        let state = self.formatted_state();
        let possible_values = if with_type_info {
            self.list_possible_values()
        } else {
            String::new()
        };
        format::description(
            &Description {
                name: &self.name,
                kind: self.kind,
                state: &state,
                possible_values: &possible_values,
            },
            with_type_info,
            human_readable,
        )
    }

    pub(crate) fn restore_state(&mut self, state: i32) {
        self.state = state;
    }
}
