//! `Criteria`: the registry owning every selection criterion.
//!
//! Configuration loading creates criteria here and fills their vocabularies;
//! runtime code looks them up by name to update state or evaluate rules.
//! Iteration follows creation order so listings and exports are deterministic.

use crate::{Criterion, CriterionError, CriterionKind};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Name-keyed set of criteria, exclusive and inclusive.
///
/// Lookups hand out borrows, so a criterion reference can never outlive the
/// registry.
///
/// # Example
///
/// ```
/// use criteria::{Criteria, CriterionError};
///
/// let mut criteria = Criteria::new();
/// criteria.create_exclusive_criterion("Mode").unwrap();
///
/// assert!(matches!(
///     criteria.create_inclusive_criterion("Mode"),
///     Err(CriterionError::DuplicateCriterion { .. })
/// ));
/// assert!(criteria.get_criterion("Missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    criteria: IndexMap<String, Criterion>,
}

impl Criteria {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store an exclusive criterion.
    ///
    /// # Errors
    ///
    /// [`CriterionError::DuplicateCriterion`] if `name` exists; the existing
    /// criterion is left untouched.
    pub fn create_exclusive_criterion(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut Criterion, CriterionError> {
        self.create_criterion(name, CriterionKind::Exclusive)
    }

    /// Create and store an inclusive criterion.
    ///
    /// # Errors
    ///
    /// [`CriterionError::DuplicateCriterion`] if `name` exists; the existing
    /// criterion is left untouched.
    pub fn create_inclusive_criterion(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut Criterion, CriterionError> {
        self.create_criterion(name, CriterionKind::Inclusive)
    }

    /// Create and store a criterion of `kind`.
    ///
    /// # Errors
    ///
    /// [`CriterionError::DuplicateCriterion`] if `name` exists.
    pub fn create_criterion(
        &mut self,
        name: impl Into<String>,
        kind: CriterionKind,
    ) -> Result<&mut Criterion, CriterionError> {
        self.insert(Criterion::new(name, kind))
    }

    /// Take ownership of an already-built criterion.
    ///
    /// # Errors
    ///
    /// [`CriterionError::DuplicateCriterion`] if its name exists.
    pub fn insert(&mut self, criterion: Criterion) -> Result<&mut Criterion, CriterionError> {
        match self.criteria.entry(criterion.criterion_name().to_owned()) {
            Entry::Occupied(entry) => {
                warn!(criterion = %entry.key(), "selection criterion already exists");
                Err(CriterionError::DuplicateCriterion {
                    name: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                debug!(
                    criterion = %entry.key(),
                    kind = %criterion.kind(),
                    "selection criterion created"
                );
                Ok(entry.insert(criterion))
            }
        }
    }

    /// The criterion named `name`.
    #[must_use]
    pub fn get_criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.get(name)
    }

    /// The criterion named `name`, for state updates.
    #[must_use]
    pub fn get_criterion_mut(&mut self, name: &str) -> Option<&mut Criterion> {
        self.criteria.get_mut(name)
    }

    /// Description of every criterion, in creation order.
    ///
    /// See [`Criterion::formatted_description`] for the layouts.
    #[must_use]
    pub fn list_selection_criteria(&self, with_type_info: bool, human_readable: bool) -> Vec<String> {
        self.iter()
            .map(|c| c.formatted_description(with_type_info, human_readable))
            .collect()
    }

    /// Clear the modification status of every criterion.
    pub fn reset_modified_status(&mut self) {
        for criterion in self.criteria.values_mut() {
            criterion.reset_modified_status();
        }
    }

    /// `true` if any criterion changed since the last reset.
    #[must_use]
    pub fn has_been_modified(&self) -> bool {
        self.iter().any(Criterion::has_been_modified)
    }

    /// Criteria in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> + '_ {
        self.criteria.values()
    }

    /// Criterion names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.criteria.keys().map(String::as_str)
    }

    /// Number of criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` if no criterion exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = indexmap::map::Values<'a, String, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.values()
    }
}
