//! criteria - Selection criteria for a parameter framework
//!
//! A *criterion* is a named, typed piece of observed system state ("audio mode",
//! "call state", "active devices"). Rules elsewhere in the framework gate parameter
//! settings on expressions that test a criterion against a value with a named
//! match method (`Is`, `Includes`, ...). This crate owns the state model, the
//! literal/numeric vocabulary of each criterion, and the match engine.
//!
//! # Architecture
//!
//! - [`ValuePairs`]: Bidirectional literal ↔ numeric vocabulary of one criterion
//! - [`MatchMethod`]: Closed set of comparison strategies, dispatched by `match`
//! - [`CriterionKind`]: `Exclusive` (one value) or `Inclusive` (bit-field of flags)
//! - [`Criterion`]: Name, kind, vocabulary, current state, modification counter
//! - [`Criteria`]: Registry owning every criterion, keyed by name
//! - [`CriteriaElement`]: Plain-data export document (serde with feature `"serde"`)
//!
//! # Key Design Insights
//!
//! 1. **Kind is a tag, not a subclass**: both kinds share state, name and vocabulary.
//!    Formatting, validation and the available match methods are selected by
//!    matching on [`CriterionKind`].
//!
//! 2. **Match methods are a closed enum**: a rule naming a method the criterion's
//!    kind does not support fails with [`CriterionError::UnknownMatchMethod`]
//!    instead of silently evaluating to `false`.
//!
//! 3. **Handles are borrows**: [`Criteria`] hands out `&Criterion` / `&mut Criterion`,
//!    so no handle can outlive the registry that owns it.
//!
//! # Example
//!
//! ```
//! use criteria::prelude::*;
//!
//! let mut criteria = Criteria::new();
//!
//! let devices = criteria.create_inclusive_criterion("OutputDevices").unwrap();
//! devices.add_value_pair(0x1, "Speaker").unwrap();
//! devices.add_value_pair(0x2, "Headset").unwrap();
//! devices.add_value_pair(0x4, "Bluetooth").unwrap();
//! devices.set_criterion_state(0x5);
//!
//! assert_eq!(devices.formatted_state(), "Speaker|Bluetooth");
//! assert_eq!(devices.matches("Includes", 0x1), Ok(true));
//! assert_eq!(devices.matches("Excludes", 0x2), Ok(true));
//! assert!(devices.has_been_modified());
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod criteria;
mod criterion;
mod element;
mod format;
mod kind;
mod match_method;
mod value_pairs;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use criteria::Criteria;
pub use criterion::Criterion;
pub use element::{CriteriaElement, CriterionElement, ValuePairElement};
pub use kind::CriterionKind;
pub use match_method::MatchMethod;
pub use value_pairs::ValuePairs;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use criteria::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Registry
        Criteria,
        // Export document
        CriteriaElement,
        // Core types
        Criterion,
        CriterionElement,
        // Errors
        CriterionError,
        CriterionKind,
        InvalidFlag,
        MatchMethod,
        ValuePairElement,
        ValuePairs,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Formatted state of a criterion whose state has no literal.
///
/// Used for an exclusive criterion whose state is not registered, and for an
/// inclusive criterion with no bit set.
pub const NO_STATE_LITERAL: &str = "<none>";

/// Separator between flag literals in an inclusive formatted state.
///
/// Also accepted by [`Criterion::numerical_value`] on inclusive criteria:
/// `"Speaker|Headset"` resolves to the OR of both flags.
pub const FLAG_DELIMITER: char = '|';

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from criterion configuration and rule evaluation.
///
/// These are configuration mistakes: a rule referencing a method the criterion
/// does not support, a flag value that cannot be a flag, a name registered twice.
/// Lookup misses are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriterionError {
    /// The match method is not supported by this criterion's kind.
    #[error(
        "criterion '{criterion}' has no match method \"{method}\"; available: {}",
        .available.join(", ")
    )]
    UnknownMatchMethod {
        /// Name of the criterion the rule was evaluated against.
        criterion: String,
        /// The requested method name.
        method: String,
        /// Methods this criterion does support (for self-correcting messages).
        available: Vec<&'static str>,
    },

    /// An inclusive criterion rejected a value pair.
    #[error("rejecting value pair {literal} = {numerical:#x} for criterion '{criterion}': {reason}")]
    InvalidValue {
        /// Name of the criterion.
        criterion: String,
        /// The rejected literal.
        literal: String,
        /// The rejected numeric code.
        numerical: i32,
        /// Why the value cannot be a flag.
        reason: InvalidFlag,
    },

    /// A criterion with this name already exists in the registry.
    #[error("selection criterion '{name}' already exists")]
    DuplicateCriterion {
        /// The name that was registered twice.
        name: String,
    },
}

/// Why an inclusive criterion rejected a flag value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFlag {
    /// Zero carries no bit; it is the empty flag set.
    #[error("0 is the empty flag set and cannot be named")]
    Zero,
    /// More than one bit set.
    #[error("value is not a power of two")]
    NotPowerOfTwo,
    /// The flag is already named by another literal.
    #[error("flag already registered as '{literal}'")]
    Duplicate {
        /// The literal that owns the flag.
        literal: String,
    },
}
