//! Text rendering of criterion state, vocabulary and descriptions.

use crate::{CriterionKind, ValuePairs, FLAG_DELIMITER, NO_STATE_LITERAL};

/// Render `state` through the vocabulary.
///
/// Exclusive: the literal of `state`, or [`NO_STATE_LITERAL`].
/// Inclusive: the literal of every set bit, ascending, joined by
/// [`FLAG_DELIMITER`]; unnamed bits render as their decimal code.
pub(crate) fn formatted_state(kind: CriterionKind, pairs: &ValuePairs, state: i32) -> String {
    match kind {
        CriterionKind::Exclusive => pairs
            .literal(state)
            .map_or_else(|| NO_STATE_LITERAL.to_owned(), str::to_owned),
        CriterionKind::Inclusive => {
            let flags: Vec<String> = set_flags(state)
                .map(|flag| {
                    pairs
                        .literal(flag)
                        .map_or_else(|| flag.to_string(), str::to_owned)
                })
                .collect();
            if flags.is_empty() {
                NO_STATE_LITERAL.to_owned()
            } else {
                flags.join(FLAG_DELIMITER.to_string().as_str())
            }
        }
    }
}

/// Single-bit values set in `state`, lowest bit first.
fn set_flags(state: i32) -> impl Iterator<Item = i32> {
    let bits = state as u32;
    (0..u32::BITS)
        .map(move |shift| bits & (1 << shift))
        .filter(|bit| *bit != 0)
        .map(|bit| bit as i32)
}

/// Render the vocabulary as `{Literal = code, ...}`.
///
/// Exclusive criteria list pairs by literal with decimal codes.
/// Inclusive criteria list flags by ascending bit with hex codes.
pub(crate) fn possible_values(kind: CriterionKind, pairs: &ValuePairs) -> String {
    let mut entries: Vec<(&str, i32)> = pairs.iter().collect();
    if kind.is_inclusive() {
        entries.sort_by_key(|(_, n)| *n as u32);
    }

    let entries: Vec<String> = entries
        .into_iter()
        .map(|(literal, numerical)| match kind {
            CriterionKind::Exclusive => format!("{literal} = {numerical}"),
            CriterionKind::Inclusive => format!("{literal} = {numerical:#x}"),
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Inputs to [`description`].
pub(crate) struct Description<'a> {
    pub name: &'a str,
    pub kind: CriterionKind,
    pub state: &'a str,
    pub possible_values: &'a str,
}

/// One-entry summary of a criterion, as listed by the registry.
///
/// Human-readable with type info:
///
/// ```text
/// Mode:
/// =====
/// Possible states (Exclusive): {InCall = 2, Normal = 0}
/// Current state = InCall
/// ```
///
/// Human-readable without type info: `Mode = InCall`.
///
/// Machine: `Criterion name: Mode, type kind: Exclusive, current state: InCall, states: {...}`
/// (type kind and states only with type info).
pub(crate) fn description(d: &Description<'_>, with_type_info: bool, human_readable: bool) -> String {
    if human_readable {
        if !with_type_info {
            return format!("{} = {}", d.name, d.state);
        }
        let title = format!("{}:", d.name);
        let underline = "=".repeat(title.chars().count());
        return format!(
            "{title}\n{underline}\nPossible states ({}): {}\nCurrent state = {}",
            d.kind, d.possible_values, d.state
        );
    }

    let mut out = format!("Criterion name: {}", d.name);
    if with_type_info {
        out.push_str(&format!(", type kind: {}", d.kind));
    }
    out.push_str(&format!(", current state: {}", d.state));
    if with_type_info {
        out.push_str(&format!(", states: {}", d.possible_values));
    }
    out
}
