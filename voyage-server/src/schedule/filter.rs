//! Keyword filtering of enumerated voyages.

use std::collections::HashSet;

use crate::domain::Occurrence;

/// Keep the voyages whose identifier is in `identifiers`, in their original order.
pub fn filter(occurrences: Vec<Occurrence>, identifiers: &HashSet<String>) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|o| identifiers.contains(&o.identifier))
        .collect()
}
