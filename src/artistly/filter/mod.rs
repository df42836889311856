//! # Filtering Engine
//!
//! The artist listing and the manager dashboard share one filtering pipeline:
//!
//! ```text
//! FilterState ──► active predicates ──► linear scan over the records ──► FilteredView
//! ```
//!
//! - [`selector`]: drop-down values (`all`, a known label, or an unknown one)
//! - [`state`]: the [`FilterState`] a view owns
//! - [`predicate`]: one pure test per field, plus which fields apply to which record type
//!
//! [`apply`] is the evaluator. It keeps a record when every applicable
//! predicate passes, preserves store order, and borrows rather than copies.
//! Bad selectors and empty results are ordinary outcomes; nothing here fails.

pub mod predicate;
pub mod selector;
pub mod state;

pub use predicate::{active_predicates, FilterField, Filterable, Predicate};
pub use selector::Selector;
pub use state::FilterState;

/// Returns the records passing every applicable predicate, in store order.
pub fn apply<'a, R: Filterable>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let predicates = active_predicates::<R>(state);
    let kept: Vec<&R> = records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(*record)))
        .collect();

    tracing::debug!(
        total = records.len(),
        kept = kept.len(),
        predicates = predicates.len(),
        "filter applied"
    );
    kept
}

/// A filtered view over a record slice, with the counts pages display.
#[derive(Debug, Clone)]
pub struct FilteredView<'a, R> {
    pub records: Vec<&'a R>,
    pub total: usize,
}

impl<'a, R: Filterable> FilteredView<'a, R> {
    pub fn new(records: &'a [R], state: &FilterState) -> Self {
        Self {
            records: apply(records, state),
            total: records.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.len(), self.total, noun)
    }
}
