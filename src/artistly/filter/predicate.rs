//! Per-field record tests.
//!
//! Each predicate looks at one [`FilterState`] field and one record. They are
//! pure and never fail; which of them apply is decided by the record type via
//! [`Filterable::FIELDS`].

use super::selector::Selector;
use super::state::FilterState;
use crate::model::{ArtistRecord, BookingRequestRecord, BookingStatus, Category, PriceRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Location,
    Search,
    Price,
    Status,
}

/// A record the filter engine can scan.
///
/// Accessors for fields a record type does not have return nothing; those
/// fields are also left out of `FIELDS` so their predicates are never built.
pub trait Filterable {
    const FIELDS: &'static [FilterField];

    fn name(&self) -> &str;

    fn categories(&self) -> &[Category] {
        &[]
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn price_range(&self) -> Option<PriceRange> {
        None
    }

    fn status(&self) -> Option<BookingStatus> {
        None
    }
}

impl Filterable for ArtistRecord {
    const FIELDS: &'static [FilterField] = &[
        FilterField::Category,
        FilterField::Location,
        FilterField::Search,
        FilterField::Price,
    ];

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn price_range(&self) -> Option<PriceRange> {
        Some(self.price_range)
    }
}

impl Filterable for BookingRequestRecord {
    const FIELDS: &'static [FilterField] = &[FilterField::Status];

    fn name(&self) -> &str {
        &self.event_name
    }

    fn status(&self) -> Option<BookingStatus> {
        Some(self.status)
    }
}

/// A single boolean test derived from one filter field.
///
/// Text needles are stored lowercased so a scan lowercases each record value
/// once and the needle never.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Category(Selector<Category>),
    Location(String),
    Search(String),
    Price(Selector<PriceRange>),
    Status(Selector<BookingStatus>),
}

impl Predicate {
    pub fn for_field(field: FilterField, state: &FilterState) -> Self {
        match field {
            FilterField::Category => Predicate::Category(state.category.clone()),
            FilterField::Location => Predicate::Location(state.location.to_lowercase()),
            FilterField::Search => Predicate::Search(state.search.to_lowercase()),
            FilterField::Price => Predicate::Price(state.price.clone()),
            FilterField::Status => Predicate::Status(state.status.clone()),
        }
    }

    /// True when the predicate lets every record through.
    pub fn is_open(&self) -> bool {
        match self {
            Predicate::Category(sel) => sel.is_all(),
            Predicate::Location(needle) | Predicate::Search(needle) => needle.is_empty(),
            Predicate::Price(sel) => sel.is_all(),
            Predicate::Status(sel) => sel.is_all(),
        }
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Category(sel) => sel.accepts_any(record.categories()),
            Predicate::Location(needle) => {
                needle.is_empty() || record.location().is_some_and(|loc| contains(loc, needle))
            }
            Predicate::Search(needle) => {
                needle.is_empty()
                    || contains(record.name(), needle)
                    || record.location().is_some_and(|loc| contains(loc, needle))
            }
            Predicate::Price(sel) => sel.is_all() || record.price_range().is_some_and(|p| sel.accepts(p)),
            Predicate::Status(sel) => sel.is_all() || record.status().is_some_and(|s| sel.accepts(s)),
        }
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// The predicates that apply to `R` under `state`, skipping the open ones.
pub fn active_predicates<R: Filterable>(state: &FilterState) -> Vec<Predicate> {
    R::FIELDS
        .iter()
        .map(|field| Predicate::for_field(*field, state))
        .filter(|p| !p.is_open())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{artist, booking};

    #[test]
    fn category_matches_case_insensitively_and_exactly() {
        let a = artist("A", &[Category::Singer], "Paris", PriceRange::From500To1000);
        let mut state = FilterState::new();

        state.set_category("singer");
        assert!(Predicate::for_field(FilterField::Category, &state).matches(&a));

        state.set_category("Sing");
        assert!(!Predicate::for_field(FilterField::Category, &state).matches(&a));
    }

    #[test]
    fn category_matches_any_tag() {
        let a = artist(
            "A",
            &[Category::Singer, Category::Musician],
            "Paris",
            PriceRange::From500To1000,
        );
        let mut state = FilterState::new();
        state.set_category("Musician");
        assert!(Predicate::for_field(FilterField::Category, &state).matches(&a));
    }

    #[test]
    fn location_is_a_case_insensitive_substring() {
        let a = artist("A", &[Category::Singer], "Paris, France", PriceRange::From500To1000);
        let mut state = FilterState::new();

        state.set_location("paris");
        assert!(Predicate::for_field(FilterField::Location, &state).matches(&a));

        state.set_location("FRANCE");
        assert!(Predicate::for_field(FilterField::Location, &state).matches(&a));

        state.set_location("Berlin");
        assert!(!Predicate::for_field(FilterField::Location, &state).matches(&a));
    }

    #[test]
    fn location_does_not_look_at_names() {
        let a = artist("Paris Hilton", &[Category::Dj], "Los Angeles", PriceRange::Over5000);
        let mut state = FilterState::new();
        state.set_location("paris");
        assert!(!Predicate::for_field(FilterField::Location, &state).matches(&a));
    }

    #[test]
    fn search_looks_at_name_or_location() {
        let a = artist("Sarah Johnson", &[Category::Singer], "New York, NY", PriceRange::Over5000);
        let mut state = FilterState::new();

        state.set_search("sarah");
        assert!(Predicate::for_field(FilterField::Search, &state).matches(&a));

        state.set_search("new york");
        assert!(Predicate::for_field(FilterField::Search, &state).matches(&a));

        state.set_search("chicago");
        assert!(!Predicate::for_field(FilterField::Search, &state).matches(&a));
    }

    #[test]
    fn price_is_an_exact_label_match() {
        let a = artist("A", &[Category::Singer], "Paris", PriceRange::From1000To2500);
        let mut state = FilterState::new();

        state.set_price("$1000-2500");
        assert!(Predicate::for_field(FilterField::Price, &state).matches(&a));

        state.set_price("$500-1000");
        assert!(!Predicate::for_field(FilterField::Price, &state).matches(&a));

        // No numeric interpretation: 1500 lies inside the bracket but is not its label
        state.set_price("$1500");
        assert!(!Predicate::for_field(FilterField::Price, &state).matches(&a));
    }

    #[test]
    fn status_is_exact() {
        let b = booking("Gala", "A", BookingStatus::Pending);
        let mut state = FilterState::new();

        state.set_status("pending");
        assert!(Predicate::for_field(FilterField::Status, &state).matches(&b));

        state.set_status("Pending");
        assert!(!Predicate::for_field(FilterField::Status, &state).matches(&b));
    }

    #[test]
    fn only_applicable_non_open_predicates_are_active() {
        let mut state = FilterState::new();
        assert!(active_predicates::<ArtistRecord>(&state).is_empty());

        state.set_status("confirmed");
        assert!(active_predicates::<ArtistRecord>(&state).is_empty());
        assert_eq!(active_predicates::<BookingRequestRecord>(&state).len(), 1);

        state.set_category("DJ");
        state.set_location("berlin");
        assert_eq!(active_predicates::<ArtistRecord>(&state).len(), 2);
        assert_eq!(active_predicates::<BookingRequestRecord>(&state).len(), 1);
    }
}
