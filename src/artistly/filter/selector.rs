use crate::model::Label;
use serde::{Serialize, Serializer};
use std::fmt;

/// The selector value meaning "do not filter on this field".
pub const ALL: &str = "all";

/// One drop-down filter field.
///
/// Selectors are parsed from whatever the UI hands over. A value outside the
/// enumeration is kept as `Unknown` rather than rejected: it simply matches no
/// record, so stale or mistyped state shows an empty result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Is(T),
    Unknown(String),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Label> Selector<T> {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(ALL) {
            return Selector::All;
        }
        match T::from_label(raw) {
            Some(value) => Selector::Is(value),
            None => Selector::Unknown(raw.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Tests a single record value against the selector.
    pub fn accepts(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Is(selected) => *selected == value,
            Selector::Unknown(_) => false,
        }
    }

    /// Tests a multi-valued field: passes if any value is selected.
    pub fn accepts_any(&self, values: &[T]) -> bool {
        match self {
            Selector::All => true,
            Selector::Is(_) => values.iter().any(|v| self.accepts(*v)),
            Selector::Unknown(_) => false,
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Is(value) => value.as_label(),
            Selector::Unknown(raw) => raw,
        }
    }

    /// Options for a drop-down: "all" followed by every enumeration label.
    pub fn options() -> Vec<&'static str> {
        std::iter::once(ALL).chain(T::labels()).collect()
    }
}

impl<T: Label> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl<T: Label> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, Category, PriceRange};

    #[test]
    fn all_is_case_insensitive() {
        assert!(Selector::<Category>::parse("all").is_all());
        assert!(Selector::<Category>::parse("ALL").is_all());
        assert!(Selector::<PriceRange>::parse("All").is_all());
    }

    #[test]
    fn known_values_parse_per_enumeration_rules() {
        assert_eq!(
            Selector::<Category>::parse("singer"),
            Selector::Is(Category::Singer)
        );
        assert_eq!(
            Selector::<BookingStatus>::parse("confirmed"),
            Selector::Is(BookingStatus::Confirmed)
        );
    }

    #[test]
    fn unknown_values_are_retained_and_never_match() {
        let sel = Selector::<PriceRange>::parse("$1-2");
        assert_eq!(sel, Selector::Unknown("$1-2".into()));
        for range in PriceRange::ALL {
            assert!(!sel.accepts(*range));
        }
        assert_eq!(sel.to_string(), "$1-2");
    }

    #[test]
    fn accepts_any_checks_every_tag() {
        let sel = Selector::Is(Category::Dj);
        assert!(sel.accepts_any(&[Category::Singer, Category::Dj]));
        assert!(!sel.accepts_any(&[Category::Singer]));
        assert!(!sel.accepts_any(&[]));
        assert!(Selector::<Category>::All.accepts_any(&[]));
    }

    #[test]
    fn options_lead_with_all() {
        let opts = Selector::<PriceRange>::options();
        assert_eq!(opts, vec!["all", "$500-1000", "$1000-2500", "$2500-5000", "$5000+"]);
    }
}
