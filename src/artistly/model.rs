//! Core data types: the closed enumerations filters select from, the artist and
//! booking records, and the fixed set of navigable routes.

use crate::error::{ArtistlyError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed enumeration with stable display labels.
///
/// Every value a filter selector can name is one of `ALL`. Resolution is exact
/// by default; enumerations whose labels users type loosely override
/// [`Label::from_label`].
pub trait Label: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn as_label(&self) -> &'static str;

    fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_label() == raw)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Label::as_label).collect()
    }
}

macro_rules! label_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$ty as Label>::from_label(s).ok_or_else(|| format!("unknown {}: {}", $what, s))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Singer,
    Dancer,
    Speaker,
    #[serde(rename = "DJ")]
    Dj,
    Musician,
    Comedian,
    Magician,
}

impl Label for Category {
    const ALL: &'static [Self] = &[
        Category::Singer,
        Category::Dancer,
        Category::Speaker,
        Category::Dj,
        Category::Musician,
        Category::Comedian,
        Category::Magician,
    ];

    fn as_label(&self) -> &'static str {
        match self {
            Category::Singer => "Singer",
            Category::Dancer => "Dancer",
            Category::Speaker => "Speaker",
            Category::Dj => "DJ",
            Category::Musician => "Musician",
            Category::Comedian => "Comedian",
            Category::Magician => "Magician",
        }
    }

    // "singer" selects Singer
    fn from_label(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_label().eq_ignore_ascii_case(raw))
    }
}

label_traits!(Category, "category");

/// Fee brackets. These are opaque labels, not numeric ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$500-1000")]
    From500To1000,
    #[serde(rename = "$1000-2500")]
    From1000To2500,
    #[serde(rename = "$2500-5000")]
    From2500To5000,
    #[serde(rename = "$5000+")]
    Over5000,
}

impl Label for PriceRange {
    const ALL: &'static [Self] = &[
        PriceRange::From500To1000,
        PriceRange::From1000To2500,
        PriceRange::From2500To5000,
        PriceRange::Over5000,
    ];

    fn as_label(&self) -> &'static str {
        match self {
            PriceRange::From500To1000 => "$500-1000",
            PriceRange::From1000To2500 => "$1000-2500",
            PriceRange::From2500To5000 => "$2500-5000",
            PriceRange::Over5000 => "$5000+",
        }
    }
}

label_traits!(PriceRange, "price range");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Hindi,
    Mandarin,
}

impl Label for Language {
    const ALL: &'static [Self] = &[
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Hindi,
        Language::Mandarin,
    ];

    fn as_label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Hindi => "Hindi",
            Language::Mandarin => "Mandarin",
        }
    }

    fn from_label(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_label().eq_ignore_ascii_case(raw))
    }
}

label_traits!(Language, "language");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl Label for BookingStatus {
    const ALL: &'static [Self] = &[
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Rejected,
    ];

    fn as_label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Rejected => "rejected",
        }
    }
}

label_traits!(BookingStatus, "status");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Accept,
    Reject,
}

impl fmt::Display for BookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingAction::Accept => f.write_str("accept"),
            BookingAction::Reject => f.write_str("reject"),
        }
    }
}

impl BookingStatus {
    /// Confirmed and rejected requests take no further action.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    pub fn actions(&self) -> &'static [BookingAction] {
        match self {
            BookingStatus::Pending => &[BookingAction::Accept, BookingAction::Reject],
            BookingStatus::Confirmed | BookingStatus::Rejected => &[],
        }
    }

    pub fn apply(self, action: BookingAction) -> Result<BookingStatus> {
        match (self, action) {
            (BookingStatus::Pending, BookingAction::Accept) => Ok(BookingStatus::Confirmed),
            (BookingStatus::Pending, BookingAction::Reject) => Ok(BookingStatus::Rejected),
            (from, action) => Err(ArtistlyError::InvalidTransition { from, action }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl Label for ViewMode {
    const ALL: &'static [Self] = &[ViewMode::Grid, ViewMode::List];

    fn as_label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

label_traits!(ViewMode, "view mode");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
    pub bio: String,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub price_range: PriceRange,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ArtistRecord {
    /// The category shown on badges; records always carry at least one.
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestRecord {
    pub id: String,
    pub artist_id: String,
    pub artist_name: String,
    pub event_name: String,
    pub client_name: String,
    pub event_date: NaiveDate,
    pub budget: String,
    pub status: BookingStatus,
}

/// The pages the front-end can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Artists,
    Onboard,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Artists, Route::Onboard, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Artists => "/artists",
            Route::Onboard => "/onboard",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Artists => "Browse Artists",
            Route::Onboard => "Join as Artist",
            Route::Dashboard => "Dashboard",
        }
    }

    /// The CLI subcommand that renders this page.
    pub fn command(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Artists => "artists",
            Route::Onboard => "onboard",
            Route::Dashboard => "dashboard",
        }
    }
}

impl FromStr for Route {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Route::ALL
            .iter()
            .copied()
            .find(|r| r.path() == needle || r.command().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ArtistlyError::Api(format!("Unknown route: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_resolve_ignoring_case() {
        assert_eq!(Category::from_label("singer"), Some(Category::Singer));
        assert_eq!(Category::from_label("dj"), Some(Category::Dj));
        assert_eq!(Category::from_label("Juggler"), None);
        assert_eq!(Category::Dj.to_string(), "DJ");
    }

    #[test]
    fn price_ranges_only_match_exact_labels() {
        assert_eq!(
            PriceRange::from_label("$1000-2500"),
            Some(PriceRange::From1000To2500)
        );
        assert_eq!(PriceRange::from_label("1000-2500"), None);
        assert_eq!(PriceRange::from_label("$5000"), None);
    }

    #[test]
    fn status_labels_are_exact() {
        assert_eq!("pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert!("Pending".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn pending_bookings_can_be_accepted_or_rejected() {
        assert_eq!(
            BookingStatus::Pending.apply(BookingAction::Accept).unwrap(),
            BookingStatus::Confirmed
        );
        assert_eq!(
            BookingStatus::Pending.apply(BookingAction::Reject).unwrap(),
            BookingStatus::Rejected
        );
        assert_eq!(BookingStatus::Pending.actions().len(), 2);
    }

    #[test]
    fn terminal_bookings_reject_transitions() {
        for status in [BookingStatus::Confirmed, BookingStatus::Rejected] {
            assert!(status.is_terminal());
            assert!(status.actions().is_empty());
            let err = status.apply(BookingAction::Accept).unwrap_err();
            assert!(matches!(err, ArtistlyError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn records_deserialize_from_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Sarah Johnson",
            "categories": ["Singer", "Musician"],
            "bio": "Jazz vocalist",
            "location": "New York, NY",
            "rating": 4.9,
            "reviews": 127,
            "priceRange": "$2500-5000"
        }"#;
        let artist: ArtistRecord = serde_json::from_str(json).unwrap();
        assert_eq!(artist.price_range, PriceRange::From2500To5000);
        assert_eq!(artist.primary_category(), Some(Category::Singer));
        assert!(artist.image.is_none());
    }

    #[test]
    fn unknown_category_in_data_is_a_load_error() {
        let json = r#"["Juggler"]"#;
        assert!(serde_json::from_str::<Vec<Category>>(json).is_err());
    }

    #[test]
    fn routes_resolve_by_path_or_name() {
        assert_eq!("/artists".parse::<Route>().unwrap(), Route::Artists);
        assert_eq!("dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert!("/admin".parse::<Route>().is_err());
    }
}
