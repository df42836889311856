//! # Presentation Adapter
//!
//! Turns surviving records into render-ready shapes. Everything here is a pure
//! function of one record (plus the view mode for artist cards): fields are
//! selected and labelled, layout hints are attached, and nothing is filtered or
//! reordered. The shapes are `Serialize` so any front-end (terminal templates,
//! JSON output) can consume them.

use crate::model::{
    ArtistRecord, BookingAction, BookingRequestRecord, BookingStatus, Category, Label, ViewMode,
};
use serde::Serialize;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const QUOTE_CTA: &str = "Ask for Quote";

const GRID_BIO_CHARS: usize = 120;
const LIST_BIO_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Full card width banner.
    Banner,
    /// Small square beside the text.
    Thumbnail,
}

impl ImageSize {
    /// Tailwind sizing classes for web front-ends.
    pub fn class(&self) -> &'static str {
        match self {
            ImageSize::Banner => "w-full h-48",
            ImageSize::Thumbnail => "w-24 h-24",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistCard {
    pub id: String,
    pub name: String,
    pub badge: String,
    pub categories: Vec<&'static str>,
    pub rating: String,
    pub reviews: u32,
    pub location: String,
    pub price_range: &'static str,
    pub bio: String,
    pub image: String,
    pub image_size: ImageSize,
    pub image_class: &'static str,
    pub view: ViewMode,
    pub cta: &'static str,
}

impl ArtistCard {
    pub fn from_record(artist: &ArtistRecord, view: ViewMode) -> Self {
        let (bio_chars, image_size) = match view {
            ViewMode::Grid => (GRID_BIO_CHARS, ImageSize::Banner),
            ViewMode::List => (LIST_BIO_CHARS, ImageSize::Thumbnail),
        };

        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            badge: badge_label(artist),
            categories: artist.categories.iter().map(Label::as_label).collect(),
            rating: format_rating(artist.rating),
            reviews: artist.reviews,
            location: artist.location.clone(),
            price_range: artist.price_range.as_label(),
            bio: excerpt(&artist.bio, bio_chars),
            image: image_or_placeholder(artist.image.as_deref()),
            image_size,
            image_class: image_size.class(),
            view,
            cta: QUOTE_CTA,
        }
    }
}

/// Buttons offered on a table row, serialized as their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Accept,
    Reject,
}

impl From<BookingAction> for RowAction {
    fn from(action: BookingAction) -> Self {
        match action {
            BookingAction::Accept => RowAction::Accept,
            BookingAction::Reject => RowAction::Reject,
        }
    }
}

/// A row in the dashboard's managed-artists table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedArtistRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub location: String,
    pub fee_range: &'static str,
    pub rating: String,
    pub image: String,
    pub actions: Vec<RowAction>,
}

impl ManagedArtistRow {
    pub fn from_record(artist: &ArtistRecord) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            email: artist.email.clone().unwrap_or_default(),
            category: badge_label(artist),
            location: artist.location.clone(),
            fee_range: artist.price_range.as_label(),
            rating: format_rating(artist.rating),
            image: image_or_placeholder(artist.image.as_deref()),
            actions: vec![RowAction::View, RowAction::Edit, RowAction::Delete],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl From<BookingStatus> for BadgeVariant {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed => BadgeVariant::Default,
            BookingStatus::Pending => BadgeVariant::Secondary,
            BookingStatus::Rejected => BadgeVariant::Destructive,
        }
    }
}

/// A row in the dashboard's booking-requests table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRow {
    pub id: String,
    pub event: String,
    pub client: String,
    pub artist: String,
    pub date: String,
    pub budget: String,
    pub status: BookingStatus,
    pub badge: BadgeVariant,
    pub actions: Vec<RowAction>,
}

impl BookingRow {
    pub fn from_record(booking: &BookingRequestRecord) -> Self {
        let actions = if booking.status.is_terminal() {
            vec![RowAction::View]
        } else {
            booking.status.actions().iter().copied().map(RowAction::from).collect()
        };

        Self {
            id: booking.id.clone(),
            event: booking.event_name.clone(),
            client: booking.client_name.clone(),
            artist: booking.artist_name.clone(),
            date: booking.event_date.format("%Y-%m-%d").to_string(),
            budget: booking.budget.clone(),
            status: booking.status,
            badge: BadgeVariant::from(booking.status),
            actions,
        }
    }
}

/// A landing-page category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub count: &'static str,
}

/// Categories featured on the landing page, in display order.
pub const FEATURED_CATEGORIES: [Category; 4] = [
    Category::Singer,
    Category::Dancer,
    Category::Speaker,
    Category::Dj,
];

impl CategoryTile {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Singer => CategoryTile {
                id: "singers",
                name: "Singers",
                description: "Vocal artists for all genres and events",
                icon: "🎤",
                color: "pink",
                count: "150+ Artists",
            },
            Category::Dancer => CategoryTile {
                id: "dancers",
                name: "Dancers",
                description: "Professional dancers and choreographers",
                icon: "💃",
                color: "purple",
                count: "120+ Artists",
            },
            Category::Speaker => CategoryTile {
                id: "speakers",
                name: "Speakers",
                description: "Motivational and keynote speakers",
                icon: "🗣",
                color: "green",
                count: "80+ Artists",
            },
            Category::Dj => CategoryTile {
                id: "djs",
                name: "DJs",
                description: "Professional DJs for all occasions",
                icon: "🎧",
                color: "blue",
                count: "100+ Artists",
            },
            Category::Musician => CategoryTile {
                id: "musicians",
                name: "Musicians",
                description: "Bands, ensembles and solo instrumentalists",
                icon: "🎻",
                color: "yellow",
                count: "90+ Artists",
            },
            Category::Comedian => CategoryTile {
                id: "comedians",
                name: "Comedians",
                description: "Stand-up comics and event hosts",
                icon: "🎭",
                color: "orange",
                count: "40+ Artists",
            },
            Category::Magician => CategoryTile {
                id: "magicians",
                name: "Magicians",
                description: "Close-up and stage illusionists",
                icon: "🎩",
                color: "red",
                count: "30+ Artists",
            },
        }
    }

    pub fn featured() -> Vec<CategoryTile> {
        FEATURED_CATEGORIES
            .iter()
            .copied()
            .map(CategoryTile::for_category)
            .collect()
    }
}

fn badge_label(artist: &ArtistRecord) -> String {
    artist
        .primary_category()
        .map(|c| c.as_label().to_string())
        .unwrap_or_default()
}

fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

fn image_or_placeholder(image: Option<&str>) -> String {
    match image {
        Some(src) if !src.is_empty() => src.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Cuts `text` to at most `max_chars` characters, ending on a word boundary
/// when one is close by.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) if pos > cut.len() / 2 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches([',', '.', ';', ' ']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceRange;
    use crate::store::memory::fixtures::{artist, booking};

    #[test]
    fn grid_and_list_cards_differ_only_in_layout() {
        let mut a = artist("A", &[Category::Singer], "Paris", PriceRange::From500To1000);
        a.bio = "word ".repeat(60);

        let grid = ArtistCard::from_record(&a, ViewMode::Grid);
        let list = ArtistCard::from_record(&a, ViewMode::List);

        assert_eq!(grid.image_size, ImageSize::Banner);
        assert_eq!(list.image_size, ImageSize::Thumbnail);
        assert_eq!(grid.image_class, "w-full h-48");
        assert_eq!(list.image_class, "w-24 h-24");
        assert!(grid.bio.chars().count() <= GRID_BIO_CHARS);
        assert!(list.bio.chars().count() <= LIST_BIO_CHARS);
        assert!(grid.bio.ends_with('…'));
        assert_eq!(grid.name, list.name);
        assert_eq!(grid.price_range, "$500-1000");
        assert_eq!(grid.cta, "Ask for Quote");
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let a = artist("A", &[Category::Dj], "Berlin", PriceRange::Over5000);
        let card = ArtistCard::from_record(&a, ViewMode::Grid);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn badge_is_the_first_category() {
        let a = artist(
            "A",
            &[Category::Magician, Category::Comedian],
            "Paris",
            PriceRange::From500To1000,
        );
        let card = ArtistCard::from_record(&a, ViewMode::List);
        assert_eq!(card.badge, "Magician");
        assert_eq!(card.categories, vec!["Magician", "Comedian"]);
    }

    #[test]
    fn short_bio_is_untouched() {
        assert_eq!(excerpt("Short bio.", 120), "Short bio.");
    }

    #[test]
    fn pending_booking_offers_accept_and_reject() {
        let row = BookingRow::from_record(&booking("Gala", "A", BookingStatus::Pending));
        assert_eq!(row.actions, vec![RowAction::Accept, RowAction::Reject]);
        assert_eq!(row.badge, BadgeVariant::Secondary);
    }

    #[test]
    fn settled_bookings_only_offer_view() {
        let confirmed = BookingRow::from_record(&booking("Gala", "A", BookingStatus::Confirmed));
        let rejected = BookingRow::from_record(&booking("Fair", "A", BookingStatus::Rejected));
        assert_eq!(confirmed.actions, vec![RowAction::View]);
        assert_eq!(confirmed.badge, BadgeVariant::Default);
        assert_eq!(rejected.actions, vec![RowAction::View]);
        assert_eq!(rejected.badge, BadgeVariant::Destructive);
        assert_eq!(confirmed.date, "2025-06-14");
    }

    #[test]
    fn managed_row_carries_contact_and_actions() {
        let a = artist("Nina Berg", &[Category::Dj], "Berlin", PriceRange::From1000To2500);
        let row = ManagedArtistRow::from_record(&a);
        assert_eq!(row.email, "nina-berg@example.com");
        assert_eq!(row.rating, "4.5");
        assert_eq!(row.actions.len(), 3);
        let json = serde_json::to_value(&row.actions).unwrap();
        assert_eq!(json, serde_json::json!(["View", "Edit", "Delete"]));
    }

    #[test]
    fn category_tiles_cover_every_category() {
        for category in Category::ALL {
            let tile = CategoryTile::for_category(*category);
            assert!(!tile.name.is_empty());
        }
        let featured: Vec<_> = CategoryTile::featured().iter().map(|t| t.id).collect();
        assert_eq!(featured, vec!["singers", "dancers", "speakers", "djs"]);
    }
}
