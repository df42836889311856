use super::{RecordSet, RecordSource, RecordStore};
use crate::error::Result;
use crate::model::{ArtistRecord, BookingRequestRecord};

/// Records built in code. Used by tests and by callers that already hold data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    set: RecordSet,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artist(mut self, artist: ArtistRecord) -> Self {
        self.set.artists.push(artist);
        self
    }

    pub fn with_booking(mut self, booking: BookingRequestRecord) -> Self {
        self.set.bookings.push(booking);
        self
    }
}

impl From<RecordSet> for InMemorySource {
    fn from(set: RecordSet) -> Self {
        Self { set }
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<RecordStore> {
        RecordStore::new(self.set.clone())
    }

    fn describe(&self) -> String {
        format!(
            "in-memory ({} artists, {} bookings)",
            self.set.artists.len(),
            self.set.bookings.len()
        )
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{
        ArtistRecord, BookingRequestRecord, BookingStatus, Category, PriceRange,
    };
    use chrono::NaiveDate;

    fn slug(text: &str) -> String {
        text.to_lowercase().replace(' ', "-")
    }

    pub fn artist(
        name: &str,
        categories: &[Category],
        location: &str,
        price_range: PriceRange,
    ) -> ArtistRecord {
        ArtistRecord {
            id: slug(name),
            name: name.to_string(),
            categories: categories.to_vec(),
            bio: format!("{} performs at events of every size.", name),
            location: location.to_string(),
            rating: 4.5,
            reviews: 10,
            price_range,
            image: None,
            email: Some(format!("{}@example.com", slug(name))),
        }
    }

    pub fn booking(event: &str, artist_name: &str, status: BookingStatus) -> BookingRequestRecord {
        BookingRequestRecord {
            id: slug(event),
            artist_id: slug(artist_name),
            artist_name: artist_name.to_string(),
            event_name: event.to_string(),
            client_name: format!("{} Client", event),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap_or_default(),
            budget: "$2,000".to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{artist, booking};
    use super::*;
    use crate::model::{BookingStatus, Category, PriceRange};

    #[test]
    fn loads_what_was_added() {
        let source = InMemorySource::new()
            .with_artist(artist("A", &[Category::Singer], "Paris", PriceRange::From500To1000))
            .with_booking(booking("Gala", "A", BookingStatus::Pending));

        let store = source.load().unwrap();
        assert_eq!(store.artists().len(), 1);
        assert_eq!(store.bookings().len(), 1);
        assert_eq!(source.describe(), "in-memory (1 artists, 1 bookings)");
    }

    #[test]
    fn load_validates() {
        let a = artist("A", &[Category::Singer], "Paris", PriceRange::From500To1000);
        let source = InMemorySource::new().with_artist(a.clone()).with_artist(a);
        assert!(source.load().is_err());
    }
}
