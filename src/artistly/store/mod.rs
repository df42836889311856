//! # Record Store
//!
//! Artists and booking requests are read once, validated, and then only ever
//! borrowed. Nothing in the crate mutates a [`RecordStore`] after it is built.
//!
//! Where the records come from is abstracted behind [`RecordSource`]:
//!
//! - [`mock::BundledSource`]: the demo dataset compiled into the binary
//! - [`fs::FileSource`]: a JSON file with the same layout
//! - [`memory::InMemorySource`]: records built in code, for tests
//!
//! ## File Layout
//!
//! ```text
//! {
//!   "artists":  [ { "id": "1", "name": "...", "categories": ["Singer"], ... } ],
//!   "bookings": [ { "id": "1", "artistId": "1", "status": "pending", ... } ]
//! }
//! ```

use crate::error::{ArtistlyError, Result};
use crate::model::{ArtistRecord, BookingRequestRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod fs;
pub mod memory;
pub mod mock;

/// The serialized shape shared by every source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub artists: Vec<ArtistRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRequestRecord>,
}

/// The immutable filtering universe.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    artists: Vec<ArtistRecord>,
    bookings: Vec<BookingRequestRecord>,
}

impl RecordStore {
    /// Checks the record invariants and freezes the set.
    pub fn new(set: RecordSet) -> Result<Self> {
        let mut seen = HashSet::new();
        for artist in &set.artists {
            if !seen.insert(artist.id.as_str()) {
                return Err(ArtistlyError::Store(format!(
                    "Duplicate artist id: {}",
                    artist.id
                )));
            }
            if !(0.0..=5.0).contains(&artist.rating) {
                return Err(ArtistlyError::Store(format!(
                    "Artist {} has rating {} outside 0-5",
                    artist.id, artist.rating
                )));
            }
            if artist.categories.is_empty() {
                return Err(ArtistlyError::Store(format!(
                    "Artist {} has no category",
                    artist.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for booking in &set.bookings {
            if !seen.insert(booking.id.as_str()) {
                return Err(ArtistlyError::Store(format!(
                    "Duplicate booking id: {}",
                    booking.id
                )));
            }
        }

        Ok(Self {
            artists: set.artists,
            bookings: set.bookings,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let set: RecordSet = serde_json::from_str(json)?;
        Self::new(set)
    }

    pub fn artists(&self) -> &[ArtistRecord] {
        &self.artists
    }

    pub fn bookings(&self) -> &[BookingRequestRecord] {
        &self.bookings
    }
}

/// Supplies the records a session filters over.
pub trait RecordSource {
    fn load(&self) -> Result<RecordStore>;

    /// A short description for logs and `config` output.
    fn describe(&self) -> String;
}
