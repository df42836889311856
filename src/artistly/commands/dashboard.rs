//! The manager dashboard: headline stats, the managed-artists table filtered by
//! search and category, and the booking-requests table filtered by status.
//!
//! Stats always describe the whole store; only the tables follow the filters.

use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::Result;
use crate::filter::{FilterState, FilteredView, Selector};
use crate::model::{ArtistRecord, BookingRequestRecord, BookingStatus};
use crate::present::{BookingRow, ManagedArtistRow};
use crate::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Table<T> {
    pub rows: Vec<T>,
    pub summary: String,
    pub empty: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub stats: Vec<Stat>,
    pub artists: Table<ManagedArtistRow>,
    pub bookings: Table<BookingRow>,
    pub filters: FilterState,
    pub status_options: Vec<&'static str>,
}

pub fn stats(store: &RecordStore) -> Vec<Stat> {
    let count = |status: BookingStatus| {
        store
            .bookings()
            .iter()
            .filter(|b| b.status == status)
            .count()
    };

    vec![
        Stat {
            title: "Total Artists",
            value: store.artists().len().to_string(),
        },
        Stat {
            title: "Active Bookings",
            value: count(BookingStatus::Confirmed).to_string(),
        },
        Stat {
            title: "Pending Requests",
            value: count(BookingStatus::Pending).to_string(),
        },
        Stat {
            title: "Average Rating",
            value: average_rating(store.artists()),
        },
    ]
}

fn average_rating(artists: &[ArtistRecord]) -> String {
    if artists.is_empty() {
        return "0.0".to_string();
    }
    let sum: f64 = artists.iter().map(|a| f64::from(a.rating)).sum();
    format!("{:.1}", sum / artists.len() as f64)
}

pub fn run(store: &RecordStore, state: &FilterState) -> Result<CmdResult> {
    let artists: FilteredView<'_, ArtistRecord> = FilteredView::new(store.artists(), state);
    let bookings: FilteredView<'_, BookingRequestRecord> =
        FilteredView::new(store.bookings(), state);

    let mut result = CmdResult::default();
    if let Selector::Unknown(raw) = &state.category {
        result.add_message(CmdMessage::warning(format!(
            "Unknown category: {} (matches no artist)",
            raw
        )));
    }
    if let Selector::Unknown(raw) = &state.status {
        result.add_message(CmdMessage::warning(format!(
            "Unknown status: {} (matches no booking)",
            raw
        )));
    }

    let page = DashboardPage {
        stats: stats(store),
        artists: Table {
            rows: artists
                .records
                .iter()
                .map(|a| ManagedArtistRow::from_record(a))
                .collect(),
            summary: artists.summary("artists"),
            empty: artists.is_empty(),
        },
        bookings: Table {
            rows: bookings
                .records
                .iter()
                .map(|b| BookingRow::from_record(b))
                .collect(),
            summary: bookings.summary("booking requests"),
            empty: bookings.is_empty(),
        },
        filters: state.clone(),
        status_options: Selector::<BookingStatus>::options(),
    };

    Ok(result.with_page(Page::Dashboard(page)))
}
