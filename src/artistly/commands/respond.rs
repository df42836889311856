//! Accept or reject a booking request from the dashboard.
//!
//! Records are read-only, so this reports the status the request would move to
//! without writing it back.

use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::{ArtistlyError, Result};
use crate::model::{BookingAction, BookingStatus};
use crate::present::BookingRow;
use crate::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RespondPage {
    pub booking: BookingRow,
    pub action: BookingAction,
    pub from: BookingStatus,
    pub to: BookingStatus,
}

pub fn run(store: &RecordStore, booking_id: &str, action: BookingAction) -> Result<CmdResult> {
    let booking = store
        .bookings()
        .iter()
        .find(|b| b.id == booking_id)
        .ok_or_else(|| ArtistlyError::Api(format!("Booking not found: {}", booking_id)))?;

    let to = booking.status.apply(action)?;
    tracing::debug!(id = booking_id, from = %booking.status, to = %to, "booking transition");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} for {}: {} -> {}",
        booking.event_name, booking.artist_name, booking.status, to
    )));
    result.add_message(CmdMessage::info("Records are read-only; nothing was saved."));

    Ok(result.with_page(Page::Respond(RespondPage {
        booking: BookingRow::from_record(booking),
        action,
        from: booking.status,
        to,
    })))
}
