use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::Result;
use crate::filter::{FilterState, FilteredView, Selector};
use crate::model::{ArtistRecord, Category, PriceRange, ViewMode};
use crate::present::ArtistCard;
use crate::store::RecordStore;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No artists found matching your criteria.";

/// Choices offered by the listing's drop-downs.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<&'static str>,
    pub prices: Vec<&'static str>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: Selector::<Category>::options(),
            prices: Selector::<PriceRange>::options(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistsPage {
    pub cards: Vec<ArtistCard>,
    pub shown: usize,
    pub total: usize,
    pub summary: String,
    pub empty: bool,
    pub view: ViewMode,
    pub filters: FilterState,
    pub options: FilterOptions,
}

pub fn run(store: &RecordStore, state: &FilterState) -> Result<CmdResult> {
    let view: FilteredView<'_, ArtistRecord> = FilteredView::new(store.artists(), state);

    let mut result = CmdResult::default();
    if let Selector::Unknown(raw) = &state.category {
        result.add_message(CmdMessage::warning(format!(
            "Unknown category: {} (matches no artist)",
            raw
        )));
    }
    if let Selector::Unknown(raw) = &state.price {
        result.add_message(CmdMessage::warning(format!(
            "Unknown price range: {} (matches no artist)",
            raw
        )));
    }
    if view.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    }

    let page = ArtistsPage {
        cards: view
            .records
            .iter()
            .map(|artist| ArtistCard::from_record(artist, state.view))
            .collect(),
        shown: view.len(),
        total: view.total,
        summary: view.summary("artists"),
        empty: view.is_empty(),
        view: state.view,
        filters: state.clone(),
        options: FilterOptions::default(),
    };

    Ok(result.with_page(Page::Artists(page)))
}
