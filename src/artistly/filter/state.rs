use super::selector::Selector;
use crate::model::{BookingStatus, Category, PriceRange, ViewMode};
use serde::Serialize;

/// The current filter selections of one view.
///
/// Created with defaults when a page is built, changed only through the
/// setters, and reset by [`FilterState::clear`]. It is handed to the evaluator
/// by reference and never stored alongside the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub category: Selector<Category>,
    /// Listing filter: substring of the artist's location.
    pub location: String,
    /// Dashboard search: substring of the artist's name or location.
    pub search: String,
    pub price: Selector<PriceRange>,
    pub status: Selector<BookingStatus>,
    pub view: ViewMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn set_category(&mut self, raw: &str) {
        self.category = Selector::parse(raw);
    }

    pub fn set_location(&mut self, text: impl Into<String>) {
        self.location = text.into();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_price(&mut self, raw: &str) {
        self.price = Selector::parse(raw);
    }

    pub fn set_status(&mut self, raw: &str) {
        self.status = Selector::parse(raw);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Resets every filter field. The display mode is a layout preference,
    /// not a filter, and survives.
    pub fn clear(&mut self) {
        *self = Self {
            view: self.view,
            ..Self::default()
        };
    }

    pub fn is_default(&self) -> bool {
        self.category.is_all()
            && self.location.is_empty()
            && self.search.is_empty()
            && self.price.is_all()
            && self.status.is_all()
    }
}
