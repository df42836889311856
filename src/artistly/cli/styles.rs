//! Styles for the Artistly CLI.
//!
//! Templates only ever name semantic styles (`heading`, `badge`, `status-pending`);
//! which colours those map to is decided here, once, in [`ARTISTLY_THEME`].
//! A name the theme does not know is rendered with a `(!?)` prefix so template
//! typos are visible.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers used by templates and by message rendering.
pub mod names {
    pub const BRAND: &str = "brand";
    pub const HEADING: &str = "heading";
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const BADGE: &str = "badge";
    pub const RATING: &str = "rating";
    pub const PRICE: &str = "price";
    pub const CTA: &str = "cta";
    pub const ACTION: &str = "action";
    pub const STAT: &str = "stat";
    pub const STATUS_PENDING: &str = "status-pending";
    pub const STATUS_CONFIRMED: &str = "status-confirmed";
    pub const STATUS_REJECTED: &str = "status-rejected";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// `text` in the named style, or bare when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("(!?) {}", text),
        }
    }
}

// ANSI-256 palette indices
const BLUE: u8 = 26;
const GREY: u8 = 244;
const DARK_GREY: u8 = 240;
const GREEN: u8 = 34;
const AMBER: u8 = 172;
const RED: u8 = 160;

pub static ARTISTLY_THEME: Lazy<Theme> = Lazy::new(|| {
    let blue = Style::new().color256(BLUE);
    let muted = Style::new().color256(GREY);
    let green = Style::new().color256(GREEN);
    let amber = Style::new().color256(AMBER);
    let red = Style::new().color256(RED);

    Theme::new()
        .add(names::BRAND, blue.clone().bold())
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::TITLE, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(DARK_GREY))
        .add(names::BADGE, blue.clone().reverse())
        .add(names::RATING, amber.clone())
        .add(names::PRICE, green.clone())
        .add(names::CTA, blue.clone().bold())
        .add(names::ACTION, muted.italic())
        .add(names::STAT, blue.bold())
        .add(names::STATUS_PENDING, amber.clone())
        .add(names::STATUS_CONFIRMED, green.clone())
        .add(names::STATUS_REJECTED, red.clone())
        .add(names::INFO, Style::new().cyan())
        .add(names::SUCCESS, green.bold())
        .add(names::WARNING, amber.bold())
        .add(names::ERROR, red.bold())
});
