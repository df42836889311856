//! # Rendering
//!
//! Turns pages and messages into terminal text through the templates in
//! [`super::templates`], or into JSON for `--json`.
//!
//! Two filters are registered on the template environment:
//! - `style(name)`: applies a named style from the theme, or passes the text
//!   through untouched when colour is off
//! - `fit(width)`: truncates with `…` and pads to an exact display width,
//!   counting wide characters correctly

use super::styles::{names, Theme};
use super::templates;
use artistly::api::{CmdMessage, MessageLevel, Page};
use artistly::commands::artists::ArtistsPage;
use artistly::commands::dashboard::DashboardPage;
use artistly::config::ArtistlyConfig;
use artistly::error::{ArtistlyError, Result};
use artistly::filter::FilterState;
use console::Term;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_HINT: &str = "Run with --clear or drop some filters to see every artist.";
pub const ROSTER_HINT: &str = "Drop --search or --category to see every managed artist.";
pub const BOOKINGS_HINT: &str = "Drop --status to see every booking request.";

/// Whether stdout is a terminal that understands colour.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// A template environment with every CLI template registered.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn with_color(theme: Theme, use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_filters(&mut env, theme, use_color);

        for (name, source) in templates::ALL {
            env.add_template(name, source).map_err(render_error)?;
        }
        Ok(Self { env })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(render_error)?;
        tmpl.render(data).map_err(render_error)
    }
}

fn render_error(e: minijinja::Error) -> ArtistlyError {
    ArtistlyError::Render(e.to_string())
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_filter("fit", |value: Value, width: usize| -> String {
        fit(&value.to_string(), width)
    });
}

#[derive(Serialize)]
struct ArtistsView<'a> {
    #[serde(flatten)]
    page: &'a ArtistsPage,
    active: String,
    hint: &'static str,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    #[serde(flatten)]
    page: &'a DashboardPage,
    roster_hint: &'static str,
    bookings_hint: &'static str,
}

pub fn render_page(renderer: &Renderer, page: &Page) -> Result<String> {
    match page {
        Page::Home(home) => renderer.render("home.jinja", home),
        Page::Artists(artists) => renderer.render(
            "artists.jinja",
            &ArtistsView {
                page: artists,
                active: describe_filters(&artists.filters),
                hint: EMPTY_HINT,
            },
        ),
        Page::Dashboard(dashboard) => renderer.render(
            "dashboard.jinja",
            &DashboardView {
                page: dashboard,
                roster_hint: ROSTER_HINT,
                bookings_hint: BOOKINGS_HINT,
            },
        ),
        Page::Onboard(onboard) => renderer.render("onboard.jinja", onboard),
        Page::Routes(routes) => renderer.render("routes.jinja", routes),
        Page::Respond(respond) => renderer.render("respond.jinja", respond),
    }
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

pub fn render_messages(renderer: &Renderer, messages: &[CmdMessage]) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }

    let messages = messages
        .iter()
        .map(|msg| MessageData {
            content: &msg.content,
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();
    renderer.render("messages.jinja", &MessagesData { messages })
}

#[derive(Serialize)]
struct ConfigItem {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    items: Vec<ConfigItem>,
    source: String,
}

pub fn render_config(renderer: &Renderer, config: &ArtistlyConfig, source: &str) -> Result<String> {
    let items = config
        .list_all()
        .into_iter()
        .map(|(key, value)| ConfigItem { key, value })
        .collect();
    renderer.render(
        "config.jinja",
        &ConfigData {
            items,
            source: source.to_string(),
        },
    )
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    page: Option<&'a Page>,
    messages: &'a [CmdMessage],
}

pub fn render_json(page: Option<&Page>, messages: &[CmdMessage]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&JsonOutput { page, messages })?;
    out.push('\n');
    Ok(out)
}

/// The non-default filters as `key=value` pairs, or an empty string.
pub fn describe_filters(state: &FilterState) -> String {
    if state.is_default() {
        return String::new();
    }

    let mut parts = Vec::new();
    if !state.category.is_all() {
        parts.push(format!("category={}", state.category));
    }
    if !state.location.is_empty() {
        parts.push(format!("location={}", state.location));
    }
    if !state.search.is_empty() {
        parts.push(format!("search={}", state.search));
    }
    if !state.price.is_all() {
        parts.push(format!("price={}", state.price));
    }
    if !state.status.is_all() {
        parts.push(format!("status={}", state.status));
    }
    parts.join(" ")
}

/// Truncates and pads `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize) -> String {
    let shown = truncate_to_width(text, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::styles::ARTISTLY_THEME;
    use artistly::commands;
    use artistly::model::ViewMode;
    use artistly::store::mock::BundledSource;
    use artistly::store::{RecordSource, RecordStore};

    fn plain() -> Renderer {
        Renderer::with_color(ARTISTLY_THEME.clone(), false).unwrap()
    }

    fn store() -> RecordStore {
        BundledSource.load().unwrap()
    }

    fn page_of(result: commands::CmdResult) -> Page {
        result.page.unwrap()
    }

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        let out = fit("Dr. James Wilson", 8);
        assert_eq!(out, "Dr. Jam…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn test_fit_counts_wide_characters() {
        let out = fit("東京都の会場", 7);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 7);
    }

    #[test]
    fn test_render_home() {
        let output = render_page(&plain(), &page_of(commands::home::run().unwrap())).unwrap();
        assert!(output.contains("Browse by Category"));
        assert!(output.contains("Singers"));
        assert!(output.contains("150+ Artists"));
        assert!(output.contains("Quality Assured"));
        assert!(output.contains("Join thousands of event planners"));
        assert!(output.contains("Browse Artists · Join as Artist"));
    }

    #[test]
    fn test_render_artists_grid() {
        let result = commands::artists::run(&store(), &FilterState::new()).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(output.contains("Showing 8 of 8 artists"));
        assert!(output.contains("┌ Sarah Johnson"));
        assert!(output.contains("[Ask for Quote]"));
        assert!(!output.contains("Filters:"));
    }

    #[test]
    fn test_render_artists_list_with_filters() {
        let mut state = FilterState::new().with_view(ViewMode::List);
        state.set_category("dj");
        let result = commands::artists::run(&store(), &state).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(output.contains("Filters: category=DJ"));
        assert!(output.contains("DJ Marcus"));
        assert!(!output.contains("┌"));
    }

    #[test]
    fn test_render_artists_empty_shows_hint() {
        let mut state = FilterState::new();
        state.set_location("Atlantis");
        let result = commands::artists::run(&store(), &state).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(output.contains("Showing 0 of 8 artists"));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn test_render_dashboard() {
        let result = commands::dashboard::run(&store(), &FilterState::new()).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(output.contains("Total Artists"));
        assert!(output.contains("Managed Artists"));
        assert!(output.contains("Booking Requests"));
        assert!(output.contains("View Edit Delete"));
        assert!(output.contains("Accept Reject"));
    }

    #[test]
    fn test_render_dashboard_empty_tables_offer_reset() {
        let mut state = FilterState::new();
        state.set_search("Atlantis");
        state.set_status("cancelled");
        let result = commands::dashboard::run(&store(), &state).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(output.contains("No artists match the current search."));
        assert!(output.contains(ROSTER_HINT));
        assert!(output.contains("No booking requests with this status."));
        assert!(output.contains(BOOKINGS_HINT));
    }

    #[test]
    fn test_render_dashboard_full_tables_have_no_hint() {
        let result = commands::dashboard::run(&store(), &FilterState::new()).unwrap();
        let output = render_page(&plain(), &page_of(result)).unwrap();
        assert!(!output.contains(ROSTER_HINT));
        assert!(!output.contains(BOOKINGS_HINT));
    }

    #[test]
    fn test_render_routes() {
        let output = render_page(&plain(), &page_of(commands::routes::run().unwrap())).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].contains("/dashboard"));
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&plain(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_render_messages_one_per_line() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
            CmdMessage::error("Error message"),
        ];
        let output = render_messages(&plain(), &messages).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec!["Info message", "Warning message", "Error message"]
        );
    }

    #[test]
    fn test_render_with_color_styles_text() {
        let theme = Theme::new().add(names::ERROR, console::Style::new().red().force_styling(true));
        let renderer = Renderer::with_color(theme, true).unwrap();
        let output = render_messages(&renderer, &[CmdMessage::error("boom")]).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains("boom"));
    }

    #[test]
    fn test_render_config() {
        let output = render_config(&plain(), &ArtistlyConfig::default(), "bundled demo data").unwrap();
        assert!(output.contains("default-view"));
        assert!(output.contains("2000"));
        assert!(output.contains("bundled demo data"));
    }

    #[test]
    fn test_render_json_has_page_and_messages() {
        let result = commands::artists::run(&store(), &FilterState::new()).unwrap();
        let json = render_json(result.page.as_ref(), &result.messages).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page"]["total"], 8);
        assert_eq!(value["page"]["cards"][0]["name"], "Sarah Johnson");
        assert!(value["messages"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_describe_filters() {
        let mut state = FilterState::new().with_view(ViewMode::List);
        assert_eq!(describe_filters(&state), "");
        state.set_price("$5000+");
        state.set_location("Paris");
        assert_eq!(describe_filters(&state), "location=Paris price=$5000+");
    }
}
