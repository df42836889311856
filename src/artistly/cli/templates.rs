//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone
//! files under `templates/` and included here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a block tag
//! on its own line leaves no trace in the output. Keep block tags on their own
//! lines: a tag at the end of a content line swallows that line's newline.
//!
//! Layout math (column widths, truncation) lives in the `fit` filter, styles
//! in the `style` filter; templates only pick semantic style names.

pub const NAV_TEMPLATE: &str = include_str!("templates/nav.jinja");
pub const HOME_TEMPLATE: &str = include_str!("templates/home.jinja");
pub const ARTISTS_TEMPLATE: &str = include_str!("templates/artists.jinja");
pub const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.jinja");
pub const ONBOARD_TEMPLATE: &str = include_str!("templates/onboard.jinja");
pub const ROUTES_TEMPLATE: &str = include_str!("templates/routes.jinja");
pub const RESPOND_TEMPLATE: &str = include_str!("templates/respond.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");

/// Every template, by the name `include` and the renderer use.
pub const ALL: [(&str, &str); 9] = [
    ("nav.jinja", NAV_TEMPLATE),
    ("home.jinja", HOME_TEMPLATE),
    ("artists.jinja", ARTISTS_TEMPLATE),
    ("dashboard.jinja", DASHBOARD_TEMPLATE),
    ("onboard.jinja", ONBOARD_TEMPLATE),
    ("routes.jinja", ROUTES_TEMPLATE),
    ("respond.jinja", RESPOND_TEMPLATE),
    ("config.jinja", CONFIG_TEMPLATE),
    ("messages.jinja", MESSAGES_TEMPLATE),
];
