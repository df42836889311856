use crate::commands::{CmdResult, Page};
use crate::error::Result;
use crate::model::Route;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub command: &'static str,
}

impl From<Route> for NavEntry {
    fn from(route: Route) -> Self {
        Self {
            label: route.menu_label(),
            path: route.path(),
            command: route.command(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutesPage {
    pub entries: Vec<NavEntry>,
}

/// The navigation menu, in menu order.
pub fn menu() -> Vec<NavEntry> {
    Route::ALL.iter().copied().map(NavEntry::from).collect()
}

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_page(Page::Routes(RoutesPage { entries: menu() })))
}
