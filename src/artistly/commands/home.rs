//! The landing page: hero, category tiles, feature highlights and the closing
//! call to action. All of it is fixed content.

use crate::commands::routes::{menu, NavEntry};
use crate::commands::{CmdResult, Page};
use crate::error::Result;
use crate::model::Route;
use crate::present::CategoryTile;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub links: Vec<NavEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Section,
    pub categories_section: Section,
    pub categories: Vec<CategoryTile>,
    pub features_section: Section,
    pub features: Vec<Feature>,
    pub cta: CallToAction,
    pub menu: Vec<NavEntry>,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Easy Discovery",
        description: "Advanced filtering to find the perfect artist for your event needs",
    },
    Feature {
        title: "Verified Artists",
        description: "All artists are verified and background-checked for your peace of mind",
    },
    Feature {
        title: "Quick Booking",
        description: "Streamlined booking process with instant availability checks",
    },
    Feature {
        title: "Quality Assured",
        description: "Read reviews and ratings from previous clients to make informed decisions",
    },
];

pub fn run() -> Result<CmdResult> {
    let page = HomePage {
        hero: Section {
            title: "Book Talented Artists for Your Next Event",
            subtitle: "Singers, dancers, speakers and DJs, all in one place",
        },
        categories_section: Section {
            title: "Browse by Category",
            subtitle: "Find the perfect artist for your event from our diverse categories of talented performers",
        },
        categories: CategoryTile::featured(),
        features_section: Section {
            title: "Why Choose Artistly?",
            subtitle: "We make it simple to find and book the perfect artists for your events",
        },
        features: FEATURES.to_vec(),
        cta: CallToAction {
            title: "Ready to Find Your Perfect Artist?",
            body: "Join thousands of event planners who trust Artistly to connect them with talented performers",
            links: vec![NavEntry::from(Route::Artists), NavEntry::from(Route::Onboard)],
        },
        menu: menu(),
    };
    Ok(CmdResult::default().with_page(Page::Home(page)))
}
