//! Screen renderers: pure functions from (catalog, route) to a screen model.
//!
//! A [`ScreenModel`] is the framework-free visual tree of one screen. The
//! TUI draws it with ratatui, the `show` command prints it, and the update
//! function reads item targets from it to decide where a click goes.

use serde::Serialize;

use crate::catalog::{Catalog, ABOUT_LINES, DESCRIPTION};
use crate::route::{Route, Source};

/// Columns in the grid screen.
pub const GRID_COLUMNS: usize = 2;

/// How a section lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// One item per line, scrolls vertically.
    Vertical,
    /// Items side by side on one line, scrolls horizontally.
    Horizontal,
    /// Fixed number of equal-width columns.
    Grid { columns: usize },
}

/// A clickable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub label: &'static str,
    /// Where a click on this item navigates.
    pub target: Route,
}

/// A run of items with an optional heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub arrangement: Arrangement,
    pub items: Vec<Item>,
}

/// Everything one screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenModel {
    pub route: Route,
    /// Top bar text.
    pub title: &'static str,
    /// Whether the top bar carries a back affordance.
    pub back: bool,
    pub sections: Vec<Section>,
    /// Static text lines, centered.
    pub lines: Vec<String>,
}

impl ScreenModel {
    /// Target route of the item at (`section`, `index`).
    pub fn target(&self, section: usize, index: usize) -> Option<&Route> {
        self.sections
            .get(section)?
            .items
            .get(index)
            .map(|item| &item.target)
    }
}

/// Build the model for `route`.
pub fn render(route: &Route, catalog: &Catalog) -> ScreenModel {
    match route {
        Route::Movies => movies(catalog),
        Route::Grid => grid(catalog),
        Route::About => about(),
        Route::Detail { movie_id, source } => detail(catalog, *movie_id, source),
    }
}

/// Items for every title, tagged with `source`.
fn catalog_items(catalog: &Catalog, source: Source) -> Vec<Item> {
    catalog
        .titles()
        .iter()
        .copied()
        .enumerate()
        .map(|(index, label)| Item {
            label,
            target: Route::detail(index, source.clone()),
        })
        .collect()
}

pub fn movies(catalog: &Catalog) -> ScreenModel {
    ScreenModel {
        route: Route::Movies,
        title: "Film Indonesia",
        back: false,
        sections: vec![
            Section {
                heading: Some("Film Populer"),
                arrangement: Arrangement::Vertical,
                items: catalog_items(catalog, Source::Column),
            },
            Section {
                heading: Some("Rilis Terbaru"),
                arrangement: Arrangement::Horizontal,
                items: catalog_items(catalog, Source::Row),
            },
        ],
        lines: Vec::new(),
    }
}

pub fn grid(catalog: &Catalog) -> ScreenModel {
    ScreenModel {
        route: Route::Grid,
        title: "Grid Film",
        back: false,
        sections: vec![Section {
            heading: None,
            arrangement: Arrangement::Grid { columns: GRID_COLUMNS },
            items: catalog_items(catalog, Source::Grid),
        }],
        lines: Vec::new(),
    }
}

pub fn detail(catalog: &Catalog, movie_id: usize, source: &Source) -> ScreenModel {
    ScreenModel {
        route: Route::detail(movie_id, source.clone()),
        title: "Detail Film",
        back: true,
        sections: Vec::new(),
        lines: vec![
            format!("Film: {}", catalog.title_or_first(movie_id)),
            format!("Sumber: {}", source),
            format!("Deskripsi: {}", DESCRIPTION),
        ],
    }
}

pub fn about() -> ScreenModel {
    ScreenModel {
        route: Route::About,
        title: "Tentang Saya",
        back: false,
        sections: Vec::new(),
        lines: ABOUT_LINES.iter().map(|line| line.to_string()).collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
