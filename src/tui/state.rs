//! TUI state algebra: pure types, zero effects.
//!
//! The route stack lives in the [`Navigator`]. Per-screen transient state
//! (which section has focus, which item the cursor is on) lives in
//! [`ViewState`] and is reset whenever the active route changes.

use crate::catalog::Catalog;
use crate::nav::Navigator;
use crate::route::Route;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub view: ViewState,
    /// Shared by every screen.
    pub catalog: Catalog,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Focus within the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Index of the focused section.
    pub section: usize,
    /// Index of the focused item within that section.
    pub cursor: usize,
}

// ============================================================================
// BOTTOM BAR
// ============================================================================

/// An entry of the bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: char,
    pub label: &'static str,
    pub route: Route,
}

pub static TABS: [Tab; 3] = [
    Tab { key: '1', label: "Movies", route: Route::Movies },
    Tab { key: '2', label: "Grid View", route: Route::Grid },
    Tab { key: '3', label: "About", route: Route::About },
];

/// Tab for a 1-based number key.
pub fn tab_for(number: u8) -> Option<&'static Tab> {
    TABS.get(usize::from(number).checked_sub(1)?)
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Focus the next section (wraps).
    NextSection,
    /// Focus the previous section (wraps).
    PrevSection,
    /// Click the focused item.
    Enter,
    /// Pop the back-stack.
    Back,
    /// Bottom bar item by number (1-3).
    Tab(u8),
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary applies it to
/// the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Push a route.
    Navigate(Route),
    /// Pop the back-stack.
    Pop,
    /// Same route, new focus.
    Stay(ViewState),
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// App at the start route with the built-in catalog.
    pub fn new() -> Self {
        App {
            navigator: Navigator::default(),
            view: ViewState::default(),
            catalog: Catalog::builtin(),
            should_quit: false,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_at_movies_with_origin_focus() {
        let app = App::new();
        assert_eq!(app.route(), &Route::Movies);
        assert_eq!(app.view, ViewState { section: 0, cursor: 0 });
        assert!(!app.should_quit);
    }

    #[test]
    fn tabs_map_numbers_to_routes() {
        assert_eq!(tab_for(1).unwrap().route, Route::Movies);
        assert_eq!(tab_for(2).unwrap().route, Route::Grid);
        assert_eq!(tab_for(3).unwrap().route, Route::About);
        assert!(tab_for(0).is_none());
        assert!(tab_for(4).is_none());
    }

    #[test]
    fn tab_labels_match_bottom_bar() {
        let labels: Vec<&str> = TABS.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Movies", "Grid View", "About"]);
    }
}
