//! Pure state transitions: (Route, ViewState, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Global actions (quit, back, bottom bar) behave the same on every
//! screen; focus movement and clicks depend on the screen's sections.

use crate::catalog::Catalog;
use crate::route::Route;
use crate::screen::{self, Arrangement, ScreenModel};

use super::state::{tab_for, Action, App, Transition, ViewState};

/// Pure state transition function.
pub fn update(route: &Route, view: ViewState, action: &Action, catalog: &Catalog) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::Back => Transition::Pop,
        Action::Tab(number) => match tab_for(*number) {
            Some(tab) => Transition::Navigate(tab.route.clone()),
            None => Transition::Stay(view),
        },
        _ => update_focus(&screen::render(route, catalog), view, action),
    }
}

/// Apply a transition to the app. Any route change resets focus.
pub fn apply(app: &mut App, transition: Transition) {
    match transition {
        Transition::Navigate(route) => {
            app.navigator.navigate(route);
            app.view = ViewState::default();
        }
        Transition::Pop => {
            if app.navigator.pop_back_stack() {
                app.view = ViewState::default();
            }
        }
        Transition::Stay(view) => app.view = view,
        Transition::Quit => app.should_quit = true,
    }
}

/// `update` followed by `apply`.
pub fn dispatch(app: &mut App, action: &Action) {
    let transition = update(app.route(), app.view, action, &app.catalog);
    apply(app, transition);
}

// ============================================================================
// FOCUS
// ============================================================================

/// Cursor movement and clicks within the sections of `model`.
///
/// Screens without sections (detail, about) ignore these actions.
fn update_focus(model: &ScreenModel, view: ViewState, action: &Action) -> Transition {
    let sections = &model.sections;
    let Some(last_section) = sections.len().checked_sub(1) else {
        return Transition::Stay(view);
    };
    let current = view.section.min(last_section);
    let section = &sections[current];
    let len = section.items.len();

    let focus = |section: usize, cursor: usize| Transition::Stay(ViewState { section, cursor });
    let clamp_in = |section: usize, cursor: usize| {
        cursor.min(sections[section].items.len().saturating_sub(1))
    };

    match action {
        Action::Enter => match model.target(current, view.cursor) {
            Some(route) => Transition::Navigate(route.clone()),
            None => Transition::Stay(view),
        },
        Action::NextSection => {
            let next = if current == last_section { 0 } else { current + 1 };
            focus(next, clamp_in(next, view.cursor))
        }
        Action::PrevSection => {
            let prev = if current == 0 { last_section } else { current - 1 };
            focus(prev, clamp_in(prev, view.cursor))
        }
        // Running off the bottom of a vertical list drops into the next section.
        Action::MoveDown
            if section.arrangement == Arrangement::Vertical
                && view.cursor + 1 >= len
                && current < last_section =>
        {
            focus(current + 1, 0)
        }
        // Up from a horizontal row returns to the section above it.
        Action::MoveUp if section.arrangement == Arrangement::Horizontal && current > 0 => {
            let above = current - 1;
            focus(above, sections[above].items.len().saturating_sub(1))
        }
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            focus(current, move_cursor(section.arrangement, view.cursor, len, action))
        }
        _ => Transition::Stay(view),
    }
}

/// New cursor position after a movement action, clamped to `len` items.
pub fn move_cursor(arrangement: Arrangement, cursor: usize, len: usize, action: &Action) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    let cursor = cursor.min(last);

    match (arrangement, action) {
        (Arrangement::Vertical, Action::MoveUp) | (Arrangement::Horizontal, Action::MoveLeft) => {
            cursor.saturating_sub(1)
        }
        (Arrangement::Vertical, Action::MoveDown)
        | (Arrangement::Horizontal, Action::MoveRight) => {
            (cursor + 1).min(last)
        }
        (Arrangement::Grid { columns }, _) => {
            let columns = columns.max(1);
            match action {
                Action::MoveUp => cursor.checked_sub(columns).unwrap_or(cursor),
                Action::MoveDown if cursor + columns <= last => cursor + columns,
                Action::MoveLeft if cursor % columns > 0 => cursor - 1,
                Action::MoveRight if cursor % columns + 1 < columns && cursor < last => cursor + 1,
                _ => cursor,
            }
        }
        _ => cursor,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Source;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn at(section: usize, cursor: usize) -> ViewState {
        ViewState { section, cursor }
    }

    // -- Global actions --

    #[test]
    fn quit_from_any_route() {
        for route in [Route::Movies, Route::Grid, Route::About, Route::detail(1, Source::Row)] {
            assert_eq!(
                update(&route, ViewState::default(), &Action::Quit, &catalog()),
                Transition::Quit
            );
        }
    }

    #[test]
    fn back_requests_pop() {
        let route = Route::detail(0, Source::Column);
        assert_eq!(
            update(&route, ViewState::default(), &Action::Back, &catalog()),
            Transition::Pop
        );
    }

    #[test]
    fn tab_numbers_navigate_to_bottom_bar_routes() {
        let view = ViewState::default();
        assert_eq!(
            update(&Route::Movies, view, &Action::Tab(2), &catalog()),
            Transition::Navigate(Route::Grid)
        );
        assert_eq!(
            update(&Route::Grid, view, &Action::Tab(3), &catalog()),
            Transition::Navigate(Route::About)
        );
        assert_eq!(
            update(&Route::Movies, view, &Action::Tab(1), &catalog()),
            Transition::Navigate(Route::Movies)
        );
    }

    #[test]
    fn unknown_tab_number_stays() {
        let view = at(0, 3);
        assert_eq!(
            update(&Route::Movies, view, &Action::Tab(9), &catalog()),
            Transition::Stay(view)
        );
    }

    // -- Movies screen --

    #[test]
    fn enter_on_column_opens_detail_tagged_column() {
        assert_eq!(
            update(&Route::Movies, at(0, 2), &Action::Enter, &catalog()),
            Transition::Navigate(Route::detail(2, Source::Column))
        );
    }

    #[test]
    fn enter_on_row_opens_detail_tagged_row() {
        assert_eq!(
            update(&Route::Movies, at(1, 6), &Action::Enter, &catalog()),
            Transition::Navigate(Route::detail(6, Source::Row))
        );
    }

    #[test]
    fn column_moves_down_and_clamps_at_top() {
        assert_eq!(
            update(&Route::Movies, at(0, 0), &Action::MoveDown, &catalog()),
            Transition::Stay(at(0, 1))
        );
        assert_eq!(
            update(&Route::Movies, at(0, 0), &Action::MoveUp, &catalog()),
            Transition::Stay(at(0, 0))
        );
    }

    #[test]
    fn moving_past_last_column_item_enters_row() {
        assert_eq!(
            update(&Route::Movies, at(0, 9), &Action::MoveDown, &catalog()),
            Transition::Stay(at(1, 0))
        );
    }

    #[test]
    fn moving_up_from_row_returns_to_column_bottom() {
        assert_eq!(
            update(&Route::Movies, at(1, 4), &Action::MoveUp, &catalog()),
            Transition::Stay(at(0, 9))
        );
    }

    #[test]
    fn row_moves_horizontally() {
        assert_eq!(
            update(&Route::Movies, at(1, 4), &Action::MoveRight, &catalog()),
            Transition::Stay(at(1, 5))
        );
        assert_eq!(
            update(&Route::Movies, at(1, 9), &Action::MoveRight, &catalog()),
            Transition::Stay(at(1, 9))
        );
        assert_eq!(
            update(&Route::Movies, at(1, 0), &Action::MoveLeft, &catalog()),
            Transition::Stay(at(1, 0))
        );
    }

    #[test]
    fn section_switching_wraps_and_keeps_cursor() {
        assert_eq!(
            update(&Route::Movies, at(0, 3), &Action::NextSection, &catalog()),
            Transition::Stay(at(1, 3))
        );
        assert_eq!(
            update(&Route::Movies, at(1, 3), &Action::NextSection, &catalog()),
            Transition::Stay(at(0, 3))
        );
        assert_eq!(
            update(&Route::Movies, at(0, 3), &Action::PrevSection, &catalog()),
            Transition::Stay(at(1, 3))
        );
    }

    // -- Grid screen --

    #[test]
    fn grid_moves_by_row_and_column() {
        let grid = Route::Grid;
        let cases = [
            (at(0, 0), Action::MoveDown, at(0, 2)),
            (at(0, 0), Action::MoveRight, at(0, 1)),
            (at(0, 1), Action::MoveRight, at(0, 1)),
            (at(0, 3), Action::MoveLeft, at(0, 2)),
            (at(0, 2), Action::MoveLeft, at(0, 2)),
            (at(0, 5), Action::MoveUp, at(0, 3)),
            (at(0, 1), Action::MoveUp, at(0, 1)),
            (at(0, 8), Action::MoveDown, at(0, 8)),
        ];
        for (from, action, to) in cases {
            assert_eq!(
                update(&grid, from, &action, &catalog()),
                Transition::Stay(to),
                "{:?} from {:?}",
                action,
                from
            );
        }
    }

    #[test]
    fn grid_enter_opens_detail_tagged_grid() {
        assert_eq!(
            update(&Route::Grid, at(0, 4), &Action::Enter, &catalog()),
            Transition::Navigate(Route::detail(4, Source::Grid))
        );
    }

    // -- Sectionless screens --

    #[test]
    fn detail_and_about_ignore_focus_actions() {
        let view = ViewState::default();
        for route in [Route::About, Route::detail(3, Source::Grid)] {
            let actions = [
                Action::MoveDown,
                Action::MoveRight,
                Action::Enter,
                Action::NextSection,
            ];
            for action in actions {
                assert_eq!(update(&route, view, &action, &catalog()), Transition::Stay(view));
            }
        }
    }

    // -- move_cursor --

    #[test]
    fn move_cursor_on_empty_section_is_zero() {
        assert_eq!(move_cursor(Arrangement::Vertical, 5, 0, &Action::MoveDown), 0);
    }

    #[test]
    fn move_cursor_ignores_cross_axis() {
        assert_eq!(move_cursor(Arrangement::Vertical, 3, 10, &Action::MoveRight), 3);
        assert_eq!(move_cursor(Arrangement::Horizontal, 3, 10, &Action::MoveDown), 3);
    }

    #[test]
    fn move_cursor_handles_ragged_last_grid_row() {
        let grid = Arrangement::Grid { columns: 3 };
        // 7 items: rows [0,1,2] [3,4,5] [6]
        assert_eq!(move_cursor(grid, 4, 7, &Action::MoveDown), 4);
        assert_eq!(move_cursor(grid, 3, 7, &Action::MoveDown), 6);
        assert_eq!(move_cursor(grid, 6, 7, &Action::MoveRight), 6);
    }

    // -- apply / dispatch --

    #[test]
    fn navigate_pushes_and_resets_focus() {
        let mut app = App::new();
        app.view = at(1, 7);
        apply(&mut app, Transition::Navigate(Route::Grid));
        assert_eq!(app.route(), &Route::Grid);
        assert_eq!(app.view, ViewState::default());
    }

    #[test]
    fn pop_at_root_keeps_focus() {
        let mut app = App::new();
        app.view = at(0, 4);
        apply(&mut app, Transition::Pop);
        assert_eq!(app.route(), &Route::Movies);
        assert_eq!(app.view, at(0, 4));
    }

    #[test]
    fn dispatch_round_trip_list_detail_back() {
        let mut app = App::new();
        dispatch(&mut app, &Action::MoveDown);
        dispatch(&mut app, &Action::MoveDown);
        dispatch(&mut app, &Action::Enter);
        assert_eq!(app.route(), &Route::detail(2, Source::Column));

        dispatch(&mut app, &Action::Back);
        assert_eq!(app.route(), &Route::Movies);
        assert_eq!(app.view, ViewState::default());
    }

    #[test]
    fn dispatch_quit_sets_flag() {
        let mut app = App::new();
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
