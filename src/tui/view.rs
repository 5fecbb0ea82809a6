//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` builds the screen model for the active route and draws it:
//! top bar, content, bottom navigation bar, help line. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::route::Route;
use crate::screen::{self, Arrangement, ScreenModel, Section};

use super::state::{App, ViewState, TABS};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let model = screen::render(app.route(), &app.catalog);

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // bottom bar
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(&model), chunks[0]);
    frame.render_widget(render_tabs(app.route()), chunks[2]);
    frame.render_widget(render_help(&model), chunks[3]);

    let content_area = chunks[1];
    match &model.route {
        Route::Movies => render_movies(&model, app.view, frame, content_area),
        Route::Grid => render_grid(&model, app.view, frame, content_area),
        Route::Detail { .. } | Route::About => render_static(&model, frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Top bar: back arrow when the screen has one, title, dimmed route path.
fn render_title(model: &ScreenModel) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if model.back {
        spans.push(Span::styled("← ", theme::STYLE_INTERACTIVE));
    }
    spans.push(Span::styled(model.title, theme::STYLE_TITLE));
    spans.push(Span::styled(format!("  {}", model.route), theme::STYLE_DIM));
    Paragraph::new(Line::from(spans))
}

/// Bottom navigation bar. The tab whose route is active is highlighted.
fn render_tabs(current: &Route) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for tab in TABS.iter() {
        let style = if &tab.route == current {
            theme::STYLE_TAB_ACTIVE
        } else {
            theme::STYLE_TAB
        };
        spans.push(Span::styled(format!(" [{}] {} ", tab.key, tab.label), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

/// Help line showing available keybindings for the current screen.
fn render_help(model: &ScreenModel) -> Paragraph<'static> {
    let help_text = match model.route {
        Route::Movies => "[j/k] move  [h/l] row  [Tab] section  [Enter] open  [q] quit",
        Route::Grid => "[h/j/k/l] move  [Enter] open  [Esc] back  [q] quit",
        Route::Detail { .. } => "[Esc] back  [q] quit",
        Route::About => "[Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

/// Style for item `index` of section `section_index`. Only the focused
/// section shows a cursor.
fn item_style(view: ViewState, section_index: usize, index: usize) -> Style {
    if view.section == section_index && view.cursor == index {
        theme::STYLE_CURSOR
    } else {
        Style::new()
    }
}

/// Offset that keeps `cursor` inside a window of `visible` entries.
fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible > 0 && cursor >= visible {
        cursor - visible + 1
    } else {
        0
    }
}

// ============================================================================
// SCREEN: MOVIES
// ============================================================================

fn render_movies(model: &ScreenModel, view: ViewState, frame: &mut Frame, area: Rect) {
    let [column, row] = match model.sections.as_slice() {
        [column, row] => [column, row],
        _ => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // column heading
        Constraint::Min(0),    // column items
        Constraint::Length(1), // spacer
        Constraint::Length(1), // row heading
        Constraint::Length(1), // row items
    ])
    .split(area);

    frame.render_widget(render_heading(column), chunks[0]);
    render_vertical(column, view, 0, frame, chunks[1]);
    frame.render_widget(render_heading(row), chunks[3]);
    render_horizontal(row, view, 1, frame, chunks[4]);
}

fn render_heading(section: &Section) -> Paragraph<'static> {
    let heading = section.heading.unwrap_or_default();
    Paragraph::new(Span::styled(format!("  {}", heading), theme::STYLE_HEADING))
}

fn render_vertical(
    section: &Section,
    view: ViewState,
    index: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let lines: Vec<Line> = section
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if view.section == index && view.cursor == i { "  > " } else { "    " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(item.label, item_style(view, index, i)),
            ])
        })
        .collect();

    let cursor = if view.section == index { view.cursor } else { 0 };
    let offset = scroll_offset(cursor, area.height as usize);

    let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_horizontal(
    section: &Section,
    view: ViewState,
    index: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let mut spans = vec![Span::raw("  ")];
    let mut cursor_end = 0;
    let mut width = 2;

    for (i, item) in section.items.iter().enumerate() {
        let cell = format!(" {} ", item.label);
        width += cell.chars().count();
        spans.push(Span::styled(cell, item_style(view, index, i)));
        if i == view.cursor {
            cursor_end = width;
        }
        width += 2;
        spans.push(Span::raw("  "));
    }

    // Scroll so the end of the focused cell is visible.
    let visible = area.width as usize;
    let offset = if view.section == index { cursor_end.saturating_sub(visible) } else { 0 };

    let paragraph = Paragraph::new(Line::from(spans)).scroll((0, offset as u16));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: GRID
// ============================================================================

/// Rows in the grid occupy one line for the cell plus one line of spacing.
const GRID_ROW_HEIGHT: u16 = 2;

fn render_grid(model: &ScreenModel, view: ViewState, frame: &mut Frame, area: Rect) {
    let Some(section) = model.sections.first() else {
        return;
    };
    let columns = match section.arrangement {
        Arrangement::Grid { columns } => columns.max(1),
        _ => 1,
    };

    let rows: Vec<_> = section.items.chunks(columns).collect();
    let visible_rows = (area.height / GRID_ROW_HEIGHT).max(1) as usize;
    let first_row = scroll_offset(view.cursor / columns, visible_rows);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (slot, row) in rows.iter().enumerate().skip(first_row).take(visible_rows) {
        let y = area.y + (slot - first_row) as u16 * GRID_ROW_HEIGHT;
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, 1);
        let cells = Layout::horizontal(column_constraints.clone())
            .spacing(1)
            .split(row_area);

        for (col, item) in row.iter().enumerate() {
            let index = slot * columns + col;
            let cell = Paragraph::new(Span::styled(
                format!(" {} ", item.label),
                item_style(view, 0, index),
            ));
            frame.render_widget(cell, cells[col]);
        }
    }
}

// ============================================================================
// SCREEN: DETAIL / ABOUT
// ============================================================================

/// Static lines centered both ways, separated by blank lines.
fn render_static(model: &ScreenModel, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    let spaced = matches!(model.route, Route::Detail { .. });

    for (i, text) in model.lines.iter().enumerate() {
        if spaced && i > 0 {
            lines.push(Line::from(""));
        }
        let style = if spaced && i == 0 {
            theme::STYLE_IMPORTANT
        } else {
            Style::new()
        };
        lines.push(Line::from(Span::styled(text.clone(), style)));
    }

    let height = lines.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}

// ============================================================================
// TESTS
// ============================================================================
