//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Cyan: interactive elements (key hints, focused item)
//! - Dim: de-emphasized (route path, help line, unfocused sections)
//! - Bold: important (titles, section headings, the film name)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Top app bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Section heading ("Film Populer", "Rilis Terbaru").
pub const STYLE_HEADING: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Focused item in the focused section.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Bottom bar item.
pub const STYLE_TAB: Style = Style::new().fg(Color::Gray);

/// Bottom bar item for the active route.
pub const STYLE_TAB_ACTIVE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
