//! TUI module for the interactive browser.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, ViewState, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
