//! film-indonesia: browse a fixed catalog of Indonesian films in the terminal.

pub mod catalog;
pub mod error;
pub mod logging;
pub mod nav;
pub mod output;
pub mod route;
pub mod screen;
pub mod tui;
pub mod types;
