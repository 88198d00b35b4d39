//! Terminal dashboard for the international student recruitment strategy,
//! with a session-only notes panel.

pub mod app;
pub mod config;
pub mod content;
pub mod core;
pub mod input;
pub mod logging;
pub mod modules;
pub mod scroll;
pub mod ui;

pub use app::{App, Tab};
