//! Presentation layer with screens, widgets and key handling.

/// Key bindings and per-screen hints.
pub mod commands;
/// Event handling.
pub mod events;
/// Accent-derived styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
