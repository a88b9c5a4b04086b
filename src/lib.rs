//! Agaaw - Fly to your Future.
//!
//! A terminal front-end for the Agaaw study-abroad platform: a marketing home
//! screen with an autoplaying story carousel, role-based registration and
//! login forms, and a placeholder dashboard. All session state lives in
//! memory for the lifetime of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the view controller, carousel, and autoplay.
pub mod application;
/// Domain layer containing entities, errors, and keybinding definitions.
pub mod domain;
/// Infrastructure layer containing configuration and storage adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "agaaw";
