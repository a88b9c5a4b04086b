//! Domain layer with entities, errors, and keybinding definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;

pub use entities::{Role, STORY_SLIDES, Screen, SessionState, Slide};
pub use errors::NavigationError;
