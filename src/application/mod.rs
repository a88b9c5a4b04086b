//! Application layer with the session controller, carousel, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Session, carousel, and autoplay services.
pub mod services;

pub use dto::{AuthSource, AuthSubmission};
pub use services::{Autoplay, AutoplayTick, Carousel, ViewController};
