//! Carousel navigation errors.

use thiserror::Error;

/// Carousel navigation error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("carousel needs at least one slide")]
    EmptyCarousel,

    #[error("slide {index} is out of range, carousel has {count} slides")]
    SlideOutOfRange { index: usize, count: usize },
}

impl NavigationError {
    /// Creates out of range error.
    #[must_use]
    pub const fn out_of_range(index: usize, count: usize) -> Self {
        Self::SlideOutOfRange { index, count }
    }
}
