//! Cyclic slide index over a fixed slide set.

use crate::domain::{NavigationError, STORY_SLIDES, Slide};

/// Carousel controller.
///
/// The index is always in `0..slides.len()` and the slide set is never empty.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    slides: &'a [Slide],
    index: usize,
}

impl<'a> Carousel<'a> {
    /// Creates a carousel showing the first slide.
    ///
    /// # Errors
    /// Returns [`NavigationError::EmptyCarousel`] if `slides` is empty.
    pub fn new(slides: &'a [Slide]) -> Result<Self, NavigationError> {
        if slides.is_empty() {
            return Err(NavigationError::EmptyCarousel);
        }
        Ok(Self { slides, index: 0 })
    }

    /// Carousel over the built-in story slides.
    #[must_use]
    pub fn stories() -> Carousel<'static> {
        Carousel {
            slides: &STORY_SLIDES,
            index: 0,
        }
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All slides in display order.
    #[must_use]
    pub const fn slides(&self) -> &'a [Slide] {
        self.slides
    }

    /// Visible slide.
    #[must_use]
    pub fn current(&self) -> &'a Slide {
        &self.slides[self.index]
    }

    /// Moves to the next slide, wrapping to the first.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.slides.len();
    }

    /// Moves to the previous slide, wrapping to the last.
    pub fn retreat(&mut self) {
        let count = self.slides.len();
        self.index = (self.index + count - 1) % count;
    }

    /// Shows slide `index`.
    ///
    /// # Errors
    /// Returns [`NavigationError::SlideOutOfRange`] and leaves the index
    /// unchanged if `index >= len()`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.slides.len() {
            return Err(NavigationError::out_of_range(index, self.slides.len()));
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::STORY_SLIDES;
    use test_case::test_case;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide {
                id: u32::try_from(i).unwrap(),
                image: "",
                title: "t",
                description: "d",
            })
            .collect()
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(
            Carousel::new(&[]).unwrap_err(),
            NavigationError::EmptyCarousel
        );
    }

    #[test]
    fn test_advance_cycles_back_for_every_count() {
        for count in 1..=12 {
            let set = slides(count);
            for start in 0..count {
                let mut carousel = Carousel::new(&set).unwrap();
                carousel.jump_to(start).unwrap();
                for _ in 0..count {
                    carousel.advance();
                }
                assert_eq!(carousel.index(), start, "count={count} start={start}");
            }
        }
    }

    #[test_case(0, 3 ; "wraps_from_first")]
    #[test_case(1, 0 ; "steps_back")]
    #[test_case(3, 2 ; "from_last")]
    fn test_retreat(start: usize, expected: usize) {
        let mut carousel = Carousel::new(&STORY_SLIDES).unwrap();
        carousel.jump_to(start).unwrap();
        carousel.retreat();
        assert_eq!(carousel.index(), expected);
    }

    #[test]
    fn test_advance_wraps_from_last() {
        let mut carousel = Carousel::new(&STORY_SLIDES).unwrap();
        carousel.jump_to(3).unwrap();
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current().title, "Start Your Journey");
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut carousel = Carousel::new(&STORY_SLIDES).unwrap();
        carousel.advance();
        assert_eq!(
            carousel.jump_to(4),
            Err(NavigationError::SlideOutOfRange { index: 4, count: 4 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let set = slides(1);
        let mut carousel = Carousel::new(&set).unwrap();
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.index(), 0);
    }
}
