//! Application services.

mod autoplay;
mod carousel;
mod view_controller;

pub use autoplay::{
    Autoplay, AutoplayTick, DEFAULT_AUTOPLAY_INTERVAL, MIN_AUTOPLAY_INTERVAL,
};
pub use carousel::Carousel;
pub use view_controller::ViewController;
