mod carousel_view;
mod footer_bar;
mod header_bar;
mod input;
mod status_bar;

pub use carousel_view::{CarouselTransition, CarouselView};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use status_bar::StatusBar;
