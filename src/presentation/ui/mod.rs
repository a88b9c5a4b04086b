//! UI screens.

mod app;
mod dashboard_screen;
mod form;
mod home_screen;
mod login_screen;
mod register_screen;

pub use app::App;
pub use dashboard_screen::{DashboardAction, DashboardScreen};
pub use form::{AuthForm, FormAction};
pub use home_screen::{HomeAction, HomeScreen, HomeScreenState};
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
