//! Domain entities.

mod dashboard;
mod role;
mod session;
mod slide;

pub use dashboard::{
    BRAND, COPYRIGHT, CompletionItem, CompletionStatus, DashboardContent, FEATURES, FOR_MENTORS,
    FOR_STUDENTS, Feature, HERO_BLURB, NewsItem, QuickAction, SidePanel, TAGLINE,
};
pub use role::Role;
pub use session::{Screen, SessionState};
pub use slide::{STORY_SLIDES, Slide};
