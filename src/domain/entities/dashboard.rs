//! Static dashboard and marketing content.
//!
//! Everything here is placeholder copy; none of the actions are wired to a
//! backend.

use super::Role;

/// Dashboard action tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Glyph shown above the label.
    pub icon: &'static str,
    /// Tile label.
    pub label: &'static str,
}

/// Side panel news entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline.
    pub headline: &'static str,
    /// Short body.
    pub body: &'static str,
}

/// Profile completion step status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// Step done.
    Complete,
    /// Step not yet done.
    Pending,
}

impl CompletionStatus {
    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Pending => "Pending",
        }
    }
}

/// Profile completion entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionItem {
    /// Step name.
    pub label: &'static str,
    /// Step status.
    pub status: CompletionStatus,
}

/// Right-hand panel of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanel {
    /// Student news feed.
    News(&'static [NewsItem]),
    /// Consultant profile checklist.
    ProfileCompletion(&'static [CompletionItem]),
}

impl SidePanel {
    /// Panel heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::News(_) => "Latest News",
            Self::ProfileCompletion(_) => "Profile Completion",
        }
    }
}

/// Role-specific dashboard content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardContent {
    /// Heading of the action grid.
    pub actions_title: &'static str,
    /// Action tiles, laid out two per row.
    pub actions: &'static [QuickAction; 4],
    /// Right-hand panel.
    pub side_panel: SidePanel,
}

const STUDENT_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "👥",
        label: "Find Consultant",
    },
    QuickAction {
        icon: "🏆",
        label: "Scholarships",
    },
    QuickAction {
        icon: "🌐",
        label: "Countries",
    },
    QuickAction {
        icon: "📄",
        label: "CV Builder",
    },
];

const CONSULTANT_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "📄",
        label: "Create Blog Post",
    },
    QuickAction {
        icon: "💬",
        label: "Messages",
    },
    QuickAction {
        icon: "📅",
        label: "Set Availability",
    },
    QuickAction {
        icon: "🏆",
        label: "Service Pricing",
    },
];

const STUDENT_NEWS: [NewsItem; 2] = [
    NewsItem {
        headline: "New Scholarships Available",
        body: "DAAD scholarships now open for applications",
    },
    NewsItem {
        headline: "University Rankings Updated",
        body: "QS World University Rankings 2025 released",
    },
];

const CONSULTANT_PROFILE: [CompletionItem; 3] = [
    CompletionItem {
        label: "Basic Info",
        status: CompletionStatus::Complete,
    },
    CompletionItem {
        label: "University Details",
        status: CompletionStatus::Pending,
    },
    CompletionItem {
        label: "Services & Pricing",
        status: CompletionStatus::Pending,
    },
];

impl DashboardContent {
    /// Content for the given role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self {
                actions_title: "Quick Actions",
                actions: &STUDENT_ACTIONS,
                side_panel: SidePanel::News(&STUDENT_NEWS),
            },
            Role::Consultant => Self {
                actions_title: "Mentor Actions",
                actions: &CONSULTANT_ACTIONS,
                side_panel: SidePanel::ProfileCompletion(&CONSULTANT_PROFILE),
            },
        }
    }
}

/// Home page selling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Glyph.
    pub icon: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Body.
    pub description: &'static str,
}

/// "Why Choose Agaaw?" entries.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🌐",
        title: "Global Reach",
        description: "Access to universities and opportunities worldwide",
    },
    Feature {
        icon: "👥",
        title: "Real Mentors",
        description: "Connect with actual students, not agency representatives",
    },
    Feature {
        icon: "🏆",
        title: "No Fraud",
        description: "Transparent platform with verified mentors",
    },
];

/// Brand name.
pub const BRAND: &str = "Agaaw";
/// Brand tagline.
pub const TAGLINE: &str = "Fly to your Future";
/// Hero blurb under the tagline.
pub const HERO_BLURB: &str = "Your all-in-one platform for studying abroad. Connect with mentors, find scholarships, and make your dreams a reality.";

/// Footer copy for students.
pub const FOR_STUDENTS: &str = "This is the all in one platform where you can find everything that you need in order to fulfill your dream, going abroad for your study. If you face difficulties, you can find other students who are already studying in your dream countries or universities. Make them your mentor and fulfill your dream with no fraud. So start your journey here, find all the information about scholarships, admission and find a mentor to guide you.";
/// Footer copy for mentors.
pub const FOR_MENTORS: &str = "You have fulfilled your dream already, now help your brothers and sisters. Become a mentor on this platform and earn some extra money. This profession makes you great as a community contributor and you can earn money by mentoring others.";
/// Footer copyright line.
pub const COPYRIGHT: &str = "© 2025 Agaaw. Fly to your Future.";
