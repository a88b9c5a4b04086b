//! Story slides shown in the home screen carousel.

/// A single carousel entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Stable identifier.
    pub id: u32,
    /// Remote image URL. Never fetched; only its host is shown as a caption.
    pub image: &'static str,
    /// Headline.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

impl Slide {
    /// Returns the host part of the image URL, used as the image fallback caption.
    #[must_use]
    pub fn image_host(&self) -> &'static str {
        let without_scheme = self
            .image
            .split_once("://")
            .map_or(self.image, |(_, rest)| rest);
        without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or(without_scheme)
    }
}

/// The four story slides, in display order.
pub static STORY_SLIDES: [Slide; 4] = [
    Slide {
        id: 1,
        image: "https://images.unsplash.com/photo-1541829070764-84a7d30dd3f3?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title: "Start Your Journey",
        description: "Connect with students already living your dream abroad",
    },
    Slide {
        id: 2,
        image: "https://images.unsplash.com/photo-1591218214141-45545921d2d9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title: "Achieve Your Dreams",
        description: "Graduate from top universities around the world",
    },
    Slide {
        id: 3,
        image: "https://images.unsplash.com/photo-1725618878496-233974f2fd59?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title: "Global Community",
        description: "Join a diverse community of international students",
    },
    Slide {
        id: 4,
        image: "https://images.unsplash.com/photo-1651670630210-a9a6604b4a85?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title: "Top Universities",
        description: "Access information about leading institutions worldwide",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_slides_are_ordered() {
        let ids: Vec<u32> = STORY_SLIDES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_image_host() {
        assert_eq!(STORY_SLIDES[0].image_host(), "images.unsplash.com");

        let bare = Slide {
            id: 9,
            image: "example.org/a.png",
            title: "",
            description: "",
        };
        assert_eq!(bare.image_host(), "example.org");
    }
}
