//! Mapping from classifier labels to navigation gestures

/// Gestures that drive theme navigation
///
/// Only the two swipe labels act on the theme index; every other label is
/// display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// "Swipe Left": move to the previous theme
    SwipeLeft,
    /// "Swipe Right": move to the next theme
    SwipeRight,
}

impl Gesture {
    /// Map a classifier label to a navigation gesture, if it has one
    ///
    /// Matching is exact; the service owns the label vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Swipe Left" => Some(Self::SwipeLeft),
            "Swipe Right" => Some(Self::SwipeRight),
            _ => None,
        }
    }
}

/// Emoji shown for a classifier label in the overlay
pub fn emoji_for(label: &str) -> &'static str {
    match label {
        "Open Palm" => "\u{270b}",
        "Fist" => "\u{270a}",
        "Peace" => "\u{270c}\u{fe0f}",
        "OK" => "\u{1f44c}",
        "Thumbs Up" => "\u{1f44d}",
        "Thumbs Down" => "\u{1f44e}",
        "Point Up" => "\u{1f446}",
        "Call Me" => "\u{1f919}",
        "Swipe Left" => "\u{2b05}\u{fe0f}",
        "Swipe Right" => "\u{27a1}\u{fe0f}",
        _ => "\u{1f590}\u{fe0f}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_labels_map_to_gestures() {
        assert_eq!(Gesture::from_label("Swipe Left"), Some(Gesture::SwipeLeft));
        assert_eq!(Gesture::from_label("Swipe Right"), Some(Gesture::SwipeRight));
    }

    #[test]
    fn test_non_swipe_labels_are_display_only() {
        for label in ["Open Palm", "Fist", "No Hand", "swipe left", ""] {
            assert_eq!(Gesture::from_label(label), None, "label {label:?}");
        }
    }

    #[test]
    fn test_unknown_label_gets_fallback_emoji() {
        assert_eq!(emoji_for("Something New"), "\u{1f590}\u{fe0f}");
        assert_eq!(emoji_for("Fist"), "\u{270a}");
    }
}
