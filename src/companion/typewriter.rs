use std::time::Duration;

pub const WELCOME_MESSAGE: &str = "Hi there, this is your Fintech companion. Ask away ...";
pub const WELCOME_CHAR_DELAY: Duration = Duration::from_millis(40);

pub const TOOLTIP_TEXT: &str = "Click me !!!";
pub const TOOLTIP_START_DELAY: Duration = Duration::from_millis(2500);
pub const TOOLTIP_CHAR_DELAY: Duration = Duration::from_millis(100);

/// First `chars` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Every intermediate frame of typing `text`, from empty to complete.
pub fn frames(text: &str) -> impl Iterator<Item = &str> {
    (0..=text.chars().count()).map(move |n| typed_prefix(text, n))
}

/// Scrolling the page hides the tooltip unless the pointer is on the trigger.
pub fn tooltip_survives_scroll(visible: bool, hovered: bool) -> bool {
    visible && hovered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_prefix_counts_chars() {
        assert_eq!(typed_prefix("₹ tax", 0), "");
        assert_eq!(typed_prefix("₹ tax", 1), "₹");
        assert_eq!(typed_prefix("₹ tax", 3), "₹ t");
        assert_eq!(typed_prefix("₹ tax", 99), "₹ tax");
    }

    #[test]
    fn test_frames_cover_whole_text() {
        let all: Vec<_> = frames(TOOLTIP_TEXT).collect();
        assert_eq!(all.len(), TOOLTIP_TEXT.len() + 1);
        assert_eq!(all.first(), Some(&""));
        assert_eq!(all.last(), Some(&TOOLTIP_TEXT));
    }

    #[test]
    fn test_scroll_hides_tooltip_unless_hovered() {
        assert!(!tooltip_survives_scroll(true, false));
        assert!(tooltip_survives_scroll(true, true));
        assert!(!tooltip_survives_scroll(false, true));
    }
}
