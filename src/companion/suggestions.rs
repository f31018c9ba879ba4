use crate::types::ChatMessage;

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "How can I save tax legally?",
    "What is FinSight AI?",
    "Explain Old vs New Tax Regime",
    "Services provided by CA Sriharri?",
];

/// Welcome characters that must be on screen before the prompts appear.
const WELCOME_REVEAL_THRESHOLD: usize = 20;

/// Canned prompts to offer; empty once the conversation has started.
pub fn visible_suggestions(messages: &[ChatMessage]) -> &'static [&'static str] {
    if messages.is_empty() {
        SUGGESTED_QUESTIONS
    } else {
        &[]
    }
}

/// Prompts are held back until the typed welcome line is mostly revealed.
pub fn suggestions_ready(messages: &[ChatMessage], welcome_shown: &str) -> bool {
    !visible_suggestions(messages).is_empty()
        && welcome_shown.chars().count() > WELCOME_REVEAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_only_before_first_message() {
        assert_eq!(visible_suggestions(&[]).len(), 4);
        assert!(visible_suggestions(&[ChatMessage::user("hi")]).is_empty());
    }

    #[test]
    fn test_ready_waits_for_welcome() {
        assert!(!suggestions_ready(&[], "Hi there"));
        assert!(suggestions_ready(&[], "Hi there, this is your"));
        assert!(!suggestions_ready(
            &[ChatMessage::user("hi")],
            "Hi there, this is your Fintech companion."
        ));
    }
}
