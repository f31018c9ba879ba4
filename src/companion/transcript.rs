use crate::types::{ChatMessage, Role};

pub const PROCESSING_LABEL: &str = "PROCESSING_DATA...";

/// A line in the rendered chat log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptRow<'a> {
    Message { role: Role, text: &'a str },
    /// Shown while a request is in flight; never part of the transcript.
    Processing,
}

impl TranscriptRow<'_> {
    /// Modifier class for the row: user rows hug the right edge.
    pub fn class(&self) -> &'static str {
        match self {
            TranscriptRow::Message {
                role: Role::User, ..
            } => "user",
            TranscriptRow::Message {
                role: Role::Model, ..
            } => "model",
            TranscriptRow::Processing => "processing",
        }
    }

    pub fn shows_avatar(&self) -> bool {
        matches!(
            self,
            TranscriptRow::Message {
                role: Role::Model,
                ..
            }
        )
    }
}

pub fn transcript_rows(messages: &[ChatMessage], in_flight: bool) -> Vec<TranscriptRow<'_>> {
    let mut rows: Vec<TranscriptRow<'_>> = messages
        .iter()
        .map(|msg| TranscriptRow::Message {
            role: msg.role,
            text: &msg.text,
        })
        .collect();
    if in_flight {
        rows.push(TranscriptRow::Processing);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_transcript_order() {
        let messages = vec![ChatMessage::user("q"), ChatMessage::model("a")];
        let rows = transcript_rows(&messages, false);
        assert_eq!(
            rows,
            vec![
                TranscriptRow::Message {
                    role: Role::User,
                    text: "q"
                },
                TranscriptRow::Message {
                    role: Role::Model,
                    text: "a"
                },
            ]
        );
        assert_eq!(rows[0].class(), "user");
        assert!(rows[1].shows_avatar());
    }

    #[test]
    fn test_processing_row_is_transient() {
        let messages = vec![ChatMessage::user("q")];
        let rows = transcript_rows(&messages, true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], TranscriptRow::Processing);
        assert_eq!(rows[1].class(), "processing");
        assert!(!rows[1].shows_avatar());
        assert!(!rows[0].shows_avatar());
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_empty_idle_transcript_renders_nothing() {
        assert!(transcript_rows(&[], false).is_empty());
        assert_eq!(transcript_rows(&[], true), vec![TranscriptRow::Processing]);
    }
}
