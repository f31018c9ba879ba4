//! FinBot conversation state.
//!
//! [`ConversationSession`] owns the transcript and the in-flight guard,
//! [`Dispatcher`] drives requests against a [`LanguageModel`](crate::ai::LanguageModel),
//! and the remaining modules are pure helpers for the widget's presentation.

pub mod dispatcher;
pub mod session;
pub mod suggestions;
pub mod transcript;
pub mod typewriter;

pub use dispatcher::{Dispatcher, PendingReply, SubmitOutcome};
pub use session::{ConversationSession, EMPTY_REPLY_FALLBACK, ERROR_REPLY, Rejection};
pub use suggestions::{SUGGESTED_QUESTIONS, suggestions_ready, visible_suggestions};
pub use transcript::{PROCESSING_LABEL, TranscriptRow, transcript_rows};
