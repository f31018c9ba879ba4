use crate::ai::{ChatResult, GenerateRequest};
use crate::types::ChatMessage;
use futures::future::AbortHandle;

/// Appended when the model answers with an empty body.
pub const EMPTY_REPLY_FALLBACK: &str = "I apologize, I couldn't process that request right now.";

/// Appended when the request fails for any reason.
pub const ERROR_REPLY: &str = "System Error: Connection interrupted. Please retry.";

/// Why a submission was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("message is empty")]
    EmptyInput,
    #[error("a request is already in flight")]
    RequestInFlight,
}

/// One visitor's conversation with FinBot.
///
/// Holds the transcript and the in-flight guard. The outstanding request, if
/// any, is registered through [`ConversationSession::track`] and aborted when
/// the session is cancelled or dropped.
#[derive(Debug, Default)]
pub struct ConversationSession {
    messages: Vec<ChatMessage>,
    in_flight: bool,
    pending: Option<AbortHandle>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Record a user message and produce the request to send for it.
    ///
    /// The request's history is the transcript as it stood before `text` was
    /// appended.
    pub fn begin(&mut self, text: &str) -> Result<GenerateRequest, Rejection> {
        if text.trim().is_empty() {
            return Err(Rejection::EmptyInput);
        }
        if self.in_flight {
            return Err(Rejection::RequestInFlight);
        }

        let request = GenerateRequest::new(self.messages.clone(), text);
        self.messages.push(ChatMessage::user(text));
        self.in_flight = true;
        Ok(request)
    }

    /// Attach the abort handle of the request started by [`begin`](Self::begin).
    pub fn track(&mut self, handle: AbortHandle) {
        if self.in_flight {
            if let Some(previous) = self.pending.replace(handle) {
                previous.abort();
            }
        } else {
            handle.abort();
        }
    }

    /// Settle the outstanding request. Returns the appended model message, or
    /// `None` when nothing was in flight (e.g. the request was cancelled).
    pub fn resolve(&mut self, outcome: ChatResult<String>) -> Option<&ChatMessage> {
        if !self.in_flight {
            return None;
        }

        let text = match outcome {
            Ok(reply) if reply.is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "companion request failed");
                ERROR_REPLY.to_string()
            }
        };

        self.in_flight = false;
        self.pending = None;
        self.messages.push(ChatMessage::model(text));
        self.messages.last()
    }

    /// Abort the outstanding request without touching the transcript.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if self.in_flight {
            tracing::debug!("companion request cancelled");
            self.in_flight = false;
        }
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
