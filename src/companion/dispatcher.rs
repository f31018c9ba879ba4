use super::session::{ConversationSession, Rejection};
use crate::ai::{ChatError, ChatResult, GenerateRequest, LanguageModel, shared_model};
use crate::types::ChatMessage;
use async_trait::async_trait;
use futures::FutureExt;
use futures::future::{Aborted, BoxFuture, abortable};
use std::sync::Arc;

/// Turns submitted text into a model request and a transcript update.
#[derive(Clone)]
pub struct Dispatcher {
    model: Arc<dyn LanguageModel>,
}

/// How a [`Dispatcher::submit`] call ended. Failures are already folded into
/// the transcript; this only reports what happened.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Replied(ChatMessage),
    Cancelled,
}

/// A request that has been recorded in the session but not yet answered.
#[must_use = "the reply must be awaited and passed back to the session"]
pub struct PendingReply {
    inner: BoxFuture<'static, Result<ChatResult<String>, Aborted>>,
}

impl PendingReply {
    /// Resolves to `None` if the owning session cancelled the request.
    pub async fn wait(self) -> Option<ChatResult<String>> {
        self.inner.await.ok()
    }
}

impl Dispatcher {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Dispatcher over the process-wide client, or [`Dispatcher::unconfigured`]
    /// when no provider credential is present.
    pub fn from_shared_model() -> Self {
        match shared_model() {
            Ok(model) => Self::new(model),
            Err(err) => {
                tracing::warn!(error = %err, "FinBot has no language model");
                Self::unconfigured()
            }
        }
    }

    /// Accepts submissions as usual, but every request fails with
    /// [`ChatError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self::new(Arc::new(Unconfigured))
    }

    /// Append the user message and fire the request.
    ///
    /// The returned reply is registered with `session` so that cancelling or
    /// dropping the session aborts it.
    pub fn start(
        &self,
        session: &mut ConversationSession,
        text: &str,
    ) -> Result<PendingReply, Rejection> {
        let request = session.begin(text)?;
        tracing::debug!(history = request.history.len(), "dispatching companion request");

        let model = Arc::clone(&self.model);
        let (future, handle) = abortable(async move { model.generate(&request).await });
        session.track(handle);

        Ok(PendingReply {
            inner: future.boxed(),
        })
    }

    /// Submit `text` and wait for the reply to land in the transcript.
    ///
    /// Never fails: rejections are reported in the outcome, and service
    /// errors become the standard error message. Dropping the returned
    /// future cancels the request and leaves the session idle.
    pub async fn submit(&self, session: &mut ConversationSession, text: &str) -> SubmitOutcome {
        let pending = match self.start(session, text) {
            Ok(pending) => pending,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };

        let mut guard = CancelOnDrop(session);
        let reply = match pending.wait().await {
            Some(outcome) => guard.0.resolve(outcome).cloned(),
            None => None,
        };
        reply.map_or(SubmitOutcome::Cancelled, SubmitOutcome::Replied)
    }
}

struct Unconfigured;

#[async_trait]
impl LanguageModel for Unconfigured {
    async fn generate(&self, _request: &GenerateRequest) -> ChatResult<String> {
        Err(ChatError::NotConfigured)
    }
}

/// Cancels whatever is still outstanding when the submit future goes away.
struct CancelOnDrop<'a>(&'a mut ConversationSession);

impl Drop for CancelOnDrop<'_> {
    fn drop(&mut self) {
        self.0.cancel();
    }
}
