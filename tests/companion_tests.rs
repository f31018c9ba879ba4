//! Integration tests for the FinBot conversation flow
//!
//! Drives `Dispatcher` + `ConversationSession` against mock language models.

use async_trait::async_trait;
use finfolio::ai::{ChatError, ChatResult, GenerateRequest, LanguageModel};
use finfolio::companion::{
    ConversationSession, Dispatcher, EMPTY_REPLY_FALLBACK, ERROR_REPLY, Rejection,
    SubmitOutcome,
};
use finfolio::types::{ChatMessage, Role};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// Answers every request the same way and remembers what it was asked.
struct ScriptedModel {
    reply: Option<String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(&self, request: &GenerateRequest) -> ChatResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(ChatError::Service {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

/// Holds its reply until the test releases it.
struct GatedModel {
    gate: Mutex<Option<oneshot::Receiver<String>>>,
    calls: Mutex<usize>,
}

impl GatedModel {
    fn new() -> (Arc<Self>, oneshot::Sender<String>) {
        let (tx, rx) = oneshot::channel();
        let model = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
            calls: Mutex::new(0),
        });
        (model, tx)
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LanguageModel for GatedModel {
    async fn generate(&self, _request: &GenerateRequest) -> ChatResult<String> {
        *self.calls.lock().unwrap() += 1;
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| ChatError::Provider("gate dropped".to_string())),
            None => Err(ChatError::Provider("gate already used".to_string())),
        }
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_exchange() {
        let model = ScriptedModel::replying("Invest in ELSS");
        let dispatcher = Dispatcher::new(model.clone());
        let mut session = ConversationSession::new();

        let outcome = dispatcher
            .submit(&mut session, "How can I save tax legally?")
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Replied(ChatMessage::model("Invest in ELSS"))
        );
        assert_eq!(
            session.messages(),
            &[
                ChatMessage::user("How can I save tax legally?"),
                ChatMessage::model("Invest in ELSS"),
            ]
        );
        assert!(!session.is_in_flight());

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].history.is_empty());
        assert_eq!(requests[0].prompt, "How can I save tax legally?");
        assert!(requests[0].system_instruction.contains("FinBot"));
    }

    #[tokio::test]
    async fn test_empty_submission_is_ignored() {
        let model = ScriptedModel::replying("unused");
        let dispatcher = Dispatcher::new(model.clone());
        let mut session = ConversationSession::new();

        for text in ["", "   ", "\n\t"] {
            let outcome = dispatcher.submit(&mut session, text).await;
            assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::EmptyInput));
        }

        assert_eq!(session.messages().len(), 0);
        assert!(!session.is_in_flight());
        assert!(model.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failure_becomes_error_message() {
        let dispatcher = Dispatcher::new(ScriptedModel::failing());
        let mut session = ConversationSession::new();

        let outcome = dispatcher.submit(&mut session, "Audit checklist?").await;

        assert_eq!(outcome, SubmitOutcome::Replied(ChatMessage::model(ERROR_REPLY)));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::Model);
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback() {
        let dispatcher = Dispatcher::new(ScriptedModel::replying(""));
        let mut session = ConversationSession::new();

        dispatcher.submit(&mut session, "Hello?").await;

        assert_eq!(session.messages()[1].text, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_credentials_still_record_the_question() {
        let dispatcher = Dispatcher::unconfigured();
        let mut session = ConversationSession::new();

        let outcome = dispatcher.submit(&mut session, "q").await;

        assert_eq!(outcome, SubmitOutcome::Replied(ChatMessage::model(ERROR_REPLY)));
        assert_eq!(
            session.messages(),
            &[ChatMessage::user("q"), ChatMessage::model(ERROR_REPLY)]
        );
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_conversation_remains_usable_after_failure() {
        let mut session = ConversationSession::new();
        Dispatcher::new(ScriptedModel::failing())
            .submit(&mut session, "first")
            .await;

        let model = ScriptedModel::replying("second answer");
        Dispatcher::new(model.clone())
            .submit(&mut session, "second")
            .await;

        assert_eq!(session.messages().len(), 4);
        let history = &model.requests()[0].history;
        assert_eq!(
            history,
            &vec![ChatMessage::user("first"), ChatMessage::model(ERROR_REPLY)]
        );
    }
}

mod in_flight_tests {
    use super::*;

    #[tokio::test]
    async fn test_second_submission_rejected_until_first_resolves() {
        let (model, release) = GatedModel::new();
        let dispatcher = Dispatcher::new(model.clone());
        let mut session = ConversationSession::new();

        let pending = dispatcher.start(&mut session, "A").expect("A accepted");
        assert!(matches!(
            dispatcher.start(&mut session, "B"),
            Err(Rejection::RequestInFlight)
        ));
        assert_eq!(session.messages(), &[ChatMessage::user("A")]);

        release.send("answer A".to_string()).unwrap();
        let outcome = pending.wait().await.expect("not cancelled");
        session.resolve(outcome);

        assert_eq!(
            session.messages(),
            &[ChatMessage::user("A"), ChatMessage::model("answer A")]
        );
        assert!(!session.is_in_flight());
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_reply() {
        let (model, release) = GatedModel::new();
        let dispatcher = Dispatcher::new(model);
        let mut session = ConversationSession::new();

        let pending = dispatcher.start(&mut session, "A").unwrap();
        session.cancel();
        let _ = release.send("too late".to_string());

        assert!(pending.wait().await.is_none());
        assert_eq!(session.messages(), &[ChatMessage::user("A")]);
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_dropping_session_aborts_request() {
        let (model, _release) = GatedModel::new();
        let dispatcher = Dispatcher::new(model);
        let mut session = ConversationSession::new();

        let pending = dispatcher.start(&mut session, "A").unwrap();
        drop(session);

        assert!(pending.wait().await.is_none());
    }

    #[tokio::test]
    async fn test_abandoned_submit_leaves_session_idle() {
        let (model, _release) = GatedModel::new();
        let dispatcher = Dispatcher::new(model);
        let mut session = ConversationSession::new();

        let result = tokio::time::timeout(
            Duration::from_millis(20),
            dispatcher.submit(&mut session, "A"),
        )
        .await;

        assert!(result.is_err());
        assert!(!session.is_in_flight());
        assert_eq!(session.messages(), &[ChatMessage::user("A")]);
    }
}
