//! Testing utilities
//!
//! Provides [`StubTransport`], an in-memory [`EmailTransport`] double that
//! captures sent payloads and replays queued outcomes, for integration
//! tests and downstream consumers. Unit tests inside this crate can also
//! use the mockall-generated `MockEmailTransport`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SendError;
use crate::payload::EmailPayload;
use crate::transport::{EmailTransport, SendResponse};

/// In-memory transport double
///
/// Captures every payload handed to [`EmailTransport::send`] and answers
/// with queued outcomes in order. When the queue is empty, it answers with
/// an empty-bodied success.
///
/// # Examples
///
/// ```rust
/// use mailform::form::{FormEvent, SubmissionController};
/// use mailform::testing::StubTransport;
///
/// # async fn example() {
/// let mut controller =
///     SubmissionController::new(StubTransport::succeeding_with("Sent 1 email"));
/// controller.dispatch(FormEvent::RecipientsChanged("x@y.com".into()));
/// controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
/// controller.submit().await;
///
/// assert_eq!(controller.transport().sent_count(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct StubTransport {
    outcomes: Mutex<VecDeque<Result<SendResponse, SendError>>>,
    sent: Mutex<Vec<EmailPayload>>,
}

impl StubTransport {
    /// Create a stub with no queued outcomes (every send succeeds with an
    /// empty body)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub whose next send succeeds with a `{"message": ...}`
    /// body
    #[must_use]
    pub fn succeeding_with(message: &str) -> Self {
        let stub = Self::new();
        stub.queue_outcome(Ok(SendResponse {
            message: Some(message.to_string()),
            body: serde_json::json!({ "message": message }).to_string(),
        }));
        stub
    }

    /// Create a stub whose next send fails with the given error
    #[must_use]
    pub fn failing_with(error: SendError) -> Self {
        let stub = Self::new();
        stub.queue_outcome(Err(error));
        stub
    }

    /// Queue one more outcome to replay
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    pub fn queue_outcome(&self, outcome: Result<SendResponse, SendError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Number of payloads sent through this stub
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// All payloads sent through this stub, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_payloads(&self) -> Vec<EmailPayload> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recently sent payload
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn last_sent(&self) -> Option<EmailPayload> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailTransport for StubTransport {
    async fn send(&self, payload: EmailPayload) -> Result<SendResponse, SendError> {
        self.sent.lock().unwrap().push(payload);
        self.outcomes.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(SendResponse {
                message: None,
                body: String::new(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmailPayload {
        EmailPayload {
            recipients: "a@b.com".to_string(),
            subject: "Hello".to_string(),
            message: String::new(),
            attachment: None,
        }
    }

    #[tokio::test]
    async fn test_stub_records_payloads() {
        let stub = StubTransport::new();
        stub.send(payload()).await.unwrap();
        stub.send(payload()).await.unwrap();

        assert_eq!(stub.sent_count(), 2);
        assert_eq!(stub.last_sent().unwrap().recipients, "a@b.com");
    }

    #[tokio::test]
    async fn test_stub_replays_queued_outcomes_in_order() {
        let stub = StubTransport::succeeding_with("first");
        stub.queue_outcome(Err(SendError::Network("boom".to_string())));

        let first = stub.send(payload()).await.unwrap();
        assert_eq!(first.message.as_deref(), Some("first"));

        let second = stub.send(payload()).await;
        assert_eq!(second, Err(SendError::Network("boom".to_string())));
    }

    #[tokio::test]
    async fn test_exhausted_queue_defaults_to_empty_success() {
        let stub = StubTransport::new();
        let response = stub.send(payload()).await.unwrap();
        assert_eq!(response.message, None);
        assert_eq!(response.body, "");
    }
}
