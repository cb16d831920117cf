//! Submission orchestration
//!
//! [`SubmissionController`] owns the [`FormState`] and runs one request
//! lifecycle per submit: pre-submit validation, payload snapshot, transport
//! call, status transition. The transport is injected at construction, so
//! the controller is testable with a double and the backend base URL never
//! comes from ambient global state.

use tracing::{debug, info, warn};

use crate::error::SendError;
use crate::payload::EmailPayload;
use crate::transport::{EmailTransport, SendResponse};
use crate::validate::{is_valid_recipient_list, is_valid_subject};

use super::state::{FormEvent, FormState};
use super::status::SubmissionStatus;

/// Banner shown when the recipient list fails validation.
pub const MSG_INVALID_RECIPIENTS: &str = "Please provide one or more valid email addresses.";

/// Banner shown when the subject is empty after trimming.
pub const MSG_EMPTY_SUBJECT: &str = "Subject cannot be empty.";

/// Success banner used when the server response body is empty.
pub const MSG_SENT_FALLBACK: &str = "Emails sent";

/// Failure banner used when no server message or transport description is
/// available.
pub const MSG_SEND_FAILED_FALLBACK: &str = "Error sending emails";

/// Drives the submission lifecycle over an injected transport
///
/// # Examples
///
/// ```rust
/// use mailform::form::{FormEvent, SubmissionController};
/// use mailform::testing::StubTransport;
///
/// # async fn example() {
/// let mut controller =
///     SubmissionController::new(StubTransport::succeeding_with("Sent 2 emails"));
///
/// controller.dispatch(FormEvent::RecipientsChanged("a@b.com, c@d.com".into()));
/// controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
/// controller.submit().await;
///
/// assert_eq!(controller.state().status.message(), Some("Sent 2 emails"));
/// # }
/// ```
#[derive(Debug)]
pub struct SubmissionController<T> {
    state: FormState,
    transport: T,
}

impl<T: EmailTransport> SubmissionController<T> {
    /// Creates a controller with an empty form
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_state(transport, FormState::default())
    }

    /// Creates a controller resuming from an existing form state
    #[must_use]
    pub const fn with_state(transport: T, state: FormState) -> Self {
        Self { state, transport }
    }

    /// The current form state, for rendering
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// The injected transport
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Applies one field-edit event to the form
    pub fn dispatch(&mut self, event: FormEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Runs one submission attempt
    ///
    /// Ignored while a previous attempt is still in flight. Otherwise:
    /// clears any displayed banner and attachment error, validates
    /// recipients then subject (each short-circuits to `Failed` with no
    /// network call), snapshots the payload, transitions to `Sending`,
    /// invokes the transport, and maps the outcome to a terminal status.
    /// Both completion paths replace `Sending`; the state can never remain
    /// in flight after the attempt concludes.
    pub async fn submit(&mut self) {
        if self.state.status.is_sending() {
            debug!("submit ignored: a submission is already in flight");
            return;
        }

        self.state.status = SubmissionStatus::Idle;
        self.state.attachment_error = None;

        if !is_valid_recipient_list(&self.state.recipients) {
            debug!("submit rejected: recipient list failed validation");
            self.state.status = SubmissionStatus::Failed(MSG_INVALID_RECIPIENTS.to_string());
            return;
        }

        if !is_valid_subject(&self.state.subject) {
            debug!("submit rejected: empty subject");
            self.state.status = SubmissionStatus::Failed(MSG_EMPTY_SUBJECT.to_string());
            return;
        }

        let payload = EmailPayload::from_state(&self.state);
        self.state.status = SubmissionStatus::Sending;

        let outcome = self.transport.send(payload).await;

        // Single convergence point: both arms replace `Sending`.
        self.state.status = match outcome {
            Ok(response) => {
                info!("email batch accepted by server");
                SubmissionStatus::Succeeded(success_banner(&response))
            }
            Err(error) => {
                warn!(%error, "email batch submission failed");
                SubmissionStatus::Failed(failure_banner(&error))
            }
        };
    }
}

/// Success banner: server message, else the raw response body, else the
/// generic fallback. Serializing the whole body when no `message` field is
/// present is specified behavior inherited from the original form.
fn success_banner(response: &SendResponse) -> String {
    if let Some(message) = response.message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    if response.body.trim().is_empty() {
        MSG_SENT_FALLBACK.to_string()
    } else {
        response.body.clone()
    }
}

/// Failure banner: server message, else the transport description, else the
/// generic fallback.
fn failure_banner(error: &SendError) -> String {
    if let Some(message) = error.server_message().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    let description = error.to_string();
    if description.is_empty() {
        MSG_SEND_FAILED_FALLBACK.to_string()
    } else {
        description
    }
}
