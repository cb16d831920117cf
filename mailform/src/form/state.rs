//! Form state and field-edit events

use crate::attachment::Attachment;
use crate::validate::{classify_attachment, AttachmentRejection};

use super::status::SubmissionStatus;

/// A discrete user interaction with the form fields
///
/// Submitting is not an event here — it is the asynchronous operation on
/// [`super::SubmissionController`], because it is the only interaction that
/// suspends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The recipients text was edited
    RecipientsChanged(String),

    /// The subject text was edited
    SubjectChanged(String),

    /// The message body text was edited
    MessageChanged(String),

    /// A candidate file was picked; it is classified before being held
    AttachmentSelected(Attachment),

    /// The held attachment was removed
    AttachmentRemoved,
}

/// The aggregate state of the submission form
///
/// Created empty when the form is constructed and mutated only through
/// [`FormState::apply`] or the controller's submit path. Nothing here is
/// shared outside the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Raw recipients text (comma-separated addresses)
    pub recipients: String,

    /// Raw subject text
    pub subject: String,

    /// Raw message body text; optional content
    pub message: String,

    /// The currently held attachment, if a candidate passed classification
    pub attachment: Option<Attachment>,

    /// Field-local rejection reason from the last attachment selection
    pub attachment_error: Option<AttachmentRejection>,

    /// Current point in the submission lifecycle
    pub status: SubmissionStatus,
}

impl FormState {
    /// Applies one field-edit event, returning the next state
    ///
    /// Every edit clears a displayed success/error banner (an in-flight
    /// `Sending` is untouched — an edit does not abort a pending request).
    /// Attachment events additionally clear the field-local rejection
    /// reason before re-evaluating: a candidate that fails classification
    /// is discarded and never stored, leaving the rejection reason set in
    /// its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mailform::form::{FormEvent, FormState};
    ///
    /// let state = FormState::default()
    ///     .apply(FormEvent::RecipientsChanged("a@b.com".into()))
    ///     .apply(FormEvent::SubjectChanged("Hello".into()));
    ///
    /// assert_eq!(state.recipients, "a@b.com");
    /// assert!(state.status.is_idle());
    /// ```
    #[must_use]
    pub fn apply(mut self, event: FormEvent) -> Self {
        self.status = self.status.clear_banner();

        match event {
            FormEvent::RecipientsChanged(text) => self.recipients = text,
            FormEvent::SubjectChanged(text) => self.subject = text,
            FormEvent::MessageChanged(text) => self.message = text,
            FormEvent::AttachmentSelected(candidate) => {
                self.attachment_error = None;
                match classify_attachment(&candidate) {
                    Ok(()) => self.attachment = Some(candidate),
                    Err(reason) => {
                        self.attachment = None;
                        self.attachment_error = Some(reason);
                    }
                }
            }
            FormEvent::AttachmentRemoved => {
                self.attachment = None;
                self.attachment_error = None;
            }
        }

        self
    }
}
