//! Submission payload captured from form state
//!
//! The payload is a plain value snapshotted at submit time, so a field edit
//! made while a request is in flight can never alter the bytes already on
//! the wire. The multipart encoding itself (content type, boundary) is the
//! transport's job — see [`crate::transport`].

use crate::attachment::Attachment;
use crate::form::FormState;
use crate::validate::split_recipients;

/// One submission attempt's worth of form data
///
/// Field order mirrors the multipart body: `recipients`, `subject`,
/// `message`, then the optional `file` part. The recipient text is carried
/// raw and comma-separated, exactly as typed — the server is the party that
/// re-parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPayload {
    /// Raw recipient text as typed (comma-separated, not pre-split)
    pub recipients: String,

    /// Raw subject text
    pub subject: String,

    /// Raw message body; may be empty — message content is optional
    pub message: String,

    /// Attachment to send under the `file` part, if one is held
    pub attachment: Option<Attachment>,
}

impl EmailPayload {
    /// Snapshots the current form fields into a payload
    #[must_use]
    pub fn from_state(state: &FormState) -> Self {
        Self {
            recipients: state.recipients.clone(),
            subject: state.subject.clone(),
            message: state.message.clone(),
            attachment: state.attachment.clone(),
        }
    }

    /// Number of recipient entries after the comma-split rule
    ///
    /// Display/logging convenience only — the raw text is what is sent.
    #[must_use]
    pub fn recipient_count(&self) -> usize {
        split_recipients(&self.recipients).count()
    }

    /// Whether a `file` part will be present
    #[must_use]
    pub const fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEvent;

    #[test]
    fn test_snapshot_copies_fields() {
        let state = FormState::default()
            .apply(FormEvent::RecipientsChanged("a@b.com, c@d.com".into()))
            .apply(FormEvent::SubjectChanged("Hello".into()))
            .apply(FormEvent::MessageChanged("Body".into()));

        let payload = EmailPayload::from_state(&state);
        assert_eq!(payload.recipients, "a@b.com, c@d.com");
        assert_eq!(payload.subject, "Hello");
        assert_eq!(payload.message, "Body");
        assert!(!payload.has_attachment());
        assert_eq!(payload.recipient_count(), 2);
    }

    #[test]
    fn test_recipient_text_is_not_transformed() {
        let state = FormState::default()
            .apply(FormEvent::RecipientsChanged("  a@b.com ,, c@d.com ".into()));

        let payload = EmailPayload::from_state(&state);
        // The raw text goes over the wire untouched; only the count helper
        // applies the split rule.
        assert_eq!(payload.recipients, "  a@b.com ,, c@d.com ");
        assert_eq!(payload.recipient_count(), 2);
    }

    #[test]
    fn test_later_edits_do_not_reach_a_snapshot() {
        let state = FormState::default()
            .apply(FormEvent::RecipientsChanged("a@b.com".into()));
        let payload = EmailPayload::from_state(&state);

        let _edited = state.apply(FormEvent::RecipientsChanged("z@z.com".into()));
        assert_eq!(payload.recipients, "a@b.com");
    }
}
