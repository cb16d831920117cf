//! End-to-end submission lifecycle tests against the stub transport

use mailform::attachment::Attachment;
use mailform::error::SendError;
use mailform::form::{
    FormEvent, SubmissionController, SubmissionStatus, MSG_EMPTY_SUBJECT, MSG_INVALID_RECIPIENTS,
};
use mailform::testing::StubTransport;
use mailform::validate::AttachmentRejection;

fn controller_with(stub: StubTransport) -> SubmissionController<StubTransport> {
    SubmissionController::new(stub)
}

#[tokio::test]
async fn successful_batch_reports_server_message() {
    let mut controller = controller_with(StubTransport::succeeding_with("Sent 1 email"));

    controller.dispatch(FormEvent::RecipientsChanged("x@y.com".into()));
    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
    controller.dispatch(FormEvent::MessageChanged(String::new()));
    controller.submit().await;

    assert_eq!(
        controller.state().status,
        SubmissionStatus::Succeeded("Sent 1 email".to_string())
    );

    let payload = controller.transport().last_sent().expect("one send");
    assert_eq!(payload.recipients, "x@y.com");
    assert_eq!(payload.subject, "Hello");
    assert_eq!(payload.message, "");
    assert!(payload.attachment.is_none());
}

#[tokio::test]
async fn empty_recipients_fail_without_any_network_call() {
    let mut controller = controller_with(StubTransport::new());

    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
    controller.submit().await;

    assert_eq!(
        controller.state().status,
        SubmissionStatus::Failed(MSG_INVALID_RECIPIENTS.to_string())
    );
    assert_eq!(controller.transport().sent_count(), 0);
}

#[tokio::test]
async fn whitespace_subject_fails_without_any_network_call() {
    let mut controller = controller_with(StubTransport::new());

    controller.dispatch(FormEvent::RecipientsChanged("a@b.com, c@d.com".into()));
    controller.dispatch(FormEvent::SubjectChanged("  ".into()));
    controller.submit().await;

    assert_eq!(
        controller.state().status,
        SubmissionStatus::Failed(MSG_EMPTY_SUBJECT.to_string())
    );
    assert_eq!(controller.transport().sent_count(), 0);
}

#[tokio::test]
async fn server_rejection_surfaces_server_message() {
    let mut controller = controller_with(StubTransport::failing_with(SendError::Server {
        status: 422,
        message: Some("Invalid subject".to_string()),
        body: r#"{"message":"Invalid subject"}"#.to_string(),
    }));

    controller.dispatch(FormEvent::RecipientsChanged("x@y.com".into()));
    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
    controller.submit().await;

    assert_eq!(
        controller.state().status,
        SubmissionStatus::Failed("Invalid subject".to_string())
    );
    assert_eq!(controller.transport().sent_count(), 1);
}

#[tokio::test]
async fn rejected_attachment_sets_field_error_and_is_not_held() {
    let mut controller = controller_with(StubTransport::new());

    let png = Attachment::new("photo.png", "image/png", vec![0x89, 0x50, 0x4E, 0x47]);
    controller.dispatch(FormEvent::AttachmentSelected(png));

    let state = controller.state();
    assert_eq!(state.attachment, None);
    assert_eq!(state.attachment_error, Some(AttachmentRejection::InvalidType));
    assert_eq!(
        state.attachment_error.unwrap().to_string(),
        "Only PDF or DOC/DOCX files are allowed."
    );
}

#[tokio::test]
async fn held_attachment_rides_along_in_the_file_part() {
    let mut controller = controller_with(StubTransport::succeeding_with("Sent 1 email"));

    controller.dispatch(FormEvent::RecipientsChanged("x@y.com".into()));
    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
    controller.dispatch(FormEvent::AttachmentSelected(Attachment::new(
        "resume.pdf",
        "application/pdf",
        b"%PDF-1.4 fake".to_vec(),
    )));
    controller.submit().await;

    let payload = controller.transport().last_sent().expect("one send");
    let attachment = payload.attachment.expect("file part present");
    assert_eq!(attachment.file_name, "resume.pdf");
    assert_eq!(attachment.media_type, "application/pdf");
}

#[tokio::test]
async fn failed_attempt_is_re_enterable_after_a_fix() {
    let stub = StubTransport::failing_with(SendError::Network("connection refused".to_string()));
    stub.queue_outcome(Ok(mailform::transport::SendResponse {
        message: Some("Sent 2 emails".to_string()),
        body: r#"{"message":"Sent 2 emails"}"#.to_string(),
    }));
    let mut controller = controller_with(stub);

    controller.dispatch(FormEvent::RecipientsChanged("a@b.com, c@d.com".into()));
    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));

    controller.submit().await;
    assert_eq!(
        controller.state().status,
        SubmissionStatus::Failed("network error: connection refused".to_string())
    );

    // Fields stay editable; an edit clears the banner and submit re-enters
    // the cycle from validation.
    controller.dispatch(FormEvent::MessageChanged("second try".into()));
    assert!(controller.state().status.is_idle());

    controller.submit().await;
    assert_eq!(
        controller.state().status,
        SubmissionStatus::Succeeded("Sent 2 emails".to_string())
    );
    assert_eq!(controller.transport().sent_count(), 2);
}

#[tokio::test]
async fn validation_failure_leaves_previous_fields_intact() {
    let mut controller = controller_with(StubTransport::new());

    controller.dispatch(FormEvent::RecipientsChanged("not-an-email".into()));
    controller.dispatch(FormEvent::SubjectChanged("Hello".into()));
    controller.dispatch(FormEvent::MessageChanged("Body".into()));
    controller.submit().await;

    let state = controller.state();
    assert!(state.status.is_failed());
    assert_eq!(state.recipients, "not-an-email");
    assert_eq!(state.subject, "Hello");
    assert_eq!(state.message, "Body");
}
