//! mailform: a client for submitting one email to a batch of recipients
//!
//! This crate implements the client side of a "send bulk email" endpoint:
//! it validates operator input (a comma-separated recipient list, a subject
//! line, an optional resume-type attachment), assembles a multipart
//! payload, and drives the asynchronous submission lifecycle
//! (idle → sending → succeeded/failed) so a front-end only has to render
//! the resulting [`form::FormState`].
//!
//! # Design Principles
//!
//! 1. **Pure validation**: the [`validate`] module has no I/O and no side
//!    effects; it only classifies input.
//! 2. **Explicit state**: every user interaction is a [`form::FormEvent`]
//!    applied to a [`form::FormState`] value, so the whole lifecycle is
//!    unit-testable without a UI harness.
//! 3. **Injected transport**: the HTTP layer sits behind the
//!    [`transport::EmailTransport`] trait; the backend base URL is explicit
//!    configuration, never ambient global state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mailform::config::MailformConfig;
//! use mailform::form::{FormEvent, SubmissionController};
//! use mailform::transport::HttpTransport;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = MailformConfig::load()?;
//! let transport = HttpTransport::new(&config)?;
//! let mut controller = SubmissionController::new(transport);
//!
//! controller.dispatch(FormEvent::RecipientsChanged(
//!     "a@example.com, b@example.com".into(),
//! ));
//! controller.dispatch(FormEvent::SubjectChanged("Quarterly update".into()));
//! controller.submit().await;
//!
//! println!("{}", controller.state().status);
//! # Ok(())
//! # }
//! ```

pub mod attachment;
pub mod config;
pub mod error;
pub mod form;
pub mod observability;
pub mod payload;
pub mod testing;
pub mod transport;
pub mod validate;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use mailform::prelude::*;
    //! ```

    // Form state machine
    pub use crate::form::{
        FormEvent, FormState, SubmissionController, SubmissionStatus,
    };

    // Validation
    pub use crate::validate::{
        classify_attachment, is_valid_recipient_list, is_valid_subject,
        split_recipients, AttachmentRejection,
    };

    // Attachments and payload
    pub use crate::attachment::Attachment;
    pub use crate::payload::EmailPayload;

    // Transport
    pub use crate::transport::{EmailTransport, HttpTransport, SendResponse};

    // Errors
    pub use crate::error::SendError;

    // Configuration
    pub use crate::config::MailformConfig;
}
