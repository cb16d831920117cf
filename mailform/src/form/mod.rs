//! Form state machine and submission lifecycle
//!
//! The form is modeled as an explicit [`FormState`] value plus pure
//! transition functions: every user interaction is a [`FormEvent`] applied
//! through [`FormState::apply`], and the one asynchronous step — the
//! network submission — is orchestrated by [`SubmissionController`]. This
//! keeps the whole lifecycle deterministic and unit-testable without a UI
//! harness.

mod controller;
mod state;
mod status;

pub use controller::{
    SubmissionController, MSG_EMPTY_SUBJECT, MSG_INVALID_RECIPIENTS, MSG_SEND_FAILED_FALLBACK,
    MSG_SENT_FALLBACK,
};
pub use state::{FormEvent, FormState};
pub use status::SubmissionStatus;
