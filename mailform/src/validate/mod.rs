//! Pure input classification for the submission form
//!
//! Everything in this module is side-effect free: functions take the raw
//! field text (or a candidate [`Attachment`]) and return a verdict. Nothing
//! here performs I/O, and malformed input never panics — it is simply
//! classified as invalid.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::attachment::Attachment;

/// Media types a candidate attachment may declare: PDF, legacy Word, and
/// OOXML Word.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum attachment size in bytes (5 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Syntactic email shape: one `@`, no whitespace on either side, at least
/// one `.` in the domain segment. Deliberately shallow — no MX or domain
/// existence checks.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email shape pattern is valid")
});

/// Why a candidate attachment was rejected at selection time
///
/// The `Display` impl renders the user-facing field error, so front-ends
/// can show the reason verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttachmentRejection {
    /// Declared media type is not PDF, DOC, or DOCX
    #[error("Only PDF or DOC/DOCX files are allowed.")]
    InvalidType,

    /// File exceeds the 5 MiB ceiling
    #[error("File is too large. Max 5MB allowed.")]
    TooLarge,
}

/// Splits raw recipient text into trimmed, non-empty entries
///
/// This is the single definition of the comma-split rule: split on commas,
/// trim each piece, drop pieces that are empty after trimming. The raw text
/// itself is what goes over the wire — the server re-parses it — so this is
/// only used for validation and display.
///
/// # Examples
///
/// ```rust
/// use mailform::validate::split_recipients;
///
/// let entries: Vec<&str> = split_recipients(" a@b.com ,, c@d.com ").collect();
/// assert_eq!(entries, vec!["a@b.com", "c@d.com"]);
/// ```
pub fn split_recipients(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Checks whether recipient text parses to a non-empty list of
/// email-shaped entries
///
/// Input consisting only of commas and whitespace yields an empty sequence
/// and is therefore invalid.
///
/// # Examples
///
/// ```rust
/// use mailform::validate::is_valid_recipient_list;
///
/// assert!(is_valid_recipient_list("a@b.com, c@d.com"));
/// assert!(!is_valid_recipient_list(","));
/// assert!(!is_valid_recipient_list("a@b.com, not-an-email"));
/// ```
#[must_use]
pub fn is_valid_recipient_list(text: &str) -> bool {
    let mut entries = split_recipients(text).peekable();
    entries.peek().is_some() && entries.all(|entry| EMAIL_SHAPE.is_match(entry))
}

/// Checks whether a subject line is non-empty after trimming
///
/// No length ceiling is applied.
#[must_use]
pub fn is_valid_subject(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Classifies a candidate attachment against the type and size constraints
///
/// The declared media type is compared by MIME essence, so parameters and
/// casing (`application/PDF; charset=utf-8`) do not affect the verdict.
/// The type check takes precedence: a file that is both the wrong type and
/// too large is reported as [`AttachmentRejection::InvalidType`].
///
/// A file that fails classification must never be stored in the form state;
/// callers reject it at selection time, not at submit time.
///
/// # Errors
///
/// Returns the [`AttachmentRejection`] describing why the file was refused.
///
/// # Examples
///
/// ```rust
/// use mailform::attachment::Attachment;
/// use mailform::validate::{classify_attachment, AttachmentRejection};
///
/// let pdf = Attachment::new("resume.pdf", "application/pdf", vec![0x25, 0x50]);
/// assert!(classify_attachment(&pdf).is_ok());
///
/// let png = Attachment::new("photo.png", "image/png", vec![0x89, 0x50]);
/// assert_eq!(
///     classify_attachment(&png),
///     Err(AttachmentRejection::InvalidType)
/// );
/// ```
pub fn classify_attachment(file: &Attachment) -> Result<(), AttachmentRejection> {
    let type_allowed = file
        .media_type
        .parse::<mime::Mime>()
        .is_ok_and(|media_type| ALLOWED_MEDIA_TYPES.contains(&media_type.essence_str()));

    if !type_allowed {
        return Err(AttachmentRejection::InvalidType);
    }
    if file.size() > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentRejection::TooLarge);
    }
    Ok(())
}
