//! Candidate attachment files
//!
//! An [`Attachment`] is the in-memory form of a file the operator picked:
//! display name, declared media type, and the raw bytes. Classification
//! against the type/size constraints lives in [`crate::validate`]; this
//! module only represents the file and derives a declared media type for
//! files loaded from disk.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

/// A single candidate file accompanying the email
///
/// # Examples
///
/// ```rust
/// use mailform::attachment::Attachment;
///
/// let file = Attachment::new(
///     "resume.pdf",
///     "application/pdf",
///     vec![0x25, 0x50, 0x44, 0x46], // PDF magic bytes
/// );
///
/// assert_eq!(file.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name, preserved in the multipart `file` part
    pub file_name: String,

    /// Declared media type (e.g. `application/pdf`)
    pub media_type: String,

    /// File content
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from its parts
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            data,
        }
    }

    /// Reads a candidate attachment from disk
    ///
    /// The declared media type is derived from the file content (magic
    /// numbers) with the file extension as a fallback — a stand-in for the
    /// type a browser file picker would report.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if the file cannot be read.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use mailform::attachment::Attachment;
    ///
    /// # fn example() -> std::io::Result<()> {
    /// let file = Attachment::from_path("cv/resume.pdf")?;
    /// assert_eq!(file.file_name, "resume.pdf");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "attachment".to_string(), |name| name.to_string_lossy().into_owned());
        let media_type = detect_media_type(path, &data);
        Ok(Self::new(file_name, media_type, data))
    }

    /// Returns the size of the file in bytes
    #[must_use]
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns the size in whole kibibytes, for display next to the file
    /// name
    #[must_use]
    pub fn size_kib(&self) -> u64 {
        self.size() / 1024
    }
}

/// Derives a declared media type for a file loaded from disk
///
/// Magic-number detection via `infer` comes first; when the content is not
/// recognizable (legacy `.doc` files often are not), the extension decides;
/// anything else falls back to `application/octet-stream`.
#[must_use]
pub fn detect_media_type(path: &Path, data: &[u8]) -> String {
    if let Some(kind) = infer::get(data) {
        return kind.mime_type().to_string();
    }

    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf".to_string(),
        Some("doc") => "application/msword".to_string(),
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string()
        }
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}
