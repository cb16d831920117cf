//! Transport adapter for the send-email endpoint
//!
//! The controller only knows the [`EmailTransport`] trait; the one real
//! implementation, [`HttpTransport`], POSTs the multipart payload to
//! `{base_url}/api/email/send` with `reqwest`. Content type and boundary of
//! the multipart encoding are computed by the client library, never set by
//! hand.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::MailformConfig;
use crate::error::SendError;
use crate::payload::EmailPayload;

/// Fixed path of the send-email endpoint, appended to the configured base
/// URL.
pub const SEND_PATH: &str = "/api/email/send";

/// A successful (2xx) response from the send-email endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    /// The optional top-level `message` string from the response body
    pub message: Option<String>,

    /// Raw response body text
    pub body: String,
}

/// Trait for delivering one submission attempt
///
/// Implemented by the HTTP transport and by test doubles
/// ([`crate::testing::StubTransport`], mockall's `MockEmailTransport`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Deliver one payload
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the request cannot be assembled or sent, or
    /// if the server answers with a non-success status.
    async fn send(&self, payload: EmailPayload) -> Result<SendResponse, SendError>;
}

/// `reqwest`-backed transport for the send-email endpoint
///
/// # Examples
///
/// ```rust,no_run
/// use mailform::config::MailformConfig;
/// use mailform::transport::HttpTransport;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = MailformConfig::load()?;
/// let transport = HttpTransport::new(&config)?;
/// assert!(transport.endpoint().ends_with("/api/email/send"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Client`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &MailformConfig) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|err| SendError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// The full endpoint URL this transport POSTs to
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.base_url)
    }
}

#[async_trait]
impl EmailTransport for HttpTransport {
    async fn send(&self, payload: EmailPayload) -> Result<SendResponse, SendError> {
        let endpoint = self.endpoint();
        debug!(
            %endpoint,
            recipients = payload.recipient_count(),
            attachment = payload.has_attachment(),
            "submitting email batch"
        );

        let form = multipart_form(payload)?;
        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| SendError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SendError::Network(err.to_string()))?;
        let message = extract_message(&body);

        if status.is_success() {
            debug!(status = status.as_u16(), "server accepted email batch");
            Ok(SendResponse { message, body })
        } else {
            warn!(status = status.as_u16(), "server rejected email batch");
            Err(SendError::Server {
                status: status.as_u16(),
                message,
                body,
            })
        }
    }
}

/// Builds the multipart form: `recipients`, `subject`, `message`, then the
/// optional `file` part, in that order. The recipient text goes over the
/// wire raw; the server re-parses it.
fn multipart_form(payload: EmailPayload) -> Result<reqwest::multipart::Form, SendError> {
    let mut form = reqwest::multipart::Form::new()
        .text("recipients", payload.recipients)
        .text("subject", payload.subject)
        .text("message", payload.message);

    if let Some(attachment) = payload.attachment {
        let part = reqwest::multipart::Part::bytes(attachment.data)
            .file_name(attachment.file_name)
            .mime_str(&attachment.media_type)
            .map_err(|err| SendError::Payload(err.to_string()))?;
        form = form.part("file", part);
    }

    Ok(form)
}

/// Extracts the optional top-level `message` string from a JSON body.
/// Non-JSON bodies and non-string `message` fields yield `None`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(ToOwned::to_owned)
}
