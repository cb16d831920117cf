//! Configuration for the submission client
//!
//! Loaded from layered sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MAILFORM_` prefix)
//! 2. `./mailform.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # mailform.toml
//! backend_url = "https://mail.internal"
//! request_timeout_ms = 10000
//! ```
//!
//! The loaded value is passed explicitly into [`crate::transport`] and the
//! controller at construction time; nothing reads it from ambient global
//! state.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Default backend base URL when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Submission client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailformConfig {
    /// Base URL of the send-email backend
    pub backend_url: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for MailformConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl MailformConfig {
    /// Load configuration from defaults, `./mailform.toml`, and
    /// `MAILFORM_`-prefixed environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed (for example a
    /// `mailform.toml` that is not valid TOML, or an environment value of
    /// the wrong type).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mailform::config::MailformConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = MailformConfig::load()?;
    /// println!("sending via {}", config.backend_url);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("mailform.toml"))
            .merge(Env::prefixed("MAILFORM_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MailformConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_toml_layer_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "mailform.toml",
                r#"
                    backend_url = "https://mail.internal"
                "#,
            )?;

            let config = MailformConfig::load().expect("config loads");
            assert_eq!(config.backend_url, "https://mail.internal");
            // Untouched keys keep their defaults.
            assert_eq!(config.request_timeout_ms, 30_000);
            Ok(())
        });
    }

    #[test]
    fn test_env_layer_takes_precedence() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("mailform.toml", r#"backend_url = "https://from-toml""#)?;
            jail.set_env("MAILFORM_BACKEND_URL", "https://from-env");

            let config = MailformConfig::load().expect("config loads");
            assert_eq!(config.backend_url, "https://from-env");
            Ok(())
        });
    }
}
