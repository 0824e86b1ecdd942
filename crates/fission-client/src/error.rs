//! Error types for fission-client.

use thiserror::Error;

/// Result type alias for fission-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Literal failure message some HTTP transports emit when a request body
/// exceeds their configured body-length ceiling.
///
/// Matching on this string is the fallback discrimination path for
/// transports that expose no structured overflow signal. It is inherently
/// fragile (transport- and version-dependent); prefer
/// [`FileSizeError::new`] when the byte counts are known directly.
pub const TRANSPORT_OVERFLOW_MESSAGE: &str = "Request body larger than maxBodyLength limit";

/// Maximum content length assumed when the transport reports no explicit
/// ceiling: 10 MB.
const FALLBACK_MAX_CONTENT_LENGTH: u64 = 10_000_000;

/// Error type for the fission-client library.
#[derive(Error, Debug)]
pub enum Error {
    /// Upload rejected because the payload exceeds the content-length ceiling.
    #[error(transparent)]
    SizeLimit(#[from] FileSizeError),

    /// HTTP transport failure, propagated unmodified.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Non-success response from the gateway.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Response body, if one could be read.
        message: String,
    },

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an API error from a gateway response.
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Returns whether this error is a size-limit rejection.
    pub fn is_size_limit(&self) -> bool {
        matches!(self, Error::SizeLimit(_))
    }
}

/// Diagnostic for an upload that exceeded the content-length ceiling.
///
/// Immutable once constructed. `details` is a pure function of the two byte
/// counts: identical inputs always render byte-identical output, so the
/// string can be displayed to the end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("File size limit exceeded")]
pub struct FileSizeError {
    /// Size of the payload that was sent, in bytes.
    pub file_size_bytes: u64,
    /// Effective maximum, in bytes. Falls back to 10 MB when the transport
    /// reported no explicit ceiling.
    pub max_file_size_bytes: u64,
    /// Ready-to-display multi-line explanation of the failure.
    pub details: String,
}

impl FileSizeError {
    /// Builds a diagnostic from the attempted payload size and the
    /// configured maximum.
    ///
    /// `configured_max` of `None` means the transport had no explicit
    /// ceiling; the 10 MB fallback is substituted.
    pub fn new(file_size_bytes: u64, configured_max: Option<u64>) -> Self {
        let max_file_size_bytes = configured_max.unwrap_or(FALLBACK_MAX_CONTENT_LENGTH);
        let details = Self::render_details(file_size_bytes, max_file_size_bytes);

        Self {
            file_size_bytes,
            max_file_size_bytes,
            details,
        }
    }

    /// Builds a diagnostic from a transport that reports "no configured
    /// maximum" as a negative sentinel (conventionally `-1`).
    ///
    /// The sentinel is normalized here at the boundary; it never enters the
    /// diagnostic's internal model.
    pub fn from_limit_sentinel(file_size_bytes: u64, configured_max: i64) -> Self {
        let configured_max = u64::try_from(configured_max).ok();
        Self::new(file_size_bytes, configured_max)
    }

    /// Builds a diagnostic from a transport failure identified only by its
    /// textual message.
    ///
    /// Returns `Some` only when `message` equals
    /// [`TRANSPORT_OVERFLOW_MESSAGE`]; any other failure should propagate
    /// unmodified. See the fragility note on that constant.
    pub fn from_transport_message(
        message: &str,
        file_size_bytes: u64,
        configured_max: i64,
    ) -> Option<Self> {
        if message != TRANSPORT_OVERFLOW_MESSAGE {
            return None;
        }

        Some(Self::from_limit_sentinel(file_size_bytes, configured_max))
    }

    /// Formats a byte count as decimal megabytes with one decimal place,
    /// e.g. `101.0MB`. Overage can be negative; no clamping is applied.
    fn human_readable(bytes: f64) -> String {
        format!("{:.1}MB", bytes / 1_000_000.0)
    }

    fn render_details(file_size_bytes: u64, max_file_size_bytes: u64) -> String {
        let file_size = Self::human_readable(file_size_bytes as f64);
        let max_size = Self::human_readable(max_file_size_bytes as f64);
        let overage = Self::human_readable(file_size_bytes as f64 - max_file_size_bytes as f64);

        format!(
            "---
Oh no, the file you tried to add is too big 😲
You tried sending {file_size} but your current max is {max_size}.
That means your file was {overage} too big 😟

To solve this, you may want to try:
 * Compressing your file
 * Breaking the file into smaller files
 * Contacting the nice people at Fission for assistance

Warm Regards and sorry for the inconvenience,

The Fission Devs 🤗
---
"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1_000_000;

    #[test]
    fn test_copies_byte_counts() {
        let error = FileSizeError::new(101 * MB, Some(100 * MB));

        assert_eq!(error.file_size_bytes, 101 * MB);
        assert_eq!(error.max_file_size_bytes, 100 * MB);
    }

    #[test]
    fn test_details_content_and_length() {
        let error = FileSizeError::new(101 * MB, Some(100 * MB));

        assert!(error.details.contains("101.0MB"));
        assert!(error.details.contains("100.0MB"));
        assert!(error.details.contains("1.0MB too big"));
        assert!(error.details.ends_with("---\n"));
        // The three emoji count as two UTF-16 units and four UTF-8 bytes each.
        assert_eq!(error.details.encode_utf16().count(), 382);
        assert_eq!(error.details.len(), 388);
    }

    #[test]
    fn test_fallback_maximum_when_unset() {
        let error = FileSizeError::new(101 * MB, None);

        assert_eq!(error.max_file_size_bytes, 10 * MB);
        assert!(error.details.contains("your current max is 10.0MB"));
        assert!(error.details.contains("91.0MB too big"));
    }

    #[test]
    fn test_sentinel_normalization() {
        let unset = FileSizeError::from_limit_sentinel(101 * MB, -1);
        assert_eq!(unset.max_file_size_bytes, 10 * MB);

        let configured = FileSizeError::from_limit_sentinel(101 * MB, (100 * MB) as i64);
        assert_eq!(configured.max_file_size_bytes, 100 * MB);
    }

    #[test]
    fn test_details_are_deterministic() {
        let first = FileSizeError::new(101 * MB, Some(100 * MB));
        let second = FileSizeError::new(101 * MB, Some(100 * MB));

        assert_eq!(first.details, second.details);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_overage_is_not_special_cased() {
        let error = FileSizeError::new(100 * MB, Some(100 * MB));

        assert!(error.details.contains("0.0MB too big"));
    }

    #[test]
    fn test_transport_message_match() {
        let error =
            FileSizeError::from_transport_message(TRANSPORT_OVERFLOW_MESSAGE, 101 * MB, -1)
                .expect("overflow message should translate");

        assert_eq!(error.file_size_bytes, 101 * MB);
        assert_eq!(error.max_file_size_bytes, 10 * MB);
    }

    #[test]
    fn test_other_transport_messages_pass_through() {
        let result = FileSizeError::from_transport_message("connection reset", 101 * MB, -1);

        assert!(result.is_none());
    }

    #[test]
    fn test_generic_failure_identity() {
        let error = FileSizeError::new(101 * MB, Some(100 * MB));

        assert_eq!(error.to_string(), "File size limit exceeded");

        let wrapped = Error::from(error);
        assert!(wrapped.is_size_limit());
        assert_eq!(wrapped.to_string(), "File size limit exceeded");
    }
}
