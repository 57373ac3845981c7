//! Token issuing error types

use thiserror::Error;

/// Token issuing result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Failures surfaced while issuing a token.
///
/// Every variant is terminal for the call that produced it: nothing is retried
/// and no fallback key or claim document is substituted.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A named key or claims resource does not exist
    #[error("Failed to find resource: {0}")]
    ResourceNotFound(String),

    /// A named resource exists but could not be read
    #[error("Failed to read resource {name}: {source}")]
    Resource {
        /// Resource name as requested by the caller
        name: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// PEM, base64 or PKCS#8 structure is malformed
    #[error("Decode error: {0}")]
    Decode(String),

    /// The base claims document is not a well-formed JSON object
    #[error("Parse error: {0}")]
    Parse(String),

    /// The merged claim set cannot be turned into a valid payload
    #[error("Invalid claims: {0}")]
    Claims(String),

    /// The signing operation failed or the key cannot be used for RS256
    #[error("Signing error: {0}")]
    Signing(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a resource not found error
    #[inline]
    #[must_use]
    pub fn resource_not_found(name: &str) -> Self {
        TokenError::ResourceNotFound(name.to_string())
    }

    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: &str) -> Self {
        TokenError::Decode(msg.to_string())
    }

    /// Create a parse error
    #[inline]
    #[must_use]
    pub fn parse(msg: &str) -> Self {
        TokenError::Parse(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn claims(msg: &str) -> Self {
        TokenError::Claims(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        TokenError::Signing(msg.to_string())
    }

    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn config(msg: &str) -> Self {
        TokenError::Config(msg.to_string())
    }

    /// Classify an I/O failure for the named resource.
    ///
    /// `NotFound` maps to [`TokenError::ResourceNotFound`]; anything else is kept
    /// as [`TokenError::Resource`].
    #[must_use]
    pub fn from_io(name: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            TokenError::resource_not_found(name)
        } else {
            TokenError::Resource {
                name: name.to_string(),
                source,
            }
        }
    }
}
