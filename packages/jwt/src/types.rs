//! Token header and compact token types

use crate::api::algorithms::RS256;
use serde::{Deserialize, Serialize};

/// JWS header of an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Signing algorithm, always `RS256`
    pub alg: String,
    /// Token type, always `JWT`
    pub typ: String,
    /// Key identifier chosen by the caller
    pub kid: String,
}

impl TokenHeader {
    /// RS256 header for the given key id
    #[must_use]
    pub fn rs256(kid: &str) -> Self {
        Self {
            alg: RS256.to_string(),
            typ: "JWT".to_string(),
            kid: kid.to_string(),
        }
    }
}

/// Signed token in compact serialization (`header.payload.signature`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken(String);

impl SignedToken {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Base64url header segment
    #[must_use]
    pub fn header(&self) -> &str {
        self.segment(0)
    }

    /// Base64url payload segment
    #[must_use]
    pub fn payload(&self) -> &str {
        self.segment(1)
    }

    /// Base64url signature segment
    #[must_use]
    pub fn signature(&self) -> &str {
        self.segment(2)
    }

    /// Signing input: header and payload segments joined by `.`
    #[must_use]
    pub fn signing_input(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(input, _)| input)
    }

    fn segment(&self, index: usize) -> &str {
        self.0.split('.').nth(index).unwrap_or_default()
    }
}

impl From<SignedToken> for String {
    fn from(token: SignedToken) -> Self {
        token.0
    }
}

impl AsRef<str> for SignedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SignedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_serialization() {
        let header = TokenHeader::rs256("/privateKey.pem");
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"RS256","typ":"JWT","kid":"/privateKey.pem"}"#
        );
    }

    #[test]
    fn test_segments() {
        let token = SignedToken::new("aGVhZA.Ym9keQ.c2ln".to_string());
        assert_eq!(token.header(), "aGVhZA");
        assert_eq!(token.payload(), "Ym9keQ");
        assert_eq!(token.signature(), "c2ln");
        assert_eq!(token.signing_input(), "aGVhZA.Ym9keQ");
        assert_eq!(token.to_string(), "aGVhZA.Ym9keQ.c2ln");
    }
}
