//! RS256 token signer
//!
//! Turns a [`ClaimSet`] into a compact JWS: the header and payload are JSON
//! encoded, base64url encoded without padding, joined by `.`, and signed with
//! RSASSA-PKCS1-v1_5 / SHA-256.

use super::algorithms::rsa::sign_rs256;
use super::algorithms::utils::{base64_url_encode, validate_registered_claims};
use super::claims::ClaimSet;
use super::keys::PrivateKey;
use crate::error::{TokenError, TokenResult};
use crate::types::{SignedToken, TokenHeader};

/// Signs claim sets with an RSA private key
#[derive(Debug, Clone)]
pub struct TokenSigner<'k> {
    key: &'k PrivateKey,
    kid: String,
}

impl<'k> TokenSigner<'k> {
    /// Signer using `key`, announcing it as `kid` in the header
    #[must_use]
    pub fn new(key: &'k PrivateKey, kid: &str) -> Self {
        Self {
            key,
            kid: kid.to_string(),
        }
    }

    /// Header placed on every token from this signer
    #[must_use]
    pub fn header(&self) -> TokenHeader {
        TokenHeader::rs256(&self.kid)
    }

    /// Sign a claim set.
    ///
    /// # Errors
    /// - [`TokenError::Claims`] if a registered claim has the wrong JSON type
    /// - [`TokenError::Signing`] if the key cannot produce an RS256 signature
    pub fn sign(&self, claims: &ClaimSet) -> TokenResult<SignedToken> {
        validate_registered_claims(claims)?;

        let header_json = serde_json::to_vec(&self.header())
            .map_err(|e| TokenError::Signing(format!("Header serialization failed: {e}")))?;
        let claims_json = serde_json::to_vec(claims)
            .map_err(|e| TokenError::Claims(format!("Payload serialization failed: {e}")))?;

        let message = format!(
            "{}.{}",
            base64_url_encode(&header_json),
            base64_url_encode(&claims_json)
        );
        let signature = sign_rs256(&message, self.key)?;

        tracing::debug!(kid = %self.kid, claims = claims.len(), "Signed RS256 token");
        Ok(SignedToken::new(format!(
            "{message}.{}",
            base64_url_encode(&signature)
        )))
    }
}

/// Sign `claims` with `key` under key id `kid`.
///
/// # Errors
/// See [`TokenSigner::sign`].
pub fn sign_claims(key: &PrivateKey, kid: &str, claims: &ClaimSet) -> TokenResult<SignedToken> {
    TokenSigner::new(key, kid).sign(claims)
}
