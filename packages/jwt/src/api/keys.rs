//! RSA private key handling for RS256 signing

use crate::error::{TokenError, TokenResult};
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Smallest RSA modulus accepted for RS256 signing, in bits
pub const MIN_RSA_KEY_BITS: usize = 2048;

/// RSA private key used to sign tokens.
///
/// Debug output shows only the modulus size.
#[derive(Clone)]
pub struct PrivateKey {
    inner: RsaPrivateKey,
}

impl PrivateKey {
    /// Materialize a key from PKCS#8 DER bytes.
    ///
    /// # Errors
    /// Returns [`TokenError::Decode`] if the bytes are not a PKCS#8 RSA private key.
    pub fn from_pkcs8_der(der: &[u8]) -> TokenResult<Self> {
        let inner = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| TokenError::Decode(format!("Invalid RSA private key: {e}")))?;
        Ok(Self { inner })
    }

    /// Modulus size in bits
    #[must_use]
    pub fn bits(&self) -> usize {
        self.inner.size() * 8
    }

    /// Public counterpart of this key
    #[must_use]
    pub fn public_key(&self) -> RsaPublicKey {
        self.inner.to_public_key()
    }

    /// Underlying RSA key
    #[must_use]
    pub fn as_rsa(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(inner: RsaPrivateKey) -> Self {
        Self { inner }
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

/// Check that a key is usable for RS256
pub(crate) fn validate_rs256_key(key: &PrivateKey) -> TokenResult<()> {
    let bits = key.bits();
    if bits < MIN_RSA_KEY_BITS {
        return Err(TokenError::Signing(format!(
            "RSA key for RS256 must be at least {MIN_RSA_KEY_BITS} bits, got {bits}"
        )));
    }
    Ok(())
}
