//! RSA-SHA256 (RS256) signing

use crate::api::keys::{PrivateKey, validate_rs256_key};
use crate::error::{TokenError, TokenResult};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};

/// `alg` header value for RSASSA-PKCS1-v1_5 with SHA-256
pub const RS256: &str = "RS256";

/// Sign with RSA-SHA256 (RS256)
pub(crate) fn sign_rs256(message: &str, private_key: &PrivateKey) -> TokenResult<Vec<u8>> {
    validate_rs256_key(private_key)?;

    let signing_key = SigningKey::<Sha256>::new(private_key.as_rsa().clone());
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| TokenError::Signing(format!("RS256 signing failed: {e}")))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pem::decode_private_key;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;

    #[test]
    fn test_signature_verifies_with_public_key() {
        let key = decode_private_key(include_str!("../../../tests/resources/privateKey.pem")).unwrap();
        let signature = sign_rs256("header.payload", &key).unwrap();
        assert_eq!(signature.len(), 256);

        let verifying_key = VerifyingKey::<Sha256>::new(key.public_key());
        let signature = Signature::try_from(signature.as_slice()).unwrap();
        assert!(verifying_key.verify(b"header.payload", &signature).is_ok());
        assert!(verifying_key.verify(b"header.payloaD", &signature).is_err());
    }

    #[test]
    fn test_short_key_is_a_signing_error() {
        let key = decode_private_key(include_str!("../../../tests/resources/weakKey.pem")).unwrap();
        assert!(matches!(sign_rs256("m", &key), Err(TokenError::Signing(_))));
    }
}
