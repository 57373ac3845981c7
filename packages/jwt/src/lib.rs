//! Signed JSON Web Tokens for tests and development
//!
//! This crate issues RS256 tokens from:
//! - a PEM encoded PKCS#8 RSA private key
//! - a base claim document (JSON, or relaxed JSON5)
//! - caller supplied claims that override everything else
//!
//! Every token gets `iat` and `auth_time` set to the issuing time and `exp`
//! five minutes later. Tokens are only issued, never verified.

pub mod api;
pub mod clock;
pub mod config;
mod error;
pub mod issuer;
pub mod resource;
mod types;

pub use api::{
    ClaimSet, ClaimSetBuilder, MIN_RSA_KEY_BITS, PrivateKey, TimingClaims, TokenSigner,
    decode_private_key, read_private_key, sign_claims,
};
pub use api::{algorithms, claims, keys, pem, signer};
pub use clock::{Clock, FixedClock, SystemClock, current_time_in_secs};
pub use config::IssuerConfig;
pub use error::*;
pub use issuer::TokenIssuer;
pub use resource::{DirectoryResources, MemoryResources, ResourceLoader};
pub use types::*;
