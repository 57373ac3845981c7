//! Token issuing pipeline
//!
//! [`pem`] decodes the signing key, [`claims`] builds the claim set, and
//! [`signer`] produces the compact token.

pub mod algorithms;
pub mod claims;
pub mod keys;
pub mod pem;
pub mod signer;

pub use claims::{ClaimSet, ClaimSetBuilder, TimingClaims};
pub use keys::{MIN_RSA_KEY_BITS, PrivateKey};
pub use pem::{decode_private_key, read_private_key};
pub use signer::{TokenSigner, sign_claims};
