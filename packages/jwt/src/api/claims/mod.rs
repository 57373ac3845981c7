//! Claim set construction
//!
//! A token's claims are built from three layers: a parsed base document, the
//! timing claims (`exp`, `iat`, `auth_time`), and caller overrides.

pub mod builder;
pub mod claim_set;
pub mod parser;

pub use builder::ClaimSetBuilder;
pub use claim_set::{AUTH_TIME, ClaimSet, EXP, IAT, TOKEN_LIFETIME_SECS, TimingClaims, merge};
pub use parser::{parse_claim_value, parse_claims_document};
