//! Signing algorithms and encoding helpers

pub mod rsa;
pub(crate) mod utils;

pub use rsa::RS256;
