//! Claim set builder
//!
//! Combines a base claim document, the timing claims read from a [`Clock`], and
//! caller overrides into a [`ClaimSet`].

use super::claim_set::{ClaimSet, TimingClaims, merge};
use super::parser::parse_claims_document;
use crate::clock::{Clock, SystemClock};
use crate::error::TokenResult;
use serde_json::{Map, Value};

/// Builder for the final claim set of a token
#[derive(Debug, Clone)]
pub struct ClaimSetBuilder<C = SystemClock> {
    base: Map<String, Value>,
    overrides: Map<String, Value>,
    clock: C,
}

impl ClaimSetBuilder<SystemClock> {
    /// Create a builder with an empty base document and the system clock
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Map::new(),
            overrides: Map::new(),
            clock: SystemClock,
        }
    }

    /// Create a builder from a raw base claim document.
    ///
    /// # Errors
    /// Returns [`crate::TokenError::Parse`] if the document is not a JSON object.
    pub fn from_document(content: &[u8]) -> TokenResult<Self> {
        Ok(Self::new().with_base(parse_claims_document(content)?))
    }
}

impl Default for ClaimSetBuilder<SystemClock> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ClaimSetBuilder<C> {
    /// Replace the base document
    #[inline]
    #[must_use]
    pub fn with_base(mut self, base: Map<String, Value>) -> Self {
        self.base = base;
        self
    }

    /// Read time from another clock
    #[inline]
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ClaimSetBuilder<C2> {
        ClaimSetBuilder {
            base: self.base,
            overrides: self.overrides,
            clock,
        }
    }

    /// Override a single claim
    #[inline]
    #[must_use]
    pub fn with_claim(mut self, claim: &str, value: impl Into<Value>) -> Self {
        self.overrides.insert(claim.to_string(), value.into());
        self
    }

    /// Override several claims, later entries winning over earlier ones
    #[must_use]
    pub fn with_claims<I, K>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.overrides
            .extend(claims.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Merge base, timing and override layers at the current clock reading.
    ///
    /// # Errors
    /// Returns [`crate::TokenError::Claims`] if the clock reading is too large to
    /// derive `exp` from.
    pub fn build(&self) -> TokenResult<ClaimSet> {
        let timing = TimingClaims::at(self.clock.now())?;
        let claims = merge(&self.base, timing, &self.overrides);
        tracing::debug!(
            claims = claims.len(),
            overrides = self.overrides.len(),
            iat = timing.issued_at,
            "Merged claim set"
        );
        Ok(claims)
    }
}
