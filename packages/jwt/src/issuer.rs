//! Token issuer
//!
//! Ties the pipeline to named resources: the signing key and the base claim
//! documents are looked up through a [`ResourceLoader`], and timing claims are
//! read from a [`Clock`].
//!
//! ```no_run
//! use devtoken_jwt::{IssuerConfig, TokenIssuer};
//! use serde_json::{Map, json};
//!
//! # fn example() -> devtoken_jwt::TokenResult<()> {
//! let issuer = TokenIssuer::from_config(&IssuerConfig::default());
//!
//! let mut additional = Map::new();
//! additional.insert("iss".to_string(), json!("https://issuer.test"));
//!
//! let token = issuer.generate_token_string("/Token1.json", &additional)?;
//! println!("{token}");
//! # Ok(())
//! # }
//! ```

use crate::api::claims::{ClaimSet, ClaimSetBuilder, parse_claims_document};
use crate::api::keys::PrivateKey;
use crate::api::pem;
use crate::api::signer::TokenSigner;
use crate::clock::{Clock, SystemClock};
use crate::config::{DEFAULT_KEY_RESOURCE, IssuerConfig};
use crate::error::TokenResult;
use crate::resource::{DirectoryResources, ResourceLoader};
use crate::types::SignedToken;
use serde_json::{Map, Value};

/// Issues signed tokens from named key and claims resources
#[derive(Debug, Clone)]
pub struct TokenIssuer<L, C = SystemClock> {
    loader: L,
    clock: C,
    key_resource: String,
    key_id: Option<String>,
}

impl TokenIssuer<DirectoryResources, SystemClock> {
    /// Issuer reading resources from the configured directory
    #[must_use]
    pub fn from_config(config: &IssuerConfig) -> Self {
        TokenIssuer::new(DirectoryResources::new(&config.resource_root))
            .with_key_resource(&config.key_resource)
            .with_key_id(config.key_id.clone())
    }
}

impl<L: ResourceLoader> TokenIssuer<L, SystemClock> {
    /// Issuer over `loader` with the system clock and the default key resource
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            clock: SystemClock,
            key_resource: DEFAULT_KEY_RESOURCE.to_string(),
            key_id: None,
        }
    }
}

impl<L: ResourceLoader, C: Clock> TokenIssuer<L, C> {
    /// Read time from another clock
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TokenIssuer<L, C2> {
        TokenIssuer {
            loader: self.loader,
            clock,
            key_resource: self.key_resource,
            key_id: self.key_id,
        }
    }

    /// Use another resource as the default signing key
    #[must_use]
    pub fn with_key_resource(mut self, key_resource: &str) -> Self {
        self.key_resource = key_resource.to_string();
        self
    }

    /// Set the `kid` used with the default key; `None` uses the key resource name
    #[must_use]
    pub fn with_key_id(mut self, key_id: Option<String>) -> Self {
        self.key_id = key_id;
        self
    }

    /// `kid` announced for tokens signed with the default key
    #[must_use]
    pub fn key_id(&self) -> &str {
        self.key_id.as_deref().unwrap_or(&self.key_resource)
    }

    /// Read a PEM encoded private key resource.
    ///
    /// # Errors
    /// [`crate::TokenError::ResourceNotFound`] if the resource is absent,
    /// [`crate::TokenError::Decode`] if it is not a PKCS#8 RSA key.
    pub fn read_private_key(&self, pem_resource: &str) -> TokenResult<PrivateKey> {
        pem::read_private_key(&self.loader, pem_resource)
    }

    /// Build the final claim set from a claims resource and caller overrides.
    ///
    /// # Errors
    /// [`crate::TokenError::ResourceNotFound`] if the resource is absent,
    /// [`crate::TokenError::Parse`] if it is not a JSON object,
    /// [`crate::TokenError::Claims`] if the clock reading is out of range.
    pub fn build_claims(
        &self,
        json_resource: &str,
        additional_claims: &Map<String, Value>,
    ) -> TokenResult<ClaimSet> {
        let content = self.loader.load(json_resource)?;
        let base = parse_claims_document(&content)?;
        ClaimSetBuilder::new()
            .with_base(base)
            .with_clock(&self.clock)
            .with_claims(additional_claims.clone())
            .build()
    }

    /// Generate a token signed with the default key resource.
    ///
    /// # Errors
    /// Any failure of [`Self::read_private_key`] or
    /// [`Self::generate_token_string_with_key`].
    pub fn generate_token_string(
        &self,
        json_resource: &str,
        additional_claims: &Map<String, Value>,
    ) -> TokenResult<SignedToken> {
        let key = self.read_private_key(&self.key_resource)?;
        self.generate_token_string_with_key(&key, self.key_id(), json_resource, additional_claims)
    }

    /// Generate a token signed with `key`, announced as `kid`.
    ///
    /// # Errors
    /// [`crate::TokenError::ResourceNotFound`] or [`crate::TokenError::Parse`]
    /// for the claims resource, [`crate::TokenError::Claims`] for ill-typed
    /// registered claims, [`crate::TokenError::Signing`] if the key cannot sign.
    pub fn generate_token_string_with_key(
        &self,
        key: &PrivateKey,
        kid: &str,
        json_resource: &str,
        additional_claims: &Map<String, Value>,
    ) -> TokenResult<SignedToken> {
        let claims = self.build_claims(json_resource, additional_claims)?;
        let token = TokenSigner::new(key, kid).sign(&claims)?;
        tracing::debug!(resource = json_resource, kid, "Issued token");
        Ok(token)
    }
}
