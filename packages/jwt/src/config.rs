//! Issuer configuration

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default key resource, relative to the resource root
pub const DEFAULT_KEY_RESOURCE: &str = "/privateKey.pem";

/// Where the issuer finds its key and claim documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerConfig {
    /// Directory named resources are resolved against
    #[serde(default = "default_resource_root")]
    pub resource_root: PathBuf,
    /// Resource holding the PEM signing key
    #[serde(default = "default_key_resource")]
    pub key_resource: String,
    /// `kid` header value; the key resource name when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

fn default_resource_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_key_resource() -> String {
    DEFAULT_KEY_RESOURCE.to_string()
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            key_resource: default_key_resource(),
            key_id: None,
        }
    }
}

impl IssuerConfig {
    /// Parse a TOML configuration document.
    ///
    /// # Errors
    /// Returns [`TokenError::Config`] if the document is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(text: &str) -> TokenResult<Self> {
        toml::from_str(text).map_err(|e| TokenError::Config(e.to_string()))
    }

    /// Load a TOML configuration file.
    ///
    /// A relative `resource_root` is resolved against the directory holding the
    /// file.
    ///
    /// # Errors
    /// Returns [`TokenError::ResourceNotFound`] if the file does not exist and
    /// [`TokenError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> TokenResult<Self> {
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| TokenError::from_io(&shown, e))?;
        let mut config = Self::from_toml_str(&text)?;
        if config.resource_root.is_relative()
            && let Some(parent) = path.parent()
        {
            config.resource_root = parent.join(&config.resource_root);
        }
        tracing::debug!(
            path = %shown,
            root = %config.resource_root.display(),
            key = %config.key_resource,
            "Loaded issuer configuration"
        );
        Ok(config)
    }
}
