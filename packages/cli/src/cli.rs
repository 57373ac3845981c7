//! CLI command definitions

use clap::Parser;
use devtoken_jwt::claims::parse_claim_value;
use devtoken_jwt::{IssuerConfig, SignedToken, TokenIssuer, TokenResult};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "devtoken")]
#[command(about = "Issue RS256 signed JSON Web Tokens for tests and development")]
#[command(version)]
pub struct Cli {
    /// Base claims resource (JSON or JSON5), relative to the resource root
    #[arg(long, short = 'c')]
    pub claims: String,

    /// PEM private key resource (default: /privateKey.pem)
    #[arg(long, short = 'k')]
    pub key: Option<String>,

    /// Key id for the token header (default: the key resource name)
    #[arg(long)]
    pub kid: Option<String>,

    /// Directory resources are resolved against (default: current directory)
    #[arg(long, env = "DEVTOKEN_ROOT")]
    pub root: Option<PathBuf>,

    /// TOML configuration file; flags override its values
    #[arg(long, env = "DEVTOKEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional claim as key=value, overriding the document and timing claims.
    ///
    /// The value is read as JSON, then JSON5, when it parses (numbers, booleans,
    /// arrays, quoted strings) and as a plain string otherwise.
    #[arg(long = "claim", value_name = "KEY=VALUE", value_parser = parse_claim)]
    pub additional: Vec<(String, Value)>,
}

impl Cli {
    /// Configuration file values with command line overrides applied
    pub fn resolve_config(&self) -> TokenResult<IssuerConfig> {
        let mut config = match &self.config {
            Some(path) => IssuerConfig::load(path)?,
            None => IssuerConfig::default(),
        };
        if let Some(root) = &self.root {
            config.resource_root = root.clone();
        }
        if let Some(key) = &self.key {
            config.key_resource = key.clone();
        }
        if let Some(kid) = &self.kid {
            config.key_id = Some(kid.clone());
        }
        Ok(config)
    }

    /// Additional claims, later flags winning over earlier ones
    pub fn additional_claims(&self) -> Map<String, Value> {
        self.additional.iter().cloned().collect()
    }
}

/// Issue the token described by the command line
pub fn run(cli: &Cli) -> TokenResult<SignedToken> {
    let config = cli.resolve_config()?;
    tracing::debug!(
        root = %config.resource_root.display(),
        key = %config.key_resource,
        claims = %cli.claims,
        "Issuing token"
    );
    TokenIssuer::from_config(&config).generate_token_string(&cli.claims, &cli.additional_claims())
}

fn parse_claim(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("claim name is empty in `{raw}`"));
    }
    let value = parse_claim_value(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
