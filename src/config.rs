use std::path::Path;

use serde::Deserialize;

use crate::dispatch::Envelope;
use crate::error::ProxyError;

pub const DEFAULT_ENDPOINT: &str = "https://a061igc186.execute-api.us-east-1.amazonaws.com/dev";

/// Stand-in key; the gateway rejects it.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-goes-here";

/// Everything one run needs. The binary only ever uses `Config::default()`;
/// library callers can load the same shape from TOML:
///
/// ```toml
/// api_key = "..."
///
/// [request]
/// query = "Who are the Jumbos"
/// lastk = 3
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub api_key: String,
    pub request: Envelope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            request: Envelope::default(),
        }
    }
}

impl Config {
    /// Missing keys fall back to the compiled-in defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ProxyError> {
        toml::from_str(s).map_err(|e| ProxyError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ProxyError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ProxyError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}
