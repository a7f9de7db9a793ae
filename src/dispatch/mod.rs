pub mod http;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::ProxyError;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_LASTK: u32 = 1;
pub const DEFAULT_SESSION_ID: &str = "GenericSession";

/// JSON payload sent to the inference endpoint.
///
/// Built once, serialized once, sent once. Fields are read-only after
/// construction; the `with_*` setters consume the envelope while it is
/// still being assembled.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Envelope {
    model: String,
    system: String,
    query: String,
    temperature: f64,
    lastk: u32,
    session_id: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(
            "4o-mini",
            "Answer my question in a funny manner",
            "Who are the Jumbos",
        )
    }
}

impl Envelope {
    /// Single-turn request with deterministic sampling and the shared
    /// generic session.
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            query: query.into(),
            temperature: DEFAULT_TEMPERATURE,
            lastk: DEFAULT_LASTK,
            session_id: DEFAULT_SESSION_ID.to_string(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_lastk(mut self, lastk: u32) -> Self {
        self.lastk = lastk;
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn lastk(&self) -> u32 {
        self.lastk
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Request body. Built from plain strings and numbers, so it cannot
    /// fail; a non-finite temperature is sent as `null`.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "model": self.model,
            "system": self.system,
            "query": self.query,
            "temperature": self.temperature,
            "lastk": self.lastk,
            "session_id": self.session_id,
        })
        .to_string()
    }
}

/// Header map for one call: just the API key, passed through untouched.
pub fn headers(api_key: &str) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key)?,
    );
    Ok(headers)
}

/// Result of one `execute()` call. There is no way back to pending.
#[derive(Debug)]
pub enum Outcome {
    /// Status 200; raw, unparsed body text.
    Succeeded(String),
    Failed(ProxyError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}
