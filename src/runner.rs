use std::io::{self, Write};

use crate::config::Config;
use crate::dispatch::http::HttpDispatch;
use crate::dispatch::{Envelope, Outcome, headers};
use crate::error::ProxyError;
use crate::response::{announce_line, describe};

/// Sends one envelope to a fixed endpoint and reports what happened.
///
/// Holds no per-call state: running the same envelope twice against the
/// same server produces the same report.
pub struct Runner {
    dispatch: HttpDispatch,
    endpoint: String,
    api_key: String,
}

impl Runner {
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        Ok(Self {
            dispatch: HttpDispatch::new()?,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Performs the call and writes two lines to `out`: the announcement
    /// (with the full envelope) and the outcome.
    ///
    /// Request failures are part of the returned `Outcome`, never an `Err`.
    /// The only error here is failing to write the report.
    pub async fn execute<W: Write>(
        &self,
        envelope: &Envelope,
        out: &mut W,
    ) -> io::Result<Outcome> {
        let body = envelope.to_json();
        writeln!(out, "{}", announce_line(&body))?;
        out.flush()?;

        let outcome = self.send(envelope, body).await;

        if let Outcome::Failed(e) = &outcome {
            tracing::warn!(endpoint = %self.endpoint, "request failed: {}", describe(e));
        }

        writeln!(out, "{outcome}")?;
        out.flush()?;
        Ok(outcome)
    }

    async fn send(&self, envelope: &Envelope, body: String) -> Outcome {
        tracing::info!(
            endpoint = %self.endpoint,
            model = envelope.model(),
            "initiating request"
        );

        let headers = match headers(&self.api_key) {
            Ok(h) => h,
            Err(e) => return Outcome::Failed(e),
        };

        match self.dispatch.post_json(&self.endpoint, headers, body).await {
            Ok(text) => Outcome::Succeeded(text),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// One full run for `config`: build the runner, execute its envelope and
/// report on `out`.
///
/// A runner that cannot be built (the HTTP client failed to initialize) is
/// reported like any other transport failure, so only a failed write to
/// `out` surfaces as an error.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<Outcome> {
    match Runner::new(config) {
        Ok(runner) => runner.execute(&config.request, out).await,
        Err(e) => {
            tracing::warn!("failed to build HTTP client: {}", describe(&e));
            let outcome = Outcome::Failed(e);
            writeln!(out, "{outcome}")?;
            out.flush()?;
            Ok(outcome)
        }
    }
}
