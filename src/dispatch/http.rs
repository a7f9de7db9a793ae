use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, StatusCode};

use crate::error::ProxyError;

/// Thin wrapper over a reqwest client. No request or connect timeout is
/// configured: a call waits until the server answers or the transport
/// gives up on its own.
pub struct HttpDispatch {
    client: Client,
}

impl HttpDispatch {
    pub fn new() -> Result<Self, ProxyError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// POST a pre-serialized JSON body. Returns the body text only for
    /// status 200; any other status is reported without reading the body.
    pub async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: String,
    ) -> Result<String, ProxyError> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "endpoint responded");

        if status != StatusCode::OK {
            return Err(ProxyError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
