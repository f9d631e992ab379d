//! HTTP transport for the remote expense store
//!
//! Blocking `reqwest` client with a fixed per-request timeout. One request
//! is one round trip; nothing is retried.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use super::transport::{Method, StoreRequest, StoreResponse, Transport};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseId;

/// Default timeout for store requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to `{base_url}` and `{base_url}/{id}` over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport for the given base resource URL
    pub fn new(base_url: &str, timeout: Duration) -> ExpenseResult<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            ExpenseError::Config(format!("Invalid store URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ExpenseError::Config(format!(
                "Store URL '{}' cannot have item paths appended",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExpenseError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// URL of the base resource, or of one item when `id` is given
    pub fn url_for(&self, id: Option<&ExpenseId>) -> ExpenseResult<Url> {
        let mut url = self.base_url.clone();
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| ExpenseError::Config(format!("Invalid store URL '{}'", self.base_url)))?
                .pop_if_empty()
                .push(id.as_str());
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: StoreRequest) -> ExpenseResult<StoreResponse> {
        let url = self.url_for(request.id.as_ref())?;
        debug!(method = ?request.method, %url, "sending store request");

        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "store responded");

        Ok(StoreResponse::new(status, body))
    }
}
