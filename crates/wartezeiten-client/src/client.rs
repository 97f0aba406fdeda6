//! HTTP client for the Wartezeiten API.

use crate::api::WartezeitenApi;
use crate::error::Error;
use crate::types::*;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};


/// Origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.wartezeiten.app";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.wartezeiten.app").
    pub base_url: String,
    /// Request timeout. `None` leaves timeouts to the HTTP stack.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the Wartezeiten.APP API.
#[derive(Debug, Clone)]
pub struct WartezeitenClient {
    client: Client,
    base_url: String,
}

impl WartezeitenClient {
    /// Creates a new client with the given configuration.
    ///
    /// An empty base URL falls back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = match config.base_url.trim() {
            "" => DEFAULT_BASE_URL,
            url => url,
        }
        .trim_end_matches('/')
        .to_string();
        url::Url::parse(&base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a new client targeting `base_url`.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the origin every request is sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Lists the available theme parks.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_parks(&self, request: &ParksRequest) -> Result<GetParksResponse, Error> {
        self.fetch_json("/v1/parks", request).await
    }

    /// Gets the opening times of a park.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_opening_times(
        &self,
        request: &OpeningTimesRequest,
    ) -> Result<GetOpeningTimesResponse, Error> {
        self.fetch_json("/v1/openingtimes", request).await
    }

    /// Gets the current waiting times of a park.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_waiting_times(
        &self,
        request: &WaitingTimesRequest,
    ) -> Result<GetWaitingTimesResponse, Error> {
        self.fetch_json("/v1/waitingtimes", request).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn fetch_json<T, H>(&self, endpoint: &str, request: &H) -> Result<T, Error>
    where
        T: DeserializeOwned,
        H: RequestHeaders + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = build_headers(request)?;

        debug!(%url, "GET");
        let resp = self.client.get(&url).headers(headers).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        debug!(status = status.as_u16(), url = %resp.url(), "response received");

        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "API returned an error response");
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Converts request headers into a header map.
pub(crate) fn build_headers<H: RequestHeaders + ?Sized>(request: &H) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    for (name, value) in request.header_pairs() {
        let value = HeaderValue::from_str(value).map_err(|_| {
            Error::InvalidRequest(format!("invalid value for header `{}`", name))
        })?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

#[async_trait]
impl WartezeitenApi for WartezeitenClient {
    async fn get_parks(&self, request: &ParksRequest) -> Result<GetParksResponse, Error> {
        WartezeitenClient::get_parks(self, request).await
    }

    async fn get_opening_times(
        &self,
        request: &OpeningTimesRequest,
    ) -> Result<GetOpeningTimesResponse, Error> {
        WartezeitenClient::get_opening_times(self, request).await
    }

    async fn get_waiting_times(
        &self,
        request: &WaitingTimesRequest,
    ) -> Result<GetWaitingTimesResponse, Error> {
        WartezeitenClient::get_waiting_times(self, request).await
    }
}
