use std::time::Duration;

use log::{debug, error};
use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;

use crate::core::default_header_map;
use crate::error::{CplError, Result};


/// GET-only JSON fetcher with fixed headers and a uniform timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    headers: HeaderMap,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let headers = default_header_map(user_agent)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CplError::ClientBuild)?;

        Ok(Self { client, headers })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// GET `url` with `params` as the query string and decode the body as `T`.
    ///
    /// Timeouts map to [`CplError::Timeout`]; any other transport failure or
    /// non-2xx status maps to [`CplError::Request`] carrying the status.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let body = match self.get_text(url, params).await {
            Ok(body) => body,
            Err(e) => {
                if e.is_timeout() {
                    error!("Timeout error fetching {url}: {e}");
                } else {
                    error!("HTTP error fetching {url}: {e}");
                }
                return Err(e);
            }
        };

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        let request = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(params)
            .build()
            .map_err(|e| CplError::from_reqwest(url, e))?;

        debug!("Requesting URL: {}", request.url());

        let res = self
            .client
            .execute(request)
            .await
            .map_err(|e| CplError::from_reqwest(url, e))?
            .error_for_status()
            .map_err(|e| CplError::from_reqwest(url, e))?;

        res.text().await.map_err(|e| CplError::from_reqwest(url, e))
    }
}
