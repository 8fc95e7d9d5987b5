//! HTTP plumbing shared by every API group.
//!
//! One [`HubSpotClient`] wraps a single `reqwest::Client` with bearer-token
//! auth. Endpoint methods live in the per-API modules ([`crate::objects`],
//! [`crate::associations`], [`crate::timeline`]) and all funnel through the
//! verb helpers here, so status-to-error mapping happens in exactly one place.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::HubSpotConfig;
use crate::error::{ClientError, ClientResult};

/// Async client for the HubSpot CRM REST API.
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    http: reqwest::Client,
    config: HubSpotConfig,
}

impl HubSpotClient {
    /// Create a client from explicit configuration.
    pub fn new(config: HubSpotConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ClientError::config_error(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Create a client from `HUBSPOT_API_KEY` / `HUBSPOT_BASE_URL`.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(HubSpotConfig::from_env()?)
    }

    /// Absolute URL for an API path (paths always start with `/`).
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "hubspot api request");
        self.http
            .request(method, self.endpoint(path))
            .bearer_auth(self.config.access_token.expose_secret())
    }

    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Value> {
        let req = self.request(Method::GET, path).query(query);
        Self::into_json(req.send().await?).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let req = self.request(Method::POST, path).json(body);
        Self::into_json(req.send().await?).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let req = self.request(Method::PATCH, path).json(body);
        Self::into_json(req.send().await?).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let req = self.request(Method::PUT, path).json(body);
        Self::into_json(req.send().await?).await
    }

    pub(crate) async fn delete_json(&self, path: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, path);
        Self::into_json(req.send().await?).await
    }

    /// Map a response to its JSON body, or to [`ClientError::Api`] on a
    /// non-2xx status. Empty bodies (204s, archives) become `Value::Null`.
    async fn into_json(response: Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            };
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_client() -> HubSpotClient {
        HubSpotClient::new(HubSpotConfig::new("pat-na1-test").unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_path_onto_default_host() {
        let client = test_client();
        assert_eq!(
            client.endpoint("/crm/v3/objects/contacts/42"),
            "https://api.hubapi.com/crm/v3/objects/contacts/42"
        );
    }

    #[test]
    fn test_endpoint_respects_custom_base_url() {
        let config = HubSpotConfig::new("pat-na1-test")
            .unwrap()
            .with_base_url(Url::parse("http://127.0.0.1:8080/").unwrap());
        let client = HubSpotClient::new(config).unwrap();
        assert_eq!(
            client.endpoint("/crm/v4/objects/deals/1/associations/contacts"),
            "http://127.0.0.1:8080/crm/v4/objects/deals/1/associations/contacts"
        );
    }
}
