//! HTTP implementation of [`CirconusApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use circonus_types::{
    cid_id, CheckBundle, CheckBundleMetrics, GraphDefinition, Metric, RemoteGraph,
};

use crate::{CirconusApi, ClientError};

/// Base URL of the public Circonus API.
pub const DEFAULT_API_URL: &str = "https://api.circonus.com/v2";

/// Application name sent in `X-Circonus-App-Name`.
pub const DEFAULT_APP_NAME: &str = "goestools";

const AUTH_TOKEN_HEADER: &str = "X-Circonus-Auth-Token";
const APP_NAME_HEADER: &str = "X-Circonus-App-Name";

/// Circonus v2 API client.
#[derive(Debug, Clone)]
pub struct CirconusClient {
    client: Client,
    api_url: String,
    token: String,
    app_name: String,
}

impl CirconusClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CirconusClientBuilder {
        CirconusClientBuilder::default()
    }

    /// Base URL requests are made against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTH_TOKEN_HEADER, &self.token)
            .header(APP_NAME_HEADER, &self.app_name)
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "circonus response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth(format!("API returned status {status} for {path}")));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                path: path.to_string(),
                body,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(path, request).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CirconusApi for CirconusClient {
    async fn get_check_bundle_for_host(&self, host: &str) -> Result<CheckBundle, ClientError> {
        let path = "/check_bundle";
        let request = self
            .request(Method::GET, path)
            .query(&[("search", bundle_search(host))]);
        let mut bundles: Vec<CheckBundle> = self.send_json(path, request).await?;

        let bundle = match bundles.len() {
            0 => return Err(ClientError::BundleNotFound(host.to_string())),
            1 => bundles.remove(0),
            count => {
                return Err(ClientError::AmbiguousBundle {
                    host: host.to_string(),
                    count,
                })
            }
        };

        // The search result is abbreviated; fetch the full bundle with its metrics.
        let request = self
            .request(Method::GET, &bundle.cid)
            .query(&[("query_broker", "1")]);
        self.send_json(&bundle.cid, request).await
    }

    async fn put_check_bundle_metrics(
        &self,
        bundle: &CheckBundle,
        metrics: &[Metric],
    ) -> Result<CheckBundleMetrics, ClientError> {
        let path = format!("/check_bundle_metrics/{}", bundle.id());
        let body = CheckBundleMetrics {
            cid: String::new(),
            metrics: metrics.to_vec(),
        };
        let request = self.request(Method::PUT, &path).json(&body);
        self.send_json(&path, request).await
    }

    async fn get_graphs_for_check(
        &self,
        check_id: u64,
        tag_category: &str,
    ) -> Result<Vec<RemoteGraph>, ClientError> {
        let path = "/graph";
        let request = self
            .request(Method::GET, path)
            .query(&[("search", graph_search(check_id, tag_category))]);
        self.send_json(path, request).await
    }

    async fn create_graph(&self, graph: &GraphDefinition) -> Result<RemoteGraph, ClientError> {
        let path = "/graph";
        let request = self.request(Method::POST, path).json(graph);
        self.send_json(path, request).await
    }

    async fn update_graph(
        &self,
        cid: &str,
        graph: &GraphDefinition,
    ) -> Result<RemoteGraph, ClientError> {
        let request = self.request(Method::PUT, cid).json(graph);
        self.send_json(cid, request).await
    }

    async fn delete_graph(&self, cid: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, cid);
        self.send(cid, request).await?;
        debug!(graph = cid_id(cid), "graph deleted");
        Ok(())
    }
}

/// Builder for CirconusClient.
#[derive(Debug, Default)]
pub struct CirconusClientBuilder {
    api_url: Option<String>,
    token: Option<String>,
    app_name: Option<String>,
    timeout: Option<Duration>,
}

impl CirconusClientBuilder {
    /// Set the API base URL (default: "https://api.circonus.com/v2").
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set the API token. Required.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the application name the token is registered for (default: "goestools").
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CirconusClient, ClientError> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidConfig("missing API token".to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(10)))
            .user_agent(concat!("circonus-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(CirconusClient {
            client,
            api_url,
            token,
            app_name: self.app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        })
    }
}

// Search expression selecting the check bundle of a host.
fn bundle_search(host: &str) -> String {
    format!("(host:{host})")
}

// Search expression selecting the graphs of a check tagged in a category.
fn graph_search(check_id: u64, tag_category: &str) -> String {
    format!("(check_id:{check_id})(tags:{tag_category}:*)")
}
