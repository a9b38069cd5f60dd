//
//  watson-assistant
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Watson Assistant v1 API
//!
//! This module provides [`AssistantV1`], the client every operation hangs off.
//! It holds the immutable service configuration (service URL, API version,
//! credentials, default headers) and knows how to execute one request and
//! decode its response.
//!
//! ## Features
//!
//! - `version` query parameter added to every request
//! - Authentication header injection (Basic or Bearer)
//! - JSON serialization/deserialization
//! - Non-2xx bodies surfaced verbatim as errors
//! - Custom User-Agent header
//!
//! The operations themselves live in the resource modules under
//! [`v1`](super::v1).

use std::collections::HashMap;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::common::{require, ApiError, DetailedResponse, Result};
use super::request::RequestBuilder;
use crate::auth::AuthCredential;
use crate::config::ServiceConfig;

/// Default service URL for Watson Assistant.
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

/// Header that asks the service not to use request data for training.
pub const LEARNING_OPT_OUT_HEADER: &str = "X-Watson-Learning-Opt-Out";

/// Client for the Watson Assistant v1 API.
///
/// The client is cheap to clone and safe to share between tasks: its
/// configuration never changes after construction, and every call builds its
/// own request.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use watson_assistant::api::AssistantV1;
/// use watson_assistant::auth::AuthCredential;
///
/// let client = AssistantV1::new("2018-07-10")?
///     .with_auth(AuthCredential::basic("username", "password"));
/// # Ok::<(), watson_assistant::api::common::ApiError>(())
/// ```
///
/// # From Configuration
///
/// ```rust,no_run
/// use watson_assistant::api::AssistantV1;
/// use watson_assistant::config::ServiceConfig;
///
/// let config = ServiceConfig::load()?.with_vcap("conversation");
/// let client = AssistantV1::from_config(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AssistantV1 {
    /// The underlying HTTP client
    http: Client,
    /// Base URL all operation paths are appended to
    service_url: String,
    /// API version date sent as `version` on every request
    version: String,
    /// Optional authentication credentials
    auth: Option<AuthCredential>,
    /// Headers added to every request
    default_headers: HashMap<String, String>,
}

impl AssistantV1 {
    /// Creates a client for the given API version against the default service URL.
    ///
    /// # Parameters
    ///
    /// * `version` - The API version date, e.g. `"2018-07-10"`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequired`] if `version` is empty, or an error
    /// if the HTTP client could not be created.
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;

        Ok(Self {
            http: Self::http_client(false)?,
            service_url: DEFAULT_SERVICE_URL.to_string(),
            version,
            auth: None,
            default_headers: HashMap::new(),
        })
    }

    /// Creates a client from a [`ServiceConfig`].
    ///
    /// The service URL falls back to [`DEFAULT_SERVICE_URL`], credentials are
    /// chosen by [`ServiceConfig::credential`], and the learning opt-out header
    /// is added when configured.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        require("version", &config.version)?;

        let mut client = Self {
            http: Self::http_client(config.disable_ssl_verification)?,
            service_url: config
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            version: config.version.clone(),
            auth: config.credential()?,
            default_headers: HashMap::new(),
        };

        if config.learning_opt_out {
            client = client.with_learning_opt_out();
        }

        Ok(client)
    }

    pub(crate) fn http_client(disable_ssl_verification: bool) -> Result<Client> {
        Ok(Client::builder()
            .user_agent(format!("watson-assistant-rust/{}", crate::VERSION))
            .danger_accept_invalid_certs(disable_ssl_verification)
            .build()?)
    }

    /// Sets the service URL, e.g. for a different region or a test server.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Sets the authentication credentials for this client.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Adds a header that is sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Asks the service not to use this client's requests for training.
    pub fn with_learning_opt_out(self) -> Self {
        self.with_header(LEARNING_OPT_OUT_HEADER, "true")
    }

    /// The base URL requests are sent to.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The API version date sent with every request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The configured credentials, if any.
    pub fn auth(&self) -> Option<&AuthCredential> {
        self.auth.as_ref()
    }

    /// Starts a request for `template`, with `version`, `Accept` and the
    /// default headers already applied.
    pub(crate) fn request(
        &self,
        method: Method,
        template: &str,
        params: &[&str],
    ) -> Result<RequestBuilder> {
        RequestBuilder::new(method, &self.service_url)?
            .with_path(template, params)?
            .with_query("version", &self.version)
            .with_header("Accept", "application/json")?
            .with_headers(&self.default_headers)
    }

    /// Executes a request and decodes the JSON body into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<DetailedResponse<T>> {
        let response = self.execute(builder).await?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        Ok(DetailedResponse {
            status_code,
            headers,
            result: serde_json::from_slice(&bytes)?,
        })
    }

    /// Executes a request whose response body carries nothing of interest.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<DetailedResponse<()>> {
        let response = self.execute(builder).await?;

        Ok(DetailedResponse {
            status_code: response.status().as_u16(),
            headers: response.headers().clone(),
            result: (),
        })
    }

    async fn execute(&self, mut builder: RequestBuilder) -> Result<reqwest::Response> {
        if let Some(auth) = &self.auth {
            builder = builder.with_header("Authorization", &auth.authorization().await?)?;
        }

        debug!(method = %builder.method(), url = %builder.url(), "Sending request");
        let request = builder.build(&self.http)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%status, "Received response");

        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Service {
                status,
                headers,
                body,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_version() {
        assert!(matches!(
            AssistantV1::new(""),
            Err(ApiError::MissingRequired("version"))
        ));
    }

    #[test]
    fn test_defaults() {
        let client = AssistantV1::new("2018-07-10").unwrap();
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(client.version(), "2018-07-10");
        assert!(client.auth().is_none());
    }

    #[test]
    fn test_request_carries_version_and_accept() {
        let client = AssistantV1::new("2018-07-10")
            .unwrap()
            .with_service_url("https://example.com/api")
            .with_learning_opt_out();
        let builder = client
            .request(Method::GET, "/v1/workspaces/{workspace_id}", &["ws"])
            .unwrap();

        let url = builder.url();
        assert_eq!(url.path(), "/api/v1/workspaces/ws");
        assert_eq!(url.query(), Some("version=2018-07-10"));
        assert_eq!(builder.headers().get("accept").unwrap(), "application/json");
        assert_eq!(builder.headers().get("x-watson-learning-opt-out").unwrap(), "true");
    }

    #[test]
    fn test_from_config() {
        let config = ServiceConfig {
            url: Some("https://example.com/api".to_string()),
            version: "2018-07-10".to_string(),
            username: Some("user1".to_string()),
            password: Some("pass1".to_string()),
            learning_opt_out: true,
            ..Default::default()
        };
        let client = AssistantV1::from_config(&config).unwrap();
        assert_eq!(client.service_url(), "https://example.com/api");
        assert!(client.auth().unwrap().is_basic());
    }
}
