//
//  watson-assistant
//  auth/iam.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # IAM Token Manager
//!
//! Exchanges an IBM Cloud IAM api key for bearer access tokens and keeps the
//! current token cached until it is close to expiry.
//!
//! ## Token Lifecycle
//!
//! 1. **Request**: `POST` the api key to the IAM token endpoint
//!    (`grant_type=urn:ibm:params:oauth:grant-type:apikey`)
//! 2. **Use**: the access token is reused until 80% of its lifetime has passed
//! 3. **Refresh**: `POST` the refresh token (`grant_type=refresh_token`)
//! 4. **Re-request**: once the refresh token is older than seven days past the
//!    access token's expiration, a new api key exchange is made instead
//!
//! A caller-supplied access token bypasses all of the above and is returned
//! as-is.
//!
//! ## Example
//!
//! ```rust,no_run
//! use watson_assistant::auth::{IamTokenManager, TokenSource};
//!
//! # async fn example() -> watson_assistant::api::common::Result<()> {
//! let manager = IamTokenManager::new("my-api-key")?;
//! let token = manager.access_token().await?;
//! println!("Bearer {}", token);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{basic_authorization, TokenSource};
use crate::api::common::{ApiError, Result};
use crate::api::AssistantV1;

/// Default IAM token endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.bluemix.net/identity/token";

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const REFRESH_GRANT_TYPE: &str = "refresh_token";

/// Client credentials the IAM endpoint expects from SDK callers.
const IAM_CLIENT_ID: &str = "bx";
const IAM_CLIENT_SECRET: &str = "bx";

/// Fraction of a token's lifetime after which it is treated as expired.
const EXPIRY_BUFFER: f64 = 0.8;

/// How long a refresh token stays usable past the access token's expiration.
const REFRESH_TOKEN_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Token data returned by the IAM token endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IamToken {
    /// The bearer access token.
    pub access_token: String,

    /// Token used to obtain a new access token without the api key.
    #[serde(default)]
    pub refresh_token: String,

    /// Token type, normally `Bearer`.
    #[serde(default)]
    pub token_type: String,

    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: i64,

    /// Expiration of the access token as a Unix timestamp.
    #[serde(default)]
    pub expiration: i64,
}

impl IamToken {
    /// Checks whether the access token should no longer be used at `now`.
    ///
    /// The token is retired once 80% of its lifetime has elapsed.
    pub fn is_expired_at(&self, now: i64) -> bool {
        let refresh_time =
            self.expiration as f64 - self.expires_in as f64 * (1.0 - EXPIRY_BUFFER);
        refresh_time < now as f64
    }

    /// Checks whether the refresh token can no longer be used at `now`.
    pub fn is_refresh_expired_at(&self, now: i64) -> bool {
        if self.expiration == 0 || self.refresh_token.is_empty() {
            return true;
        }
        self.expiration + REFRESH_TOKEN_LIFETIME_SECS < now
    }
}

/// Token manager for IBM Cloud IAM bearer tokens.
///
/// Safe to share between concurrent requests: the cached token sits behind
/// an async mutex, so concurrent callers wait for a single in-flight fetch.
#[derive(Debug)]
pub struct IamTokenManager {
    http: Client,
    url: String,
    api_key: Option<String>,
    user_access_token: Option<String>,
    ssl_verification_disabled: bool,
    token: Mutex<Option<IamToken>>,
}

impl IamTokenManager {
    /// Creates a manager that exchanges `api_key` for tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequired`] if the api key is empty, or an
    /// error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ApiError::MissingRequired("iam_apikey"));
        }
        Self::build(Some(api_key), None)
    }

    /// Creates a manager that always hands out a caller-managed access token.
    pub fn with_access_token(access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(ApiError::MissingRequired("iam_access_token"));
        }
        Self::build(None, Some(access_token))
    }

    fn build(api_key: Option<String>, user_access_token: Option<String>) -> Result<Self> {
        Ok(Self {
            http: AssistantV1::http_client(false)?,
            url: DEFAULT_IAM_URL.to_string(),
            api_key,
            user_access_token,
            ssl_verification_disabled: false,
            token: Mutex::new(None),
        })
    }

    /// Points the manager at a different IAM token endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The IAM token endpoint in use.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Accepts invalid TLS certificates from the token endpoint.
    ///
    /// Only for test environments with self-signed certificates.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Result<Self> {
        self.http = AssistantV1::http_client(disable)?;
        self.ssl_verification_disabled = disable;
        Ok(self)
    }

    /// Whether invalid TLS certificates from the token endpoint are accepted.
    pub fn is_ssl_verification_disabled(&self) -> bool {
        self.ssl_verification_disabled
    }

    /// Returns a valid access token, fetching or refreshing it when needed.
    pub async fn token(&self) -> Result<String> {
        if let Some(token) = &self.user_access_token {
            return Ok(token.clone());
        }

        let mut cached = self.token.lock().await;
        let now = Utc::now().timestamp();

        let fresh = match cached.as_ref() {
            Some(token) if !token.is_expired_at(now) => return Ok(token.access_token.clone()),
            Some(token) if !token.is_refresh_expired_at(now) => {
                debug!("IAM access token expired, refreshing");
                self.refresh_token(&token.refresh_token).await?
            }
            _ => {
                debug!("Requesting IAM access token");
                self.request_token().await?
            }
        };

        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<IamToken> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingRequired("iam_apikey"))?;

        self.exchange(&[
            ("grant_type", APIKEY_GRANT_TYPE),
            ("apikey", api_key),
            ("response_type", "cloud_iam"),
        ])
        .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<IamToken> {
        self.exchange(&[
            ("grant_type", REFRESH_GRANT_TYPE),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn exchange(&self, form: &[(&str, &str)]) -> Result<IamToken> {
        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, basic_authorization(IAM_CLIENT_ID, IAM_CLIENT_SECRET))
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "IAM token request failed");
            return Err(ApiError::Service {
                status,
                headers,
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TokenSource for IamTokenManager {
    async fn access_token(&self) -> Result<String> {
        self.token().await
    }
}
