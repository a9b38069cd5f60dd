//
//  watson-assistant
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides [`ServiceConfig`], the settings an
//! [`AssistantV1`](crate::api::AssistantV1) client is built from. Settings can
//! be loaded from a TOML file stored in a platform-specific directory, filled
//! in from Cloud Foundry's `VCAP_SERVICES`, or set in code.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/watson-assistant/config.toml`
//! - **macOS**: `~/Library/Application Support/watson-assistant/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\watson-assistant\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! url = "https://gateway.watsonplatform.net/assistant/api"
//! version = "2018-07-10"
//! iam_apikey = "my-api-key"
//! learning_opt_out = true
//! ```
//!
//! ## Credential Selection
//!
//! | Configured | Authentication |
//! |------------|----------------|
//! | `iam_access_token` | Bearer, token used as-is |
//! | `iam_apikey` | Bearer, tokens from the IAM token endpoint |
//! | `username = "apikey"` + `password` | Bearer, password used as the api key |
//! | `username` + `password` | Basic |
//! | nothing | no `Authorization` header |
//!
//! ## Submodules
//!
//! - [`vcap`]: `VCAP_SERVICES` credential discovery

mod vcap;

pub use vcap::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthCredential, IamTokenManager};

/// Username that marks the password as an IAM api key.
pub const APIKEY_USERNAME: &str = "apikey";

/// Settings for an Assistant v1 client.
///
/// # Examples
///
/// ```rust
/// use watson_assistant::config::ServiceConfig;
///
/// let config = ServiceConfig {
///     version: "2018-07-10".to_string(),
///     username: Some("user".to_string()),
///     password: Some("pass".to_string()),
///     ..Default::default()
/// };
/// assert!(config.credential().unwrap().unwrap().is_basic());
/// ```
///
/// # Notes
///
/// - All fields use `#[serde(default)]`, so a partial file is fine
/// - The configuration file is created on first save if it doesn't exist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service URL; the public endpoint is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// API version date, e.g. `2018-07-10`.
    pub version: String,

    /// Service username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Service password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// IAM api key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_apikey: Option<String>,

    /// Caller-managed IAM access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_access_token: Option<String>,

    /// IAM token endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_url: Option<String>,

    /// Send `X-Watson-Learning-Opt-Out: true` with every request.
    pub learning_opt_out: bool,

    /// Accept invalid TLS certificates. Only for test environments.
    pub disable_ssl_verification: bool,
}

impl ServiceConfig {
    /// Creates a configuration for the given API version with nothing else set.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Loads the configuration from the default location.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, the
    /// file cannot be read, or its TOML is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or the default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "watson-assistant")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Fills unset URL and credential fields from `VCAP_SERVICES`.
    ///
    /// Fields that are already set are left alone.
    pub fn with_vcap(self, service_name: &str) -> Self {
        match vcap_credentials(service_name) {
            Some(credentials) => self.with_vcap_credentials(credentials),
            None => self,
        }
    }

    /// Fills unset URL and credential fields from the given credentials.
    pub fn with_vcap_credentials(mut self, credentials: VcapCredentials) -> Self {
        self.url = self.url.or(credentials.url);
        self.username = self.username.or(credentials.username);
        self.password = self.password.or(credentials.password);
        self.iam_apikey = self.iam_apikey.or(credentials.apikey);
        self
    }

    /// Chooses the credentials a client built from this configuration uses.
    ///
    /// IAM settings take precedence over a username and password. Empty
    /// strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if an IAM token manager cannot be created.
    pub fn credential(&self) -> crate::api::common::Result<Option<AuthCredential>> {
        if let Some(token) = non_empty(&self.iam_access_token) {
            return Ok(Some(AuthCredential::bearer(token)));
        }

        if let Some(manager) = self.iam_token_manager()? {
            return Ok(Some(AuthCredential::token_source(Arc::new(manager))));
        }

        match (non_empty(&self.username), non_empty(&self.password)) {
            (Some(username), Some(password)) => Ok(Some(AuthCredential::basic(username, password))),
            _ => Ok(None),
        }
    }

    /// Builds the IAM token manager for an api key, if one is configured.
    ///
    /// The token endpoint override and the TLS setting are carried over.
    pub(crate) fn iam_token_manager(&self) -> crate::api::common::Result<Option<IamTokenManager>> {
        let api_key = non_empty(&self.iam_apikey).or_else(|| {
            match (non_empty(&self.username), non_empty(&self.password)) {
                (Some(APIKEY_USERNAME), Some(password)) => Some(password),
                _ => None,
            }
        });

        let Some(api_key) = api_key else {
            return Ok(None);
        };

        let mut manager = IamTokenManager::new(api_key)?;
        if let Some(url) = non_empty(&self.iam_url) {
            manager = manager.with_url(url);
        }
        if self.disable_ssl_verification {
            manager = manager.with_disable_ssl_verification(true)?;
        }
        Ok(Some(manager))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
