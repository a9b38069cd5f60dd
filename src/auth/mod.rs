//
//  watson-assistant
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module provides the two mutually exclusive ways the client can
//! authenticate against Watson Assistant.
//!
//! ## Supported Authentication Methods
//!
//! - **Basic Authentication**: Service username and password, sent on every
//!   request as `Authorization: Basic base64(username:password)`.
//! - **Bearer Token**: A token obtained from a [`TokenSource`] on every request,
//!   sent as `Authorization: Bearer <token>`. The IAM token manager
//!   ([`IamTokenManager`]) fetches and refreshes tokens from an API key;
//!   [`StaticToken`] wraps a token the caller manages.
//!
//! ## Module Structure
//!
//! - [`iam`]: IAM token manager (api key to bearer token exchange and refresh)
//!
//! ## Example
//!
//! ```rust,no_run
//! use watson_assistant::auth::AuthCredential;
//!
//! # fn example() -> watson_assistant::api::common::Result<()> {
//! // Service credentials
//! let basic = AuthCredential::basic("username", "password");
//!
//! // IAM api key, exchanged for bearer tokens as needed
//! let iam = AuthCredential::iam("my-api-key")?;
//! # Ok(())
//! # }
//! ```

pub mod iam;

pub use iam::*;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::api::common::Result;

/// A provider of bearer access tokens.
///
/// The client asks its token source for a token before every request, so an
/// implementation is free to cache, refresh, or re-fetch as it sees fit.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use watson_assistant::auth::TokenSource;
///
/// #[derive(Debug)]
/// struct EnvToken;
///
/// #[async_trait]
/// impl TokenSource for EnvToken {
///     async fn access_token(&self) -> watson_assistant::api::common::Result<String> {
///         Ok(std::env::var("ASSISTANT_TOKEN").unwrap_or_default())
///     }
/// }
/// ```
#[async_trait]
pub trait TokenSource: Send + Sync + fmt::Debug {
    /// Returns a currently valid access token.
    async fn access_token(&self) -> Result<String>;
}

/// A caller-managed access token that is used as-is and never refreshed.
///
/// When the token expires the caller must build a new credential with a
/// fresh token.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Wraps an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Credentials attached to every request made by the client.
///
/// # Variants
///
/// - `Basic`: Service username and password.
/// - `Bearer`: A token source queried before each request.
///
/// # Example
///
/// ```rust
/// use watson_assistant::auth::AuthCredential;
///
/// let credential = AuthCredential::basic("user1", "pass1");
/// assert!(credential.is_basic());
///
/// let credential = AuthCredential::bearer("access-token");
/// assert!(!credential.is_basic());
/// ```
#[derive(Debug, Clone)]
pub enum AuthCredential {
    /// HTTP Basic authentication with the service credentials.
    Basic {
        /// The service username.
        username: String,
        /// The service password.
        password: String,
    },
    /// Bearer authentication with tokens from a [`TokenSource`].
    Bearer(Arc<dyn TokenSource>),
}

impl AuthCredential {
    /// Creates Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates Bearer credentials from a caller-managed access token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(Arc::new(StaticToken::new(token)))
    }

    /// Creates Bearer credentials backed by an [`IamTokenManager`] for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token manager's HTTP client cannot be built.
    pub fn iam(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::Bearer(Arc::new(IamTokenManager::new(api_key)?)))
    }

    /// Creates Bearer credentials from any token source.
    pub fn token_source(source: Arc<dyn TokenSource>) -> Self {
        Self::Bearer(source)
    }

    /// Checks whether these are Basic credentials.
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic { .. })
    }

    /// Produces the `Authorization` header value for the next request.
    ///
    /// For Bearer credentials this asks the token source for a token, which
    /// may involve a request to the token endpoint.
    pub async fn authorization(&self) -> Result<String> {
        match self {
            Self::Basic { username, password } => Ok(basic_authorization(username, password)),
            Self::Bearer(source) => Ok(format!("Bearer {}", source.access_token().await?)),
        }
    }
}

/// Builds a Basic `Authorization` header value.
///
/// # Example
///
/// ```rust
/// use watson_assistant::auth::basic_authorization;
///
/// assert_eq!(basic_authorization("user1", "pass1"), "Basic dXNlcjE6cGFzczE=");
/// ```
pub fn basic_authorization(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_authorization() {
        let expected = format!("Basic {}", STANDARD.encode("user1:pass1"));
        assert_eq!(basic_authorization("user1", "pass1"), expected);
        assert_eq!(expected, "Basic dXNlcjE6cGFzczE=");
    }

    #[test]
    fn test_basic_credential_header() {
        let credential = AuthCredential::basic("user1", "pass1");
        let header = tokio_test::block_on(credential.authorization()).unwrap();
        assert_eq!(header, "Basic dXNlcjE6cGFzczE=");
    }

    #[test]
    fn test_static_bearer_header() {
        let credential = AuthCredential::bearer("abc.def");
        let header = tokio_test::block_on(credential.authorization()).unwrap();
        assert_eq!(header, "Bearer abc.def");
        assert!(!credential.is_basic());
    }
}
