//
//  watson-assistant
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Watson Assistant Client
//!
//! This module provides the types shared by every operation of the client:
//! the error type, the response wrapper, and the required-field checks run
//! before a request is sent.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`DetailedResponse`] - Decoded result plus HTTP status and headers
//! - [`require`] - Local validation of required option fields
//! - Pagination types (re-exported from the `pagination` submodule)
//!
//! # Example
//!
//! ```rust
//! use watson_assistant::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::MissingRequired(field)) => println!("Set {} first", field),
//!         Err(e) if e.is_not_found() => println!("No such resource"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Watson Assistant API operations.
///
/// Errors fall into two groups:
///
/// | Group | Variants | Network I/O attempted |
/// |-------|----------|-----------------------|
/// | Local | `MissingRequired`, `InvalidRequest`, `InvalidUrl`, `Serialization` | No (except response decoding) |
/// | Remote | `Network`, `Service` | Yes |
///
/// The service's error bodies are not parsed: a non-2xx response is reported
/// as [`ApiError::Service`] whose message is the body text, unchanged.
///
/// # Example
///
/// ```rust
/// use watson_assistant::api::common::ApiError;
///
/// let err = ApiError::MissingRequired("workspace_id");
/// assert_eq!(err.to_string(), "workspace_id must be provided");
/// assert!(err.status().is_none());
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required option was empty or not set.
    ///
    /// Raised before any network request is made.
    #[error("{0} must be provided")]
    MissingRequired(&'static str),

    /// The request could not be assembled.
    ///
    /// Covers path templates whose placeholders do not match the supplied
    /// values, and header names or values that are not valid HTTP.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The configured service URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request body could not be encoded, or a response body could not be
    /// decoded into the expected result type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A transport-level failure (DNS, connection refused, TLS, timeout).
    ///
    /// The underlying `reqwest::Error` is passed through unchanged.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    ///
    /// # Fields
    ///
    /// - `status` - The HTTP status code of the response
    /// - `headers` - The response headers
    /// - `body` - The raw response body, used verbatim as the error message
    #[error("{body}")]
    Service {
        /// HTTP status code.
        status: StatusCode,
        /// Response headers.
        headers: HeaderMap,
        /// Raw response body.
        body: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code if this error came from a service response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the response headers if this error came from a service response.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Service { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Checks whether the service reported the resource as missing (404).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Checks whether the service rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Checks whether the error was detected locally, before any request.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingRequired(_) | Self::InvalidRequest(_) | Self::InvalidUrl(_)
        )
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// A decoded service response together with its HTTP metadata.
///
/// Every operation of [`AssistantV1`](crate::api::AssistantV1) returns one of
/// these on success. Operations without a response body (deletes) use
/// `DetailedResponse<()>`.
///
/// # Type Parameters
///
/// - `T` - The type the response body was decoded into
///
/// # Example
///
/// ```rust,no_run
/// use watson_assistant::api::{AssistantV1, v1::GetWorkspaceOptions};
///
/// # async fn example() -> watson_assistant::api::common::Result<()> {
/// let client = AssistantV1::new("2018-07-10")?;
/// let response = client.get_workspace(&GetWorkspaceOptions::new("ws-id")).await?;
/// println!("{} -> {}", response.status_code, response.result.name.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code of the response.
    pub status_code: u16,

    /// Response headers as returned by the service.
    pub headers: HeaderMap,

    /// The decoded response body.
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Consumes the response and returns only the decoded body.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Looks up a response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Checks that a required option field has been filled in.
///
/// Empty strings count as missing, matching the service's own rule that path
/// parameters cannot be empty.
///
/// # Example
///
/// ```rust
/// use watson_assistant::api::common::require;
///
/// assert!(require("workspace_id", "abc").is_ok());
/// assert!(require("workspace_id", "").is_err());
/// ```
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApiError::MissingRequired(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("intent", "greeting").is_ok());
        assert!(matches!(
            require("intent", ""),
            Err(ApiError::MissingRequired("intent"))
        ));
    }

    #[test]
    fn test_service_error_message_is_body() {
        let err = ApiError::Service {
            status: StatusCode::NOT_FOUND,
            headers: HeaderMap::new(),
            body: r#"{"error":"Resource not found","code":404}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"{"error":"Resource not found","code":404}"#);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
        assert!(!err.is_local());
    }

    #[test]
    fn test_local_errors() {
        assert!(ApiError::MissingRequired("text").is_local());
        assert!(ApiError::InvalidRequest("bad".into()).is_local());
    }
}
