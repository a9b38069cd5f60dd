//
//  watson-assistant
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Turns the pieces of an operation (method, path template, path values, query
//! parameters, headers, JSON body) into a `reqwest::Request`.
//!
//! Path templates use `{name}` placeholders for whole segments, e.g.
//! `/v1/workspaces/{workspace_id}/intents/{intent}`. Placeholders are filled
//! from the supplied values in order, and each value is percent-encoded as a
//! single path segment, so an example text such as `how are you?` stays one
//! segment.
//!
//! ## Example
//!
//! ```rust
//! use reqwest::{Client, Method};
//! use watson_assistant::api::RequestBuilder;
//!
//! # fn example() -> watson_assistant::api::common::Result<()> {
//! let request = RequestBuilder::new(Method::GET, "https://example.com/assistant/api")?
//!     .with_path("/v1/workspaces/{workspace_id}/intents/{intent}", &["ws", "greeting"])?
//!     .with_query("version", "2018-07-10")
//!     .build(&Client::new())?;
//!
//! assert_eq!(request.url().path(), "/assistant/api/v1/workspaces/ws/intents/greeting");
//! assert_eq!(request.url().query(), Some("version=2018-07-10"));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use url::Url;

use super::common::{ApiError, Result};

/// Matches a path segment that is a single `{placeholder}`.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{([A-Za-z0-9_]+)\}$").unwrap());

/// Builder for a single service request.
///
/// Nothing is sent by the builder itself; [`build`](Self::build) produces a
/// `reqwest::Request` that the client executes.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Starts a request against the given service URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `service_url` is not a valid URL.
    pub fn new(method: Method, service_url: &str) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(service_url)?,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Appends a path template to the service URL, filling placeholders in order.
    ///
    /// # Parameters
    ///
    /// * `template` - Path such as `/v1/workspaces/{workspace_id}`
    /// * `params` - One value per placeholder, in the order they appear
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the number of values differs
    /// from the number of placeholders, when a value is `.` or `..`, or when
    /// the service URL cannot carry path segments.
    pub fn with_path(mut self, template: &str, params: &[&str]) -> Result<Self> {
        let mut values = params.iter();
        let mut segments: Vec<&str> = Vec::new();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            if PLACEHOLDER.is_match(segment) {
                let value = values.next().ok_or_else(|| {
                    ApiError::InvalidRequest(format!(
                        "no value supplied for {} in {}",
                        segment, template
                    ))
                })?;
                // URL parsing drops dot segments, even percent-encoded ones.
                if *value == "." || *value == ".." {
                    return Err(ApiError::InvalidRequest(format!(
                        "{:?} is not a valid value for {} in {}",
                        value, segment, template
                    )));
                }
                segments.push(*value);
            } else {
                segments.push(segment);
            }
        }

        if values.next().is_some() {
            return Err(ApiError::InvalidRequest(format!(
                "{} path values supplied for {}",
                params.len(),
                template
            )));
        }

        let base = self.url.to_string();
        self.url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("{} cannot take a path", base)))?
            .pop_if_empty()
            .extend(segments);

        Ok(self)
    }

    /// Adds a query parameter.
    pub fn with_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn with_optional_query<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_query(name, value),
            None => self,
        }
    }

    /// Sets a header, replacing any previous value with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the name or value is not valid
    /// in an HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::InvalidRequest(format!("header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::InvalidRequest(format!("header {}: {}", name, e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets every header in the map.
    pub fn with_headers(self, headers: &HashMap<String, String>) -> Result<Self> {
        headers
            .iter()
            .try_fold(self, |builder, (name, value)| builder.with_header(name, value))
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if the body cannot be encoded.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// The HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request URL, including the encoded query string.
    pub fn url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        url
    }

    /// The headers set so far.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The encoded JSON body, if one was set.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Assembles the final `reqwest::Request`.
    pub fn build(self, http: &Client) -> Result<reqwest::Request> {
        let url = self.url();
        let mut request = http.request(self.method, url).headers(self.headers);
        if let Some(body) = self.body {
            request = request.body(body);
        }
        Ok(request.build()?)
    }
}
