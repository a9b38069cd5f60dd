//
//  watson-assistant
//  config/vcap.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Cloud Foundry Credential Discovery
//!
//! Applications bound to a Watson service on Cloud Foundry receive the
//! service credentials in the `VCAP_SERVICES` environment variable:
//!
//! ```json
//! {
//!   "conversation": [
//!     {
//!       "name": "my-assistant",
//!       "credentials": {
//!         "url": "https://gateway.watsonplatform.net/assistant/api",
//!         "username": "user",
//!         "password": "pass"
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! The first binding of the requested service wins.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::trace;

/// Name of the environment variable Cloud Foundry fills in.
pub const VCAP_SERVICES_ENV: &str = "VCAP_SERVICES";

/// Service name the Assistant service is bound under.
pub const ASSISTANT_SERVICE_NAME: &str = "conversation";

/// Credentials of one bound service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VcapCredentials {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub apikey: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VcapBinding {
    #[serde(default)]
    credentials: VcapCredentials,
}

/// Reads the credentials for `service_name` from `VCAP_SERVICES`.
///
/// Returns `None` when the variable is unset, unparsable, or has no binding
/// for the service.
pub fn vcap_credentials(service_name: &str) -> Option<VcapCredentials> {
    match std::env::var(VCAP_SERVICES_ENV) {
        Ok(raw) => parse_vcap_services(&raw, service_name),
        Err(_) => {
            trace!("{} is not set", VCAP_SERVICES_ENV);
            None
        }
    }
}

/// Finds the credentials for `service_name` in a `VCAP_SERVICES` document.
///
/// # Example
///
/// ```rust
/// use watson_assistant::config::parse_vcap_services;
///
/// let raw = r#"{"conversation": [{"credentials": {"username": "u", "password": "p"}}]}"#;
/// let credentials = parse_vcap_services(raw, "conversation").unwrap();
/// assert_eq!(credentials.username.as_deref(), Some("u"));
/// ```
pub fn parse_vcap_services(raw: &str, service_name: &str) -> Option<VcapCredentials> {
    let services: HashMap<String, Vec<VcapBinding>> = match serde_json::from_str(raw) {
        Ok(services) => services,
        Err(e) => {
            trace!(error = %e, "Ignoring unparsable {}", VCAP_SERVICES_ENV);
            return None;
        }
    };

    let binding = services
        .get(service_name)
        .and_then(|bindings| bindings.first());

    if binding.is_none() {
        trace!(service = service_name, "No binding in {}", VCAP_SERVICES_ENV);
    }

    binding.map(|binding| binding.credentials.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_binding_wins() {
        let raw = r#"{
            "conversation": [
                {"credentials": {"url": "https://one", "apikey": "key-1"}},
                {"credentials": {"url": "https://two"}}
            ]
        }"#;
        let credentials = parse_vcap_services(raw, "conversation").unwrap();
        assert_eq!(credentials.url.as_deref(), Some("https://one"));
        assert_eq!(credentials.apikey.as_deref(), Some("key-1"));
        assert!(credentials.username.is_none());
    }

    #[test]
    fn test_missing_service() {
        let raw = r#"{"discovery": [{"credentials": {"username": "u"}}]}"#;
        assert!(parse_vcap_services(raw, "conversation").is_none());
    }

    #[test]
    fn test_empty_binding_list() {
        assert!(parse_vcap_services(r#"{"conversation": []}"#, "conversation").is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_vcap_services("not json", "conversation").is_none());
    }
}
