//
//  watson-assistant
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Watson Assistant Library
//!
//! A typed client for the IBM Watson Assistant v1 REST API.
//!
//! ## Overview
//!
//! Every REST operation of the service (sending messages, managing
//! workspaces, intents, examples, counterexamples, entities, values,
//! synonyms, dialog nodes, reading logs, deleting user data) is a method on
//! [`AssistantV1`]. Each method takes an options struct, sends exactly one
//! request, and returns the decoded result together with the HTTP status code
//! and headers.
//!
//! ## Features
//!
//! - **Typed Models**: Requests and responses are plain serde structs
//! - **Authentication**: Basic credentials, IAM api keys, or access tokens
//! - **Configuration**: TOML config file and `VCAP_SERVICES` discovery
//! - **Pagination**: Cursor helpers that collect every page
//!
//! ## Module Structure
//!
//! - [`api`]: The client, request building, resource types and operations
//! - [`auth`]: Credentials and the IAM token manager
//! - [`config`]: Service configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use watson_assistant::api::v1::MessageOptions;
//! use watson_assistant::{AssistantV1, ServiceConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::load()?.with_vcap("conversation");
//! let client = AssistantV1::from_config(&config)?;
//!
//! let response = client
//!     .message(&MessageOptions::new("workspace-id").with_text("Hello"))
//!     .await?;
//!
//! println!("HTTP {}", response.status_code);
//! for text in response.result.output.text {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (requests at `debug`, token endpoint
//! failures at `warn`) and leaves installing a subscriber to the application.

/// HTTP client and Assistant v1 operations.
///
/// The client handles the `version` parameter, authentication, request
/// building, and error mapping.
pub mod api;

/// Authentication and credential management.
///
/// Supports Basic credentials and Bearer tokens, including tokens obtained
/// from IBM Cloud IAM with an api key.
pub mod auth;

/// Service configuration.
pub mod config;

pub use api::AssistantV1;
pub use auth::AuthCredential;
pub use config::ServiceConfig;

/// Crate version, sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
