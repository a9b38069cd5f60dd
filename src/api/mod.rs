//
//  watson-assistant
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Watson Assistant v1 REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with authentication and request execution
//! - [`request`]: Request builder (path templates, query, headers, JSON body)
//! - [`v1`]: Resource types, operation options, and operations
//! - [`common`]: Shared types (errors, detailed responses, pagination)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use watson_assistant::api::AssistantV1;
//! use watson_assistant::api::v1::ListWorkspacesOptions;
//! use watson_assistant::auth::AuthCredential;
//!
//! # async fn example() -> watson_assistant::api::common::Result<()> {
//! let client = AssistantV1::new("2018-07-10")?
//!     .with_auth(AuthCredential::basic("username", "password"));
//!
//! let response = client.list_workspaces(&ListWorkspacesOptions::default()).await?;
//! for workspace in response.result.workspaces {
//!     println!("{:?}", workspace.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`common::Result`]. Missing required options are
//! reported before any request is sent; a non-2xx response becomes
//! [`ApiError::Service`] carrying the status, headers, and body.

/// Core HTTP client for the Assistant v1 API.
pub mod client;

/// Request builder used by every operation.
pub mod request;

/// Assistant v1 resources and operations.
pub mod v1;

/// Common types shared by all operations.
pub mod common;

pub use client::AssistantV1;
pub use common::{ApiError, DetailedResponse};
pub use request::RequestBuilder;
