//
//  watson-assistant
//  api/v1/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Watson Assistant API v1 implementation.
//!
//! This module provides type-safe Rust bindings for the Assistant v1 REST API.
//! Each submodule covers one resource and contains its data structures, the
//! options struct for every operation, and the operations themselves as
//! methods on [`AssistantV1`](crate::api::AssistantV1).
//!
//! # Module Organization
//!
//! - [`message`] - Sending user input to a workspace
//! - [`workspaces`] - Workspace management
//! - [`intents`] - Intents
//! - [`examples`] - User input examples of an intent
//! - [`counterexamples`] - Inputs marked as irrelevant
//! - [`entities`] - Entities and entity mentions
//! - [`values`] - Entity values
//! - [`synonyms`] - Synonyms of entity values
//! - [`dialog_nodes`] - Dialog tree nodes
//! - [`logs`] - Conversation logs
//! - [`user_data`] - Deleting data for a customer ID
//!
//! # Options
//!
//! Every operation takes an options struct. Path parameters are plain
//! `String` fields filled by `new(...)`; everything else is optional and
//! skipped when `None`. Each options struct also carries a `headers` map for
//! per-call headers.
//!
//! ```rust
//! use watson_assistant::api::v1::ListIntentsOptions;
//!
//! let options = ListIntentsOptions {
//!     page_limit: Some(10),
//!     sort: Some("intent".to_string()),
//!     ..ListIntentsOptions::new("workspace-id")
//! };
//! assert_eq!(options.workspace_id, "workspace-id");
//! ```
//!
//! # Notes
//!
//! - Timestamps are ISO 8601 and decode into `chrono::DateTime<Utc>`
//! - Update operations name their body fields `new_*`; they are sent under
//!   the plain JSON key (e.g. `new_intent` is sent as `intent`)
//! - Server-side validation rules (lengths, allowed characters) are not
//!   checked client-side

pub mod counterexamples;
pub mod dialog_nodes;
pub mod entities;
pub mod examples;
pub mod intents;
pub mod logs;
pub mod message;
pub mod synonyms;
pub mod user_data;
pub mod values;
pub mod workspaces;

pub use counterexamples::*;
pub use dialog_nodes::*;
pub use entities::*;
pub use examples::*;
pub use intents::*;
pub use logs::*;
pub use message::*;
pub use synonyms::*;
pub use user_data::*;
pub use values::*;
pub use workspaces::*;

/// Free-form JSON object used for metadata, context, and similar fields.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
