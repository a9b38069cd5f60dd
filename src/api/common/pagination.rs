//
//  watson-assistant
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Watson Assistant List Responses
//!
//! Every list operation returns a collection object with a `pagination`
//! member. The service uses cursor-based pagination: the `next_cursor` of one
//! page is passed as the `cursor` query parameter of the next request.
//!
//! | Type | Used by | Fields |
//! |------|---------|--------|
//! | [`Pagination`] | workspaces, intents, entities, ... | refresh/next URL and cursor, totals |
//! | [`LogPagination`] | logs | next URL and cursor, matched count |
//!
//! # Example
//!
//! ```rust
//! use watson_assistant::api::common::Pagination;
//!
//! let json = r#"{
//!     "refresh_url": "/v1/workspaces?version=2018-07-10&page_limit=1",
//!     "next_url": "/v1/workspaces?cursor=base64=&version=2018-07-10&page_limit=1",
//!     "next_cursor": "base64="
//! }"#;
//!
//! let page: Pagination = serde_json::from_str(json).unwrap();
//! assert!(page.has_next());
//! assert_eq!(page.next_cursor(), Some("base64="));
//! ```

use serde::{Deserialize, Serialize};

/// Pagination details for list responses other than logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    /// The URL that will return the same page of results.
    #[serde(default)]
    pub refresh_url: String,

    /// The URL that will return the next page of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,

    /// Total number of objects that satisfy the request.
    ///
    /// Only present when `include_count=true` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,

    /// Total number of objects that match the filter, if one was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,

    /// A token identifying the current page of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,

    /// A token identifying the next page of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Pagination {
    /// Checks if there are more pages of results available.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Returns the cursor to pass as `cursor` when requesting the next page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }
}

/// Pagination details for log list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogPagination {
    /// The URL that will return the next page of results, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,

    /// Reserved for future use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,

    /// A token identifying the next page of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl LogPagination {
    /// Checks if there are more pages of log events available.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Returns the cursor for the next page of log events.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }
}
