//
//  watson-assistant
//  api/v1/intents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Intent API types and operations.
//!
//! An intent is a goal the user might express (e.g. `#order_pizza`), trained
//! from a list of [`Example`] inputs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Example;
use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// An intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    /// The name of the intent, without the leading `#`.
    #[serde(default)]
    pub intent: String,

    /// The description of the intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the intent was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the intent was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// The user input examples of the intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Intent {
    /// Creates an intent with only a name, e.g. for a workspace body.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// One page of intents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentCollection {
    /// The intents on this page.
    #[serde(default)]
    pub intents: Vec<Intent>,

    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_intents`].
#[derive(Debug, Clone, Default)]
pub struct ListIntentsOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// Whether to include the examples of each intent.
    pub export: Option<bool>,
    /// Number of records to return per page.
    pub page_limit: Option<i64>,
    /// Whether to include the total count in the pagination details.
    pub include_count: Option<bool>,
    /// Attribute to sort by; prefix with `-` for descending order.
    pub sort: Option<String>,
    /// Cursor of the page to return.
    pub cursor: Option<String>,
    /// Whether to include `created` and `updated` timestamps.
    pub include_audit: Option<bool>,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl ListIntentsOptions {
    /// Creates options for the given workspace.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_intent`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIntentOptions {
    /// The workspace ID.
    #[serde(skip)]
    pub workspace_id: String,
    /// The name of the intent.
    pub intent: String,
    /// The description of the intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The user input examples of the intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    /// Extra headers for this call.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateIntentOptions {
    /// Creates options for a new intent in the given workspace.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_intent`].
#[derive(Debug, Clone, Default)]
pub struct GetIntentOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// The intent name.
    pub intent: String,
    /// Whether to include the examples of the intent.
    pub export: Option<bool>,
    /// Whether to include `created` and `updated` timestamps.
    pub include_audit: Option<bool>,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl GetIntentOptions {
    /// Creates options for the given intent.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_intent`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIntentOptions {
    /// The workspace ID.
    #[serde(skip)]
    pub workspace_id: String,
    /// The current intent name.
    #[serde(skip)]
    pub intent: String,
    /// The new intent name.
    #[serde(rename = "intent", skip_serializing_if = "Option::is_none")]
    pub new_intent: Option<String>,
    /// The new description.
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    /// Examples replacing the existing ones.
    #[serde(rename = "examples", skip_serializing_if = "Option::is_none")]
    pub new_examples: Option<Vec<Example>>,
    /// Extra headers for this call.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateIntentOptions {
    /// Creates options for the given intent with nothing to change yet.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_intent`].
#[derive(Debug, Clone, Default)]
pub struct DeleteIntentOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// The intent name.
    pub intent: String,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl DeleteIntentOptions {
    /// Creates options for the given intent.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

impl AssistantV1 {
    /// Lists the intents of a workspace.
    ///
    /// `GET /v1/workspaces/{workspace_id}/intents`
    pub async fn list_intents(
        &self,
        options: &ListIntentsOptions,
    ) -> Result<DetailedResponse<IntentCollection>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/intents",
                &[options.workspace_id.as_str()],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Creates an intent.
    ///
    /// `POST /v1/workspaces/{workspace_id}/intents`
    pub async fn create_intent(
        &self,
        options: &CreateIntentOptions,
    ) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;

        let builder = self
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/intents",
                &[options.workspace_id.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets an intent, optionally with its examples.
    ///
    /// `GET /v1/workspaces/{workspace_id}/intents/{intent}`
    pub async fn get_intent(&self, options: &GetIntentOptions) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;

        let builder = self
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/intents/{intent}",
                &[options.workspace_id.as_str(), options.intent.as_str()],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates an intent.
    ///
    /// `POST /v1/workspaces/{workspace_id}/intents/{intent}`
    pub async fn update_intent(
        &self,
        options: &UpdateIntentOptions,
    ) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;

        let builder = self
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/intents/{intent}",
                &[options.workspace_id.as_str(), options.intent.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes an intent.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}/intents/{intent}`
    pub async fn delete_intent(&self, options: &DeleteIntentOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;

        let builder = self
            .request(
                Method::DELETE,
                "/v1/workspaces/{workspace_id}/intents/{intent}",
                &[options.workspace_id.as_str(), options.intent.as_str()],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}
