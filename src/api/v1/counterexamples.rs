//
//  watson-assistant
//  api/v1/counterexamples.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Counterexamples: inputs marked as irrelevant to every intent.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// A counterexample.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Counterexample {
    /// The text of the counterexample.
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// One page of counterexamples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    #[serde(default)]
    pub counterexamples: Vec<Counterexample>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_counterexamples`].
#[derive(Debug, Clone, Default)]
pub struct ListCounterexamplesOptions {
    pub workspace_id: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListCounterexamplesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_counterexample`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCounterexampleOptions {
    #[serde(skip)]
    pub workspace_id: String,
    pub text: String,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_counterexample`].
#[derive(Debug, Clone, Default)]
pub struct GetCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_counterexample`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCounterexampleOptions {
    #[serde(skip)]
    pub workspace_id: String,
    /// The current text.
    #[serde(skip)]
    pub text: String,
    /// The new text.
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_counterexample`].
#[derive(Debug, Clone, Default)]
pub struct DeleteCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub headers: HashMap<String, String>,
}

impl DeleteCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

const COUNTEREXAMPLES_PATH: &str = "/v1/workspaces/{workspace_id}/counterexamples";
const COUNTEREXAMPLE_PATH: &str = "/v1/workspaces/{workspace_id}/counterexamples/{text}";

impl AssistantV1 {
    /// Lists the counterexamples of a workspace.
    pub async fn list_counterexamples(
        &self,
        options: &ListCounterexamplesOptions,
    ) -> Result<DetailedResponse<CounterexampleCollection>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(Method::GET, COUNTEREXAMPLES_PATH, &[options.workspace_id.as_str()])?
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Marks an input as irrelevant.
    pub async fn create_counterexample(
        &self,
        options: &CreateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        require("workspace_id", &options.workspace_id)?;
        require("text", &options.text)?;

        let builder = self
            .request(Method::POST, COUNTEREXAMPLES_PATH, &[options.workspace_id.as_str()])?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets a counterexample.
    pub async fn get_counterexample(
        &self,
        options: &GetCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        require("workspace_id", &options.workspace_id)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::GET,
                COUNTEREXAMPLE_PATH,
                &[options.workspace_id.as_str(), options.text.as_str()],
            )?
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates the text of a counterexample.
    pub async fn update_counterexample(
        &self,
        options: &UpdateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        require("workspace_id", &options.workspace_id)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::POST,
                COUNTEREXAMPLE_PATH,
                &[options.workspace_id.as_str(), options.text.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes a counterexample.
    pub async fn delete_counterexample(
        &self,
        options: &DeleteCounterexampleOptions,
    ) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::DELETE,
                COUNTEREXAMPLE_PATH,
                &[options.workspace_id.as_str(), options.text.as_str()],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}
