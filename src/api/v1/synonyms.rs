//
//  watson-assistant
//  api/v1/synonyms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Synonyms of entity values.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// A synonym of an entity value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Synonym {
    #[serde(default)]
    pub synonym: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// One page of synonyms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymCollection {
    #[serde(default)]
    pub synonyms: Vec<Synonym>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_synonyms`].
#[derive(Debug, Clone, Default)]
pub struct ListSynonymsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListSynonymsOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_synonym`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSynonymOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub entity: String,
    #[serde(skip)]
    pub value: String,
    pub synonym: String,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_synonym`].
#[derive(Debug, Clone, Default)]
pub struct GetSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_synonym`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSynonymOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub entity: String,
    #[serde(skip)]
    pub value: String,
    /// The current synonym text.
    #[serde(skip)]
    pub synonym: String,
    #[serde(rename = "synonym", skip_serializing_if = "Option::is_none")]
    pub new_synonym: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_synonym`].
#[derive(Debug, Clone, Default)]
pub struct DeleteSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub headers: HashMap<String, String>,
}

impl DeleteSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }
}

const SYNONYMS_PATH: &str = "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms";
const SYNONYM_PATH: &str =
    "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}";

impl AssistantV1 {
    /// Lists the synonyms of an entity value.
    pub async fn list_synonyms(
        &self,
        options: &ListSynonymsOptions,
    ) -> Result<DetailedResponse<SynonymCollection>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;

        let builder = self
            .request(
                Method::GET,
                SYNONYMS_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                ],
            )?
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Adds a synonym to an entity value.
    pub async fn create_synonym(
        &self,
        options: &CreateSynonymOptions,
    ) -> Result<DetailedResponse<Synonym>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;
        require("synonym", &options.synonym)?;

        let builder = self
            .request(
                Method::POST,
                SYNONYMS_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                ],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets a synonym.
    pub async fn get_synonym(&self, options: &GetSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;
        require("synonym", &options.synonym)?;

        let builder = self
            .request(
                Method::GET,
                SYNONYM_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                    options.synonym.as_str(),
                ],
            )?
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates a synonym.
    pub async fn update_synonym(
        &self,
        options: &UpdateSynonymOptions,
    ) -> Result<DetailedResponse<Synonym>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;
        require("synonym", &options.synonym)?;

        let builder = self
            .request(
                Method::POST,
                SYNONYM_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                    options.synonym.as_str(),
                ],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes a synonym.
    pub async fn delete_synonym(&self, options: &DeleteSynonymOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;
        require("synonym", &options.synonym)?;

        let builder = self
            .request(
                Method::DELETE,
                SYNONYM_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                    options.synonym.as_str(),
                ],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}
