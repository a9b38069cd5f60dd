//
//  watson-assistant
//  api/v1/values.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Entity value API types and operations.
//!
//! A value is matched either by its synonyms or by regular expression
//! patterns, never both; [`ValueType`] says which.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// How an entity value is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Matched by the value text and its synonyms.
    Synonyms,
    /// Matched by regular expression patterns.
    Patterns,
}

/// A value of an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Value {
    /// The text of the value.
    #[serde(default)]
    pub value: String,

    /// Any metadata related to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// How the value is matched.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,

    /// Synonyms of the value; only for [`ValueType::Synonyms`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,

    /// Regular expressions matching the value; only for [`ValueType::Patterns`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Value {
    /// Creates a value with only its text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Creates a synonym-matched value.
    pub fn with_synonyms(value: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            value: value.into(),
            value_type: Some(ValueType::Synonyms),
            synonyms: Some(synonyms),
            ..Default::default()
        }
    }
}

/// One page of entity values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueCollection {
    #[serde(default)]
    pub values: Vec<Value>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_values`].
#[derive(Debug, Clone, Default)]
pub struct ListValuesOptions {
    pub workspace_id: String,
    pub entity: String,
    /// Whether to include the synonyms/patterns of each value.
    pub export: Option<bool>,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListValuesOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_value`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateValueOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub entity: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateValueOptions {
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

/// Options for [`AssistantV1::get_value`].
#[derive(Debug, Clone, Default)]
pub struct GetValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetValueOptions {
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

/// Options for [`AssistantV1::update_value`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateValueOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub entity: String,
    /// The current value text.
    #[serde(skip)]
    pub value: String,
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    #[serde(rename = "metadata", skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Metadata>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub new_value_type: Option<ValueType>,
    #[serde(rename = "synonyms", skip_serializing_if = "Option::is_none")]
    pub new_synonyms: Option<Vec<String>>,
    #[serde(rename = "patterns", skip_serializing_if = "Option::is_none")]
    pub new_patterns: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateValueOptions {
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

/// Options for [`AssistantV1::delete_value`].
#[derive(Debug, Clone, Default)]
pub struct DeleteValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub headers: HashMap<String, String>,
}

impl DeleteValueOptions {
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

const VALUES_PATH: &str = "/v1/workspaces/{workspace_id}/entities/{entity}/values";
const VALUE_PATH: &str = "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}";

impl AssistantV1 {
    /// Lists the values of an entity.
    ///
    /// `GET /v1/workspaces/{workspace_id}/entities/{entity}/values`
    pub async fn list_values(
        &self,
        options: &ListValuesOptions,
    ) -> Result<DetailedResponse<ValueCollection>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(
                Method::GET,
                VALUES_PATH,
                &[options.workspace_id.as_str(), options.entity.as_str()],
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

    /// Adds a value to an entity.
    ///
    /// `POST /v1/workspaces/{workspace_id}/entities/{entity}/values`
    pub async fn create_value(&self, options: &CreateValueOptions) -> Result<DetailedResponse<Value>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;

        let builder = self
            .request(
                Method::POST,
                VALUES_PATH,
                &[options.workspace_id.as_str(), options.entity.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets an entity value.
    ///
    /// `GET /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`
    pub async fn get_value(&self, options: &GetValueOptions) -> Result<DetailedResponse<Value>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;

        let builder = self
            .request(
                Method::GET,
                VALUE_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                ],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates an entity value.
    ///
    /// `POST /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`
    pub async fn update_value(&self, options: &UpdateValueOptions) -> Result<DetailedResponse<Value>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;

        let builder = self
            .request(
                Method::POST,
                VALUE_PATH,
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

    /// Deletes an entity value.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`
    pub async fn delete_value(&self, options: &DeleteValueOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        require("value", &options.value)?;

        let builder = self
            .request(
                Method::DELETE,
                VALUE_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.entity.as_str(),
                    options.value.as_str(),
                ],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_wire_names() {
        assert_eq!(
            serde_json::to_value(ValueType::Patterns).unwrap(),
            serde_json::json!("patterns")
        );
        assert_eq!(
            serde_json::from_str::<ValueType>(r#""synonyms""#).unwrap(),
            ValueType::Synonyms
        );
    }

    #[test]
    fn test_create_value_body() {
        let options = CreateValueOptions {
            value_type: Some(ValueType::Synonyms),
            synonyms: Some(vec!["big".to_string()]),
            ..CreateValueOptions::new("ws", "size", "large")
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"value": "large", "type": "synonyms", "synonyms": ["big"]})
        );
    }

    #[test]
    fn test_with_synonyms() {
        let value = Value::with_synonyms("large", vec!["big".to_string()]);
        assert_eq!(value.value_type, Some(ValueType::Synonyms));
        assert!(value.patterns.is_none());
    }
}
