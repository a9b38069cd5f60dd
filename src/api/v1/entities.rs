//
//  watson-assistant
//  api/v1/entities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Entity API types and operations.
//!
//! An entity (e.g. `@size`) is a term or object relevant to intents, defined
//! by its [`Value`]s. Contextual entities are additionally annotated in intent
//! examples; [`AssistantV1::list_mentions`] lists those annotations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{Metadata, Value};
use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// An entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    /// The name of the entity, without the leading `@`.
    #[serde(default)]
    pub entity: String,

    /// The description of the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any metadata related to the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Whether to use fuzzy matching for the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,

    /// When the entity was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the entity was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// The values of the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

impl Entity {
    /// Creates an entity with only a name.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// One page of entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCollection {
    /// The entities on this page.
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

/// A mention of a contextual entity in an intent example.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMention {
    /// The text of the example containing the mention.
    #[serde(default)]
    pub text: String,

    /// The intent the example belongs to.
    #[serde(default)]
    pub intent: String,

    /// Zero-based start and end offsets of the mention within the text.
    #[serde(default)]
    pub location: Vec<i64>,
}

/// The mentions of a contextual entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMentionCollection {
    /// The mentions, in the `examples` member of the response.
    #[serde(default)]
    pub examples: Vec<EntityMention>,

    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_entities`].
#[derive(Debug, Clone, Default)]
pub struct ListEntitiesOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// Whether to include the values of each entity.
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

impl ListEntitiesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_entity`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEntityOptions {
    #[serde(skip)]
    pub workspace_id: String,
    /// The name of the entity.
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_entity`].
#[derive(Debug, Clone, Default)]
pub struct GetEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_entity`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEntityOptions {
    #[serde(skip)]
    pub workspace_id: String,
    /// The current entity name.
    #[serde(skip)]
    pub entity: String,
    #[serde(rename = "entity", skip_serializing_if = "Option::is_none")]
    pub new_entity: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    #[serde(rename = "metadata", skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Metadata>,
    #[serde(rename = "fuzzy_match", skip_serializing_if = "Option::is_none")]
    pub new_fuzzy_match: Option<bool>,
    #[serde(rename = "values", skip_serializing_if = "Option::is_none")]
    pub new_values: Option<Vec<Value>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_entity`].
#[derive(Debug, Clone, Default)]
pub struct DeleteEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub headers: HashMap<String, String>,
}

impl DeleteEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::list_mentions`].
#[derive(Debug, Clone, Default)]
pub struct ListMentionsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListMentionsOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

const ENTITIES_PATH: &str = "/v1/workspaces/{workspace_id}/entities";
const ENTITY_PATH: &str = "/v1/workspaces/{workspace_id}/entities/{entity}";

impl AssistantV1 {
    /// Lists the entities of a workspace.
    ///
    /// `GET /v1/workspaces/{workspace_id}/entities`
    pub async fn list_entities(
        &self,
        options: &ListEntitiesOptions,
    ) -> Result<DetailedResponse<EntityCollection>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(Method::GET, ENTITIES_PATH, &[options.workspace_id.as_str()])?
            .with_optional_query("export", options.export)
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Creates an entity, optionally with its values.
    ///
    /// `POST /v1/workspaces/{workspace_id}/entities`
    pub async fn create_entity(
        &self,
        options: &CreateEntityOptions,
    ) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(Method::POST, ENTITIES_PATH, &[options.workspace_id.as_str()])?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets an entity, optionally with its values.
    ///
    /// `GET /v1/workspaces/{workspace_id}/entities/{entity}`
    pub async fn get_entity(&self, options: &GetEntityOptions) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(
                Method::GET,
                ENTITY_PATH,
                &[options.workspace_id.as_str(), options.entity.as_str()],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates an entity.
    ///
    /// `POST /v1/workspaces/{workspace_id}/entities/{entity}`
    pub async fn update_entity(
        &self,
        options: &UpdateEntityOptions,
    ) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(
                Method::POST,
                ENTITY_PATH,
                &[options.workspace_id.as_str(), options.entity.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes an entity.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}/entities/{entity}`
    pub async fn delete_entity(&self, options: &DeleteEntityOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(
                Method::DELETE,
                ENTITY_PATH,
                &[options.workspace_id.as_str(), options.entity.as_str()],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }

    /// Lists the mentions of a contextual entity in intent examples.
    ///
    /// `GET /v1/workspaces/{workspace_id}/entities/{entity}/mentions`
    pub async fn list_mentions(
        &self,
        options: &ListMentionsOptions,
    ) -> Result<DetailedResponse<EntityMentionCollection>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;

        let builder = self
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/entities/{entity}/mentions",
                &[options.workspace_id.as_str(), options.entity.as_str()],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::ValueType;

    #[test]
    fn test_decode_exported_entity() {
        let json = r#"{
            "entity": "size",
            "fuzzy_match": true,
            "values": [
                {"value": "large", "type": "synonyms", "synonyms": ["big", "huge"]},
                {"value": "phone", "type": "patterns", "patterns": ["\\d{3}-\\d{4}"]}
            ]
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        let values = entity.values.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value_type, Some(ValueType::Synonyms));
        assert_eq!(values[1].patterns.as_ref().unwrap()[0], "\\d{3}-\\d{4}");
    }

    #[test]
    fn test_decode_mentions() {
        let json = r#"{
            "examples": [{"text": "large pizza", "intent": "order", "location": [0, 5]}],
            "pagination": {"refresh_url": "/v1/workspaces/ws/entities/size/mentions"}
        }"#;
        let mentions: EntityMentionCollection = serde_json::from_str(json).unwrap();
        assert_eq!(mentions.examples[0].intent, "order");
        assert_eq!(mentions.examples[0].location, vec![0, 5]);
    }

    #[test]
    fn test_update_entity_body() {
        let options = UpdateEntityOptions {
            new_fuzzy_match: Some(false),
            ..UpdateEntityOptions::new("ws", "size")
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body, serde_json::json!({"fuzzy_match": false}));
    }
}
