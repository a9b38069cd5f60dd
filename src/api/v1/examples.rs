//
//  watson-assistant
//  api/v1/examples.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User input examples of an intent.
//!
//! Example text is used as a path segment by the get/update/delete operations;
//! it is percent-encoded, so spaces and slashes are fine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// A user input example of an intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Example {
    /// The text of the example.
    #[serde(default)]
    pub text: String,

    /// Contextual entity mentions within the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,

    /// When the example was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the example was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    /// Creates an example with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A mention of a contextual entity in an example.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Mention {
    /// The name of the entity.
    #[serde(default)]
    pub entity: String,

    /// Zero-based start and end offsets of the mention within the text.
    #[serde(default)]
    pub location: Vec<i64>,
}

/// One page of examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleCollection {
    /// The examples on this page.
    #[serde(default)]
    pub examples: Vec<Example>,

    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_examples`].
#[derive(Debug, Clone, Default)]
pub struct ListExamplesOptions {
    pub workspace_id: String,
    pub intent: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListExamplesOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_example`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateExampleOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub intent: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_example`].
#[derive(Debug, Clone, Default)]
pub struct GetExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_example`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateExampleOptions {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub intent: String,
    /// The current example text.
    #[serde(skip)]
    pub text: String,
    /// The new example text.
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    /// Mentions replacing the existing ones.
    #[serde(rename = "mentions", skip_serializing_if = "Option::is_none")]
    pub new_mentions: Option<Vec<Mention>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_example`].
#[derive(Debug, Clone, Default)]
pub struct DeleteExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub headers: HashMap<String, String>,
}

impl DeleteExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

const EXAMPLES_PATH: &str = "/v1/workspaces/{workspace_id}/intents/{intent}/examples";
const EXAMPLE_PATH: &str = "/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}";

impl AssistantV1 {
    /// Lists the user input examples of an intent.
    ///
    /// `GET /v1/workspaces/{workspace_id}/intents/{intent}/examples`
    pub async fn list_examples(
        &self,
        options: &ListExamplesOptions,
    ) -> Result<DetailedResponse<ExampleCollection>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;

        let builder = self
            .request(
                Method::GET,
                EXAMPLES_PATH,
                &[options.workspace_id.as_str(), options.intent.as_str()],
            )?
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Adds a user input example to an intent.
    ///
    /// `POST /v1/workspaces/{workspace_id}/intents/{intent}/examples`
    pub async fn create_example(
        &self,
        options: &CreateExampleOptions,
    ) -> Result<DetailedResponse<Example>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::POST,
                EXAMPLES_PATH,
                &[options.workspace_id.as_str(), options.intent.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets a user input example.
    ///
    /// `GET /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`
    pub async fn get_example(
        &self,
        options: &GetExampleOptions,
    ) -> Result<DetailedResponse<Example>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::GET,
                EXAMPLE_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.intent.as_str(),
                    options.text.as_str(),
                ],
            )?
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates a user input example.
    ///
    /// `POST /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`
    pub async fn update_example(
        &self,
        options: &UpdateExampleOptions,
    ) -> Result<DetailedResponse<Example>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::POST,
                EXAMPLE_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.intent.as_str(),
                    options.text.as_str(),
                ],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes a user input example.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`
    pub async fn delete_example(
        &self,
        options: &DeleteExampleOptions,
    ) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        require("text", &options.text)?;

        let builder = self
            .request(
                Method::DELETE,
                EXAMPLE_PATH,
                &[
                    options.workspace_id.as_str(),
                    options.intent.as_str(),
                    options.text.as_str(),
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
    fn test_decode_example_with_mentions() {
        let json = r#"{
            "text": "large pizza please",
            "mentions": [{"entity": "size", "location": [0, 5]}],
            "created": "2018-07-10T12:00:00.000Z"
        }"#;
        let example: Example = serde_json::from_str(json).unwrap();
        assert_eq!(example.text, "large pizza please");
        assert_eq!(
            example.mentions.unwrap(),
            vec![Mention {
                entity: "size".to_string(),
                location: vec![0, 5]
            }]
        );
    }

    #[test]
    fn test_update_body_uses_plain_keys() {
        let options = UpdateExampleOptions {
            new_text: Some("small pizza".to_string()),
            ..UpdateExampleOptions::new("ws", "order", "large pizza")
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body, serde_json::json!({"text": "small pizza"}));
    }
}
