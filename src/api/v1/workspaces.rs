//
//  watson-assistant
//  api/v1/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace API types and operations.
//!
//! A workspace is the container for one assistant's training data and dialog:
//!
//! ```text
//! Workspace
//! ├── Intents
//! │   └── Examples
//! ├── Entities
//! │   └── Values
//! │       └── Synonyms / patterns
//! ├── Dialog nodes
//! └── Counterexamples
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use watson_assistant::api::AssistantV1;
//! use watson_assistant::api::v1::CreateWorkspaceOptions;
//!
//! # async fn example(client: AssistantV1) -> watson_assistant::api::common::Result<()> {
//! let options = CreateWorkspaceOptions {
//!     name: Some("Pizza bot".to_string()),
//!     language: Some("en".to_string()),
//!     ..Default::default()
//! };
//! let workspace = client.create_workspace(&options).await?.result;
//! println!("Created {:?}", workspace.workspace_id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{Counterexample, DialogNode, Entity, Intent, Metadata};
use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// A workspace.
///
/// The nested collections (`intents`, `entities`, `dialog_nodes`,
/// `counterexamples`) are only returned when the workspace is fetched with
/// `export=true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// The name of the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description of the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The language of the workspace, e.g. `en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Any metadata that is required by the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Whether training data from the workspace may be used by IBM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,

    /// Global settings for the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,

    /// The workspace ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    /// Training status, e.g. `Available` or `Training`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the workspace was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the workspace was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// The intents defined in the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,

    /// The entities defined in the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,

    /// The dialog nodes defined in the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,

    /// The counterexamples defined in the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
}

/// Global settings for a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSystemSettings {
    /// Tooling settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<WorkspaceSystemSettingsTooling>,

    /// Disambiguation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<WorkspaceSystemSettingsDisambiguation>,

    /// Settings for the human agent assist feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_agent_assist: Option<Metadata>,
}

/// Tooling settings of a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSystemSettingsTooling {
    /// Whether the dialog JSON editor displays generic responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_generic_responses: Option<bool>,
}

/// Disambiguation settings of a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSystemSettingsDisambiguation {
    /// Text shown before the list of possible matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Label of the option that matches none of the suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of_the_above_prompt: Option<String>,

    /// Whether disambiguation is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Sensitivity, `auto` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
}

/// One page of workspaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    /// The workspaces on this page.
    #[serde(default)]
    pub workspaces: Vec<Workspace>,

    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_workspaces`].
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
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

/// Options for [`AssistantV1::create_workspace`].
///
/// Every field is optional; an empty workspace is valid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWorkspaceOptions {
    /// The name of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The language of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Intents to create with the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    /// Entities to create with the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Dialog nodes to create with the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples to create with the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
    /// Any metadata that is required by the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Whether training data may be used by IBM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    /// Global settings for the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    /// Extra headers for this call.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

/// Options for [`AssistantV1::get_workspace`].
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// Whether to include all element content.
    pub export: Option<bool>,
    /// Whether to include `created` and `updated` timestamps.
    pub include_audit: Option<bool>,
    /// Sort exported elements; only `stable` is supported.
    pub sort: Option<String>,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl GetWorkspaceOptions {
    /// Creates options for the given workspace.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_workspace`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWorkspaceOptions {
    /// The workspace ID.
    #[serde(skip)]
    pub workspace_id: String,
    /// The new name of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The new description of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The new language of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Intents replacing (or, with `append`, added to) the existing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    /// Entities replacing (or, with `append`, added to) the existing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Dialog nodes replacing (or, with `append`, added to) the existing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples replacing (or, with `append`, added to) the existing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
    /// Any metadata that is required by the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Whether training data may be used by IBM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    /// Global settings for the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    /// Whether the new data is added to the existing data instead of replacing it.
    #[serde(skip)]
    pub append: Option<bool>,
    /// Extra headers for this call.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateWorkspaceOptions {
    /// Creates options for the given workspace with nothing to change yet.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_workspace`].
#[derive(Debug, Clone, Default)]
pub struct DeleteWorkspaceOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl DeleteWorkspaceOptions {
    /// Creates options for the given workspace.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

impl AssistantV1 {
    /// Lists the workspaces associated with the service instance.
    ///
    /// `GET /v1/workspaces`
    pub async fn list_workspaces(
        &self,
        options: &ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        let builder = self
            .request(Method::GET, "/v1/workspaces", &[])?
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Lists every workspace by following `next_cursor` until the last page.
    ///
    /// Workspaces are returned in the order the service lists them. The
    /// `cursor` in `options` selects the first page fetched. Stops when the
    /// service returns no cursor or repeats the current one.
    pub async fn all_workspaces(&self, options: &ListWorkspacesOptions) -> Result<Vec<Workspace>> {
        let mut options = options.clone();
        let mut workspaces = Vec::new();

        loop {
            let page = self.list_workspaces(&options).await?.result;
            workspaces.extend(page.workspaces);
            // A repeated cursor would fetch the same page forever.
            match page.pagination.next_cursor {
                Some(cursor) if options.cursor.as_deref() != Some(cursor.as_str()) => {
                    options.cursor = Some(cursor)
                }
                _ => break,
            }
        }

        Ok(workspaces)
    }

    /// Creates a workspace, optionally with its full content.
    ///
    /// `POST /v1/workspaces`
    pub async fn create_workspace(
        &self,
        options: &CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        let builder = self
            .request(Method::POST, "/v1/workspaces", &[])?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets information about a workspace, optionally with all its content.
    ///
    /// `GET /v1/workspaces/{workspace_id}`
    pub async fn get_workspace(
        &self,
        options: &GetWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}",
                &[options.workspace_id.as_str()],
            )?
            .with_optional_query("export", options.export)
            .with_optional_query("include_audit", options.include_audit)
            .with_optional_query("sort", options.sort.as_deref())
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates an existing workspace.
    ///
    /// `POST /v1/workspaces/{workspace_id}`
    pub async fn update_workspace(
        &self,
        options: &UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}",
                &[options.workspace_id.as_str()],
            )?
            .with_optional_query("append", options.append)
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes a workspace.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}`
    pub async fn delete_workspace(
        &self,
        options: &DeleteWorkspaceOptions,
    ) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::DELETE,
                "/v1/workspaces/{workspace_id}",
                &[options.workspace_id.as_str()],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_workspace() {
        let json = r#"{
            "name": "xxx",
            "language": "en",
            "workspace_id": "ws-1",
            "learning_opt_out": false,
            "created": "2018-07-10T12:00:00.000Z",
            "status": "Available"
        }"#;
        let workspace: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(workspace.name.as_deref(), Some("xxx"));
        assert_eq!(workspace.workspace_id.as_deref(), Some("ws-1"));
        assert!(workspace.created.is_some());
        assert!(workspace.intents.is_none());
    }

    #[test]
    fn test_update_body_skips_path_and_query_fields() {
        let options = UpdateWorkspaceOptions {
            name: Some("renamed".to_string()),
            append: Some(true),
            ..UpdateWorkspaceOptions::new("ws-1")
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body, serde_json::json!({"name": "renamed"}));
    }

    #[test]
    fn test_create_body_distinguishes_false_from_absent() {
        let options = CreateWorkspaceOptions {
            learning_opt_out: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body, serde_json::json!({"learning_opt_out": false}));
    }
}
