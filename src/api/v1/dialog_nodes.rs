//
//  watson-assistant
//  api/v1/dialog_nodes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Dialog node API types and operations.
//!
//! Dialog nodes form the dialog tree of a workspace. A node is positioned by
//! its `parent` and `previous_sibling`, fires when its `conditions` match, and
//! answers with its `output`.
//!
//! # Example
//!
//! ```rust
//! use watson_assistant::api::v1::{CreateDialogNodeOptions, DialogNodeOutput};
//!
//! let options = CreateDialogNodeOptions {
//!     conditions: Some("#hello".to_string()),
//!     output: Some(DialogNodeOutput::text("Hi there!")),
//!     title: Some("Greeting".to_string()),
//!     ..CreateDialogNodeOptions::new("workspace-id", "greeting")
//! };
//!
//! let body = serde_json::to_value(&options).unwrap();
//! assert_eq!(body["output"]["generic"][0]["response_type"], "text");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{MessageInput, Metadata};
use crate::api::common::{require, DetailedResponse, Pagination, Result};
use crate::api::AssistantV1;

/// A node of the dialog tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNode {
    /// The dialog node ID.
    #[serde(default)]
    pub dialog_node: String,

    /// The description of the dialog node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The condition that triggers the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,

    /// The ID of the parent node, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// The ID of the previous sibling node, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,

    /// The output of the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,

    /// The context set when the node fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Metadata>,

    /// Any metadata of the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// What happens after the node is processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,

    /// The alias used to identify the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The node type, e.g. `standard`, `frame`, `slot`, `event_handler`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// How an `event_handler` node is triggered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// The context variable a `slot` node fills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,

    /// Actions invoked by the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,

    /// Whether the user can digress to the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,

    /// Whether the user can digress away from the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,

    /// Whether the user can digress away while slots are being filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,

    /// Label shown when the node is offered for disambiguation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,

    /// Whether the node is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    /// Creates a dialog node with only its ID.
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// The output of a dialog node.
///
/// Keys other than `generic` and `modifiers` (e.g. the legacy `text`
/// response) are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutput {
    /// Responses of any supported type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<DialogNodeOutputGeneric>>,

    /// Options that modify how the output is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<DialogNodeOutputModifiers>,

    /// Any other output members.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl DialogNodeOutput {
    /// An output with a single text response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            generic: Some(vec![DialogNodeOutputGeneric {
                response_type: "text".to_string(),
                values: Some(vec![DialogNodeOutputTextValuesElement {
                    text: Some(text.into()),
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }
}

/// One response in a dialog node output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutputGeneric {
    /// The response type: `text`, `pause`, `image`, `option`,
    /// `connect_to_agent`, or `suggestion`.
    #[serde(default)]
    pub response_type: String,

    /// Text variations for a `text` response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<DialogNodeOutputTextValuesElement>>,

    /// How a text variation is chosen: `sequential`, `random`, `multiline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_policy: Option<String>,

    /// Delimiter between multiline variations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// Pause length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Whether to show a typing indicator during the pause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How options are presented: `dropdown` or `button`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,

    /// Options offered by an `option` response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DialogNodeOutputOptionsElement>>,

    /// Message passed to a human agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
}

/// A text variation of a `text` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutputTextValuesElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An option of an `option` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElement {
    /// The label shown to the user.
    #[serde(default)]
    pub label: String,

    /// The input sent back when the option is chosen.
    #[serde(default)]
    pub value: DialogNodeOutputOptionsElementValue,
}

/// The value of a response option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElementValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
}

/// Output modifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeOutputModifiers {
    /// Whether this output replaces the output of earlier nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

/// What happens after a dialog node is processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    /// e.g. `get_user_input`, `skip_user_input`, `jump_to`.
    #[serde(default)]
    pub behavior: String,

    /// Target node of a `jump_to`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,

    /// Which part of the target node to process: `condition`, `client`,
    /// `user_input`, or `body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// An action invoked by a dialog node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeAction {
    /// The name of the action.
    #[serde(default)]
    pub name: String,

    /// The action type, e.g. `client`, `server`, `cloud_function`, `web_action`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,

    /// Parameters passed to the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Metadata>,

    /// The context variable the result is stored in.
    #[serde(default)]
    pub result_variable: String,

    /// The context variable holding credentials for the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// One page of dialog nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    #[serde(default)]
    pub dialog_nodes: Vec<DialogNode>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Options for [`AssistantV1::list_dialog_nodes`].
#[derive(Debug, Clone, Default)]
pub struct ListDialogNodesOptions {
    pub workspace_id: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListDialogNodesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::create_dialog_node`].
///
/// Field meanings match [`DialogNode`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDialogNodeOptions {
    #[serde(skip)]
    pub workspace_id: String,
    pub dialog_node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::get_dialog_node`].
#[derive(Debug, Clone, Default)]
pub struct GetDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::update_dialog_node`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDialogNodeOptions {
    #[serde(skip)]
    pub workspace_id: String,
    /// The current dialog node ID.
    #[serde(skip)]
    pub dialog_node: String,
    #[serde(rename = "dialog_node", skip_serializing_if = "Option::is_none")]
    pub new_dialog_node: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    #[serde(rename = "conditions", skip_serializing_if = "Option::is_none")]
    pub new_conditions: Option<String>,
    #[serde(rename = "parent", skip_serializing_if = "Option::is_none")]
    pub new_parent: Option<String>,
    #[serde(rename = "previous_sibling", skip_serializing_if = "Option::is_none")]
    pub new_previous_sibling: Option<String>,
    #[serde(rename = "output", skip_serializing_if = "Option::is_none")]
    pub new_output: Option<DialogNodeOutput>,
    #[serde(rename = "context", skip_serializing_if = "Option::is_none")]
    pub new_context: Option<Metadata>,
    #[serde(rename = "metadata", skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Metadata>,
    #[serde(rename = "next_step", skip_serializing_if = "Option::is_none")]
    pub new_next_step: Option<DialogNodeNextStep>,
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    pub new_title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub new_node_type: Option<String>,
    #[serde(rename = "event_name", skip_serializing_if = "Option::is_none")]
    pub new_event_name: Option<String>,
    #[serde(rename = "variable", skip_serializing_if = "Option::is_none")]
    pub new_variable: Option<String>,
    #[serde(rename = "actions", skip_serializing_if = "Option::is_none")]
    pub new_actions: Option<Vec<DialogNodeAction>>,
    #[serde(rename = "digress_in", skip_serializing_if = "Option::is_none")]
    pub new_digress_in: Option<String>,
    #[serde(rename = "digress_out", skip_serializing_if = "Option::is_none")]
    pub new_digress_out: Option<String>,
    #[serde(rename = "digress_out_slots", skip_serializing_if = "Option::is_none")]
    pub new_digress_out_slots: Option<String>,
    #[serde(rename = "user_label", skip_serializing_if = "Option::is_none")]
    pub new_user_label: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::delete_dialog_node`].
#[derive(Debug, Clone, Default)]
pub struct DeleteDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub headers: HashMap<String, String>,
}

impl DeleteDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

const DIALOG_NODES_PATH: &str = "/v1/workspaces/{workspace_id}/dialog_nodes";
const DIALOG_NODE_PATH: &str = "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}";

impl AssistantV1 {
    /// Lists the dialog nodes of a workspace.
    ///
    /// `GET /v1/workspaces/{workspace_id}/dialog_nodes`
    pub async fn list_dialog_nodes(
        &self,
        options: &ListDialogNodesOptions,
    ) -> Result<DetailedResponse<DialogNodeCollection>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(Method::GET, DIALOG_NODES_PATH, &[options.workspace_id.as_str()])?
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("include_count", options.include_count)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Creates a dialog node.
    ///
    /// `POST /v1/workspaces/{workspace_id}/dialog_nodes`
    pub async fn create_dialog_node(
        &self,
        options: &CreateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;

        let builder = self
            .request(Method::POST, DIALOG_NODES_PATH, &[options.workspace_id.as_str()])?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Gets a dialog node.
    ///
    /// `GET /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`
    pub async fn get_dialog_node(
        &self,
        options: &GetDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;

        let builder = self
            .request(
                Method::GET,
                DIALOG_NODE_PATH,
                &[options.workspace_id.as_str(), options.dialog_node.as_str()],
            )?
            .with_optional_query("include_audit", options.include_audit)
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Updates a dialog node.
    ///
    /// `POST /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`
    pub async fn update_dialog_node(
        &self,
        options: &UpdateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;

        let builder = self
            .request(
                Method::POST,
                DIALOG_NODE_PATH,
                &[options.workspace_id.as_str(), options.dialog_node.as_str()],
            )?
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }

    /// Deletes a dialog node.
    ///
    /// `DELETE /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`
    pub async fn delete_dialog_node(
        &self,
        options: &DeleteDialogNodeOptions,
    ) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;

        let builder = self
            .request(
                Method::DELETE,
                DIALOG_NODE_PATH,
                &[options.workspace_id.as_str(), options.dialog_node.as_str()],
            )?
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}
