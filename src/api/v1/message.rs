//
//  watson-assistant
//  api/v1/message.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Sending user input to a workspace.
//!
//! A conversation is a sequence of [`AssistantV1::message`] calls. The
//! service is stateless: the [`Context`] returned by one turn must be sent
//! back with the next one to continue the same conversation.
//!
//! # Example
//!
//! ```rust,no_run
//! use watson_assistant::api::AssistantV1;
//! use watson_assistant::api::v1::MessageOptions;
//!
//! # async fn example(client: AssistantV1) -> watson_assistant::api::common::Result<()> {
//! let first = client
//!     .message(&MessageOptions::new("workspace-id").with_text("Hello"))
//!     .await?
//!     .result;
//!
//! let second = client
//!     .message(
//!         &MessageOptions::new("workspace-id")
//!             .with_text("I want a pizza")
//!             .with_context(first.context),
//!     )
//!     .await?
//!     .result;
//!
//! for line in second.output.text {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{DialogNodeAction, DialogNodeOutputOptionsElement, Metadata};
use crate::api::common::{require, DetailedResponse, Result};
use crate::api::AssistantV1;

/// The user input of a message.
///
/// Members other than `text` are passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageInput {
    /// The text of the user input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Metadata,
}

impl MessageInput {
    /// Creates input carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extra: Metadata::new(),
        }
    }
}

/// State of a conversation, round-tripped between turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// The unique identifier of the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// System data maintained by the dialog runtime; send it back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Metadata>,

    /// Metadata related to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,

    /// Context variables set by the dialog or the application.
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Metadata carried in the context of a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContextMetadata {
    /// Deployment the message came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,

    /// A string value identifying the end user, used for billing and for
    /// deleting data with [`AssistantV1::delete_user_data`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// An intent recognized in the user input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeIntent {
    /// The name of the recognized intent.
    #[serde(default)]
    pub intent: String,

    /// Confidence score between 0 and 1.
    #[serde(default)]
    pub confidence: f64,

    #[serde(flatten)]
    pub extra: Metadata,
}

/// An entity recognized in the user input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeEntity {
    /// The recognized entity.
    #[serde(default)]
    pub entity: String,

    /// Zero-based start and end offsets in the input text.
    #[serde(default)]
    pub location: Vec<i64>,

    /// The entity value that was recognized.
    #[serde(default)]
    pub value: String,

    /// Confidence score, for fuzzy and contextual matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Any metadata for the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Capture groups of a pattern entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
}

/// A capture group matched by a pattern entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureGroup {
    #[serde(default)]
    pub group: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

/// Output of the dialog for one turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputData {
    /// Up to 50 messages logged with the request.
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,

    /// Responses to the user.
    #[serde(default)]
    pub text: Vec<String>,

    /// Responses of any supported type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<DialogRuntimeResponseGeneric>>,

    /// IDs of the nodes visited while processing the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,

    /// Details of the visited nodes; only with `nodes_visited_details=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,

    #[serde(flatten)]
    pub extra: Metadata,
}

/// A message logged while processing a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogMessage {
    /// `info`, `error`, or `warn`.
    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub msg: String,
}

/// A response of any supported type, as returned at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogRuntimeResponseGeneric {
    /// `text`, `pause`, `image`, `option`, `connect_to_agent`, or `suggestion`.
    #[serde(default)]
    pub response_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DialogNodeOutputOptionsElement>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,

    /// Topic of the dialog node that produced a `connect_to_agent` response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,

    /// Suggestions offered for disambiguation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<DialogSuggestion>>,
}

/// A disambiguation suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogSuggestion {
    /// The label shown to the user.
    #[serde(default)]
    pub label: String,

    /// The input sent back when the suggestion is chosen.
    #[serde(default)]
    pub value: DialogSuggestionValue,

    /// Output of the suggested node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

/// The value of a disambiguation suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogSuggestionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
}

/// A dialog node visited while processing the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeVisitedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// A message request, as recorded in conversation logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

/// The response to a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The user input the response is for.
    #[serde(default)]
    pub input: MessageInput,

    /// Intents recognized in the input, best match first.
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,

    /// Entities recognized in the input.
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,

    /// Whether more than the top intent was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    /// State of the conversation; send it with the next message.
    #[serde(default)]
    pub context: Context,

    /// Output of the dialog.
    #[serde(default)]
    pub output: OutputData,

    /// Actions the client should invoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
}

impl MessageResponse {
    /// The best-matching intent, if any was recognized.
    pub fn top_intent(&self) -> Option<&RuntimeIntent> {
        self.intents.first()
    }
}

/// Options for [`AssistantV1::message`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageOptions {
    /// The workspace ID.
    #[serde(skip)]
    pub workspace_id: String,

    /// The user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,

    /// Whether to return more than the top intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    /// The context from the previous turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Entities to use instead of recognizing them from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,

    /// Intents to use instead of recognizing them from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,

    /// Output from the previous turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,

    /// Whether to include details of the visited dialog nodes.
    #[serde(skip)]
    pub nodes_visited_details: Option<bool>,

    /// Extra headers for this call.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl MessageOptions {
    /// Creates options for the given workspace with no input.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    /// Sets the user input text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.input = Some(MessageInput::text(text));
        self
    }

    /// Continues the conversation described by `context`.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }
}

impl AssistantV1 {
    /// Sends user input to a workspace and returns the dialog's response.
    ///
    /// `POST /v1/workspaces/{workspace_id}/message`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequired`](crate::api::ApiError::MissingRequired)
    /// without sending anything if `workspace_id` is empty.
    pub async fn message(&self, options: &MessageOptions) -> Result<DetailedResponse<MessageResponse>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::POST,
                "/v1/workspaces/{workspace_id}/message",
                &[options.workspace_id.as_str()],
            )?
            .with_optional_query("nodes_visited_details", options.nodes_visited_details)
            .with_headers(&options.headers)?
            .with_json(options)?;

        self.send(builder).await
    }
}
