//
//  watson-assistant
//  api/v1/logs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Conversation log API types and operations.
//!
//! Logs can be listed per workspace or, with a filter, across all workspaces
//! of the service instance. Filters use the service's query language, e.g.
//! `language::en,request.context.metadata.deployment::testDeployment`.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{MessageRequest, MessageResponse};
use crate::api::common::{require, DetailedResponse, LogPagination, Result};
use crate::api::AssistantV1;

/// One logged message exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogExport {
    /// The request sent to the message endpoint.
    #[serde(default)]
    pub request: MessageRequest,

    /// The response returned by the message endpoint.
    #[serde(default)]
    pub response: MessageResponse,

    /// A unique identifier for the logged event.
    #[serde(default)]
    pub log_id: String,

    /// When the request was made, as reported by the service.
    #[serde(default)]
    pub request_timestamp: String,

    /// When the response was sent, as reported by the service.
    #[serde(default)]
    pub response_timestamp: String,

    /// The workspace that handled the message.
    #[serde(default)]
    pub workspace_id: String,

    /// The language of the workspace.
    #[serde(default)]
    pub language: String,
}

/// One page of log events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogCollection {
    #[serde(default)]
    pub logs: Vec<LogExport>,

    #[serde(default)]
    pub pagination: LogPagination,
}

/// Options for [`AssistantV1::list_logs`].
#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    /// The workspace ID.
    pub workspace_id: String,
    /// Attribute to sort by, e.g. `request_timestamp`.
    pub sort: Option<String>,
    /// A filter restricting the returned events.
    pub filter: Option<String>,
    /// Number of records to return per page.
    pub page_limit: Option<i64>,
    /// Cursor of the page to return.
    pub cursor: Option<String>,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl ListLogsOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for [`AssistantV1::list_all_logs`].
#[derive(Debug, Clone, Default)]
pub struct ListAllLogsOptions {
    /// A filter restricting the returned events; must name a workspace,
    /// `request.context.system.assistant_id`, or a deployment.
    pub filter: String,
    pub sort: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListAllLogsOptions {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }
}

impl AssistantV1 {
    /// Lists the log events of a workspace.
    ///
    /// `GET /v1/workspaces/{workspace_id}/logs`
    pub async fn list_logs(&self, options: &ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        require("workspace_id", &options.workspace_id)?;

        let builder = self
            .request(
                Method::GET,
                "/v1/workspaces/{workspace_id}/logs",
                &[options.workspace_id.as_str()],
            )?
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("filter", options.filter.as_deref())
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_headers(&options.headers)?;

        self.send(builder).await
    }

    /// Lists every log event of a workspace by following `next_cursor`.
    ///
    /// Events are returned in the order the service lists them. Stops when
    /// the service returns no cursor or repeats the current one.
    pub async fn all_logs(&self, options: &ListLogsOptions) -> Result<Vec<LogExport>> {
        let mut options = options.clone();
        let mut logs = Vec::new();

        loop {
            let page = self.list_logs(&options).await?.result;
            logs.extend(page.logs);
            // A repeated cursor would fetch the same page forever.
            match page.pagination.next_cursor {
                Some(cursor) if options.cursor.as_deref() != Some(cursor.as_str()) => {
                    options.cursor = Some(cursor)
                }
                _ => break,
            }
        }

        Ok(logs)
    }

    /// Lists log events across all workspaces of the service instance.
    ///
    /// `GET /v1/logs`
    pub async fn list_all_logs(
        &self,
        options: &ListAllLogsOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        require("filter", &options.filter)?;

        let builder = self
            .request(Method::GET, "/v1/logs", &[])?
            .with_query("filter", &options.filter)
            .with_optional_query("sort", options.sort.as_deref())
            .with_optional_query("page_limit", options.page_limit)
            .with_optional_query("cursor", options.cursor.as_deref())
            .with_headers(&options.headers)?;

        self.send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_log_collection() {
        let json = r#"{
            "logs": [{
                "request": {"input": {"text": "Hello"}},
                "response": {
                    "input": {"text": "Hello"},
                    "intents": [],
                    "entities": [],
                    "context": {"conversation_id": "c-1"},
                    "output": {"log_messages": [], "text": ["Hi"]}
                },
                "log_id": "log-1",
                "request_timestamp": "2018-07-10T12:00:00.000Z",
                "response_timestamp": "2018-07-10T12:00:00.050Z",
                "workspace_id": "ws",
                "language": "en"
            }],
            "pagination": {"next_url": "/v1/logs?cursor=abc", "next_cursor": "abc"}
        }"#;
        let collection: LogCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.logs.len(), 1);
        assert_eq!(collection.logs[0].log_id, "log-1");
        assert_eq!(
            collection.logs[0].request.input.as_ref().unwrap().text.as_deref(),
            Some("Hello")
        );
        assert_eq!(collection.pagination.next_cursor(), Some("abc"));
    }

    #[test]
    fn test_list_all_logs_requires_filter() {
        let client = AssistantV1::new("2018-07-10").unwrap();
        let result = tokio_test::block_on(client.list_all_logs(&ListAllLogsOptions::default()));
        assert!(matches!(
            result,
            Err(crate::api::ApiError::MissingRequired("filter"))
        ));
    }
}
