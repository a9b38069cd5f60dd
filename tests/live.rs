//
//  watson-assistant
//  tests/live.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests against a real service instance.
//!
//! Ignored by default. Run with `cargo test --test live -- --ignored` after
//! setting:
//!
//! - `ASSISTANT_GO_SDK_URL`
//! - `ASSISTANT_GO_SDK_USERNAME`
//! - `ASSISTANT_GO_SDK_PASSWORD`
//! - `ASSISTANT_GO_SDK_WORKSPACE_ID`

use watson_assistant::api::v1::*;
use watson_assistant::{AssistantV1, ServiceConfig};

const VERSION: &str = "2018-07-10";

struct Live {
    client: AssistantV1,
    workspace_id: String,
}

fn live() -> Live {
    let var = |name: &str| std::env::var(name).unwrap_or_else(|_| panic!("{} must be set", name));

    let config = ServiceConfig {
        url: Some(var("ASSISTANT_GO_SDK_URL")),
        username: Some(var("ASSISTANT_GO_SDK_USERNAME")),
        password: Some(var("ASSISTANT_GO_SDK_PASSWORD")),
        ..ServiceConfig::new(VERSION)
    };

    Live {
        client: AssistantV1::from_config(&config).unwrap(),
        workspace_id: var("ASSISTANT_GO_SDK_WORKSPACE_ID"),
    }
}

#[tokio::test]
#[ignore]
async fn live_message() {
    let live = live();
    let response = live
        .client
        .message(&MessageOptions::new(&live.workspace_id).with_text("Hello"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.result.context.conversation_id.is_some());
}

#[tokio::test]
#[ignore]
async fn live_workspace_lifecycle() {
    let live = live();
    let client = &live.client;

    let created = client
        .create_workspace(&CreateWorkspaceOptions {
            name: Some("Rust SDK test workspace".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .result;
    let workspace_id = created.workspace_id.unwrap();

    let intent = client
        .create_intent(&CreateIntentOptions {
            examples: Some(vec![Example::new("hello there")]),
            ..CreateIntentOptions::new(&workspace_id, "greeting")
        })
        .await
        .unwrap();
    assert_eq!(intent.status_code, 201);

    let intents = client
        .list_intents(&ListIntentsOptions {
            export: Some(true),
            ..ListIntentsOptions::new(&workspace_id)
        })
        .await
        .unwrap()
        .result;
    assert!(intents.intents.iter().any(|i| i.intent == "greeting"));

    let deleted = client
        .delete_workspace(&DeleteWorkspaceOptions::new(&workspace_id))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 200);
}

#[tokio::test]
#[ignore]
async fn live_list_logs() {
    let live = live();
    let response = live
        .client
        .list_logs(&ListLogsOptions {
            page_limit: Some(5),
            ..ListLogsOptions::new(&live.workspace_id)
        })
        .await
        .unwrap();

    assert!(response.result.logs.len() <= 5);
}
