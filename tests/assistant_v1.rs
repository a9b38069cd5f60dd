//
//  watson-assistant
//  tests/assistant_v1.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests of the Assistant v1 operations against a mock server.

use std::future::Future;
use std::pin::Pin;

use mockito::{Matcher, Server};
use serde_json::json;
use watson_assistant::api::v1::*;
use watson_assistant::api::ApiError;
use watson_assistant::{AssistantV1, AuthCredential, ServiceConfig};

const VERSION: &str = "2018-07-10";

fn client(server: &Server) -> AssistantV1 {
    AssistantV1::new(VERSION)
        .unwrap()
        .with_service_url(server.url())
        .with_auth(AuthCredential::basic("user1", "pass1"))
}

fn version_query() -> Matcher {
    Matcher::UrlEncoded("version".into(), VERSION.into())
}

/// A pending operation call whose result is reduced to success or error.
type Call<'a> = Pin<Box<dyn Future<Output = Result<(), ApiError>> + 'a>>;

macro_rules! call {
    ($client:ident . $operation:ident ( $options:expr )) => {
        Box::pin(async { $client.$operation(&$options).await.map(|_| ()) }) as Call<'_>
    };
}

#[tokio::test]
async fn test_get_workspace_sends_version_and_basic_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/workspaces/ws-1")
        .match_query(Matcher::AllOf(vec![
            version_query(),
            Matcher::UrlEncoded("export".into(), "true".into()),
        ]))
        .match_header("authorization", "Basic dXNlcjE6cGFzczE=")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-global-transaction-id", "tx-1")
        .with_body(r#"{"name": "xxx", "workspace_id": "ws-1"}"#)
        .create_async()
        .await;

    let options = GetWorkspaceOptions {
        export: Some(true),
        ..GetWorkspaceOptions::new("ws-1")
    };
    let response = client(&server).get_workspace(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.header("x-global-transaction-id"), Some("tx-1"));
    assert_eq!(response.result.name.as_deref(), Some("xxx"));
}

#[tokio::test]
async fn test_create_workspace_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/workspaces")
        .match_query(version_query())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "xxx",
            "intents": [{"intent": "hello", "examples": [{"text": "hi"}]}]
        })))
        .with_status(201)
        .with_body(r#"{"name": "xxx", "workspace_id": "new-ws"}"#)
        .create_async()
        .await;

    let options = CreateWorkspaceOptions {
        name: Some("xxx".to_string()),
        intents: Some(vec![Intent {
            examples: Some(vec![Example::new("hi")]),
            ..Intent::new("hello")
        }]),
        ..Default::default()
    };
    let response = client(&server).create_workspace(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 201);
    assert_eq!(response.result.workspace_id.as_deref(), Some("new-ws"));
}

#[tokio::test]
async fn test_service_error_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    let body = r#"{"error": "Resource not found", "code": 404}"#;
    server
        .mock("GET", "/v1/workspaces/missing/intents/nope")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(body)
        .create_async()
        .await;

    let err = client(&server)
        .get_intent(&GetIntentOptions::new("missing", "nope"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status().unwrap().as_u16(), 404);
    assert_eq!(err.to_string(), body);
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .create_example(&CreateExampleOptions::new("ws", "order", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingRequired("text")));
    assert!(err.is_local());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_path_segments_are_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/workspaces/ws/intents/order/examples/large%20pizza%3F")
        .match_query(version_query())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let response = client(&server)
        .delete_example(&DeleteExampleOptions::new("ws", "order", "large pizza?"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_update_intent_sends_renamed_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/workspaces/ws/intents/hello")
        .match_query(version_query())
        .match_body(Matcher::Json(json!({"intent": "greeting"})))
        .with_status(200)
        .with_body(r#"{"intent": "greeting"}"#)
        .create_async()
        .await;

    let options = UpdateIntentOptions {
        new_intent: Some("greeting".to_string()),
        ..UpdateIntentOptions::new("ws", "hello")
    };
    let response = client(&server).update_intent(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.result.intent, "greeting");
}

#[tokio::test]
async fn test_message_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/workspaces/ws/message")
        .match_query(Matcher::AllOf(vec![
            version_query(),
            Matcher::UrlEncoded("nodes_visited_details".into(), "true".into()),
        ]))
        .match_body(Matcher::PartialJson(json!({"input": {"text": "Hello"}})))
        .with_status(200)
        .with_body(
            json!({
                "input": {"text": "Hello"},
                "intents": [{"intent": "hello", "confidence": 0.93}],
                "entities": [],
                "context": {"conversation_id": "c-1", "system": {"dialog_turn_counter": 1}},
                "output": {"log_messages": [], "text": ["Hi!"], "nodes_visited": ["welcome"]}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let options = MessageOptions {
        nodes_visited_details: Some(true),
        ..MessageOptions::new("ws").with_text("Hello")
    };
    let response = client(&server).message(&options).await.unwrap().result;

    mock.assert_async().await;
    assert_eq!(response.top_intent().unwrap().intent, "hello");
    assert_eq!(response.context.conversation_id.as_deref(), Some("c-1"));
    assert_eq!(response.output.text, vec!["Hi!".to_string()]);
}

#[tokio::test]
async fn test_list_all_logs_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/logs")
        .match_query(Matcher::AllOf(vec![
            version_query(),
            Matcher::UrlEncoded("filter".into(), "language::en".into()),
            Matcher::UrlEncoded("page_limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"logs": [], "pagination": {}}"#)
        .create_async()
        .await;

    let options = ListAllLogsOptions {
        page_limit: Some(5),
        ..ListAllLogsOptions::new("language::en")
    };
    let response = client(&server).list_all_logs(&options).await.unwrap();

    mock.assert_async().await;
    assert!(response.result.logs.is_empty());
    assert!(!response.result.pagination.has_next());
}

#[tokio::test]
async fn test_delete_user_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/user_data")
        .match_query(Matcher::AllOf(vec![
            version_query(),
            Matcher::UrlEncoded("customer_id".into(), "customer-1".into()),
        ]))
        .with_status(202)
        .create_async()
        .await;

    let response = client(&server)
        .delete_user_data(&DeleteUserDataOptions::new("customer-1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 202);
}

#[tokio::test]
async fn test_all_workspaces_follows_cursor() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/v1/workspaces")
        .match_query(Matcher::Exact("version=2018-07-10&page_limit=1".into()))
        .with_status(200)
        .with_body(
            json!({
                "workspaces": [{"name": "one"}],
                "pagination": {"refresh_url": "/v1/workspaces", "next_cursor": "page-2"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/v1/workspaces")
        .match_query(Matcher::Exact(
            "version=2018-07-10&page_limit=1&cursor=page-2".into(),
        ))
        .with_status(200)
        .with_body(
            json!({
                "workspaces": [{"name": "two"}],
                "pagination": {"refresh_url": "/v1/workspaces?cursor=page-2"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let options = ListWorkspacesOptions {
        page_limit: Some(1),
        ..Default::default()
    };
    let workspaces = client(&server).all_workspaces(&options).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let names: Vec<_> = workspaces.iter().filter_map(|w| w.name.as_deref()).collect();
    assert_eq!(names, vec!["one", "two"]);
}

#[tokio::test]
async fn test_per_call_and_default_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/workspaces/ws/counterexamples")
        .match_query(Matcher::Any)
        .match_header("x-watson-learning-opt-out", "true")
        .match_header("x-watson-metadata", "customer_id=customer-1")
        .with_status(200)
        .with_body(r#"{"counterexamples": [{"text": "weather"}], "pagination": {}}"#)
        .create_async()
        .await;

    let mut options = ListCounterexamplesOptions::new("ws");
    options
        .headers
        .insert("X-Watson-Metadata".to_string(), "customer_id=customer-1".to_string());

    let response = client(&server)
        .with_learning_opt_out()
        .list_counterexamples(&options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.result.counterexamples[0].text, "weather");
}

#[tokio::test]
async fn test_iam_bearer_from_config() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/identity/token")
        .with_status(200)
        .with_body(
            json!({
                "access_token": "iam-token",
                "refresh_token": "refresh",
                "token_type": "Bearer",
                "expires_in": 3600,
                "expiration": chrono::Utc::now().timestamp() + 3600
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let api = server
        .mock("GET", "/api/v1/workspaces/ws/entities")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer iam-token")
        .with_status(200)
        .with_body(r#"{"entities": [{"entity": "size"}], "pagination": {}}"#)
        .expect(2)
        .create_async()
        .await;

    let config = ServiceConfig {
        url: Some(format!("{}/api", server.url())),
        username: Some("apikey".to_string()),
        password: Some("my-key".to_string()),
        iam_url: Some(format!("{}/identity/token", server.url())),
        ..ServiceConfig::new(VERSION)
    };
    let client = AssistantV1::from_config(&config).unwrap();

    let options = ListEntitiesOptions::new("ws");
    client.list_entities(&options).await.unwrap();
    let response = client.list_entities(&options).await.unwrap();

    token.assert_async().await;
    api.assert_async().await;
    assert_eq!(response.result.entities[0].entity, "size");
}

#[tokio::test]
async fn test_every_operation_path_and_version() {
    let mut server = Server::new_async().await;
    let client = client(&server);

    let cases: Vec<(&str, &str, Call)> = vec![
        ("POST", "/v1/workspaces/ws/message", call!(client.message(MessageOptions::new("ws")))),
        ("GET", "/v1/workspaces", call!(client.list_workspaces(ListWorkspacesOptions::default()))),
        ("GET", "/v1/workspaces", call!(client.all_workspaces(ListWorkspacesOptions::default()))),
        ("POST", "/v1/workspaces", call!(client.create_workspace(CreateWorkspaceOptions::default()))),
        ("GET", "/v1/workspaces/ws", call!(client.get_workspace(GetWorkspaceOptions::new("ws")))),
        ("POST", "/v1/workspaces/ws", call!(client.update_workspace(UpdateWorkspaceOptions::new("ws")))),
        ("DELETE", "/v1/workspaces/ws", call!(client.delete_workspace(DeleteWorkspaceOptions::new("ws")))),
        ("GET", "/v1/workspaces/ws/intents", call!(client.list_intents(ListIntentsOptions::new("ws")))),
        ("POST", "/v1/workspaces/ws/intents", call!(client.create_intent(CreateIntentOptions::new("ws", "order")))),
        ("GET", "/v1/workspaces/ws/intents/order", call!(client.get_intent(GetIntentOptions::new("ws", "order")))),
        ("POST", "/v1/workspaces/ws/intents/order", call!(client.update_intent(UpdateIntentOptions::new("ws", "order")))),
        ("DELETE", "/v1/workspaces/ws/intents/order", call!(client.delete_intent(DeleteIntentOptions::new("ws", "order")))),
        ("GET", "/v1/workspaces/ws/intents/order/examples", call!(client.list_examples(ListExamplesOptions::new("ws", "order")))),
        ("POST", "/v1/workspaces/ws/intents/order/examples", call!(client.create_example(CreateExampleOptions::new("ws", "order", "one pizza")))),
        ("GET", "/v1/workspaces/ws/intents/order/examples/one%20pizza", call!(client.get_example(GetExampleOptions::new("ws", "order", "one pizza")))),
        ("POST", "/v1/workspaces/ws/intents/order/examples/one%20pizza", call!(client.update_example(UpdateExampleOptions::new("ws", "order", "one pizza")))),
        ("DELETE", "/v1/workspaces/ws/intents/order/examples/one%20pizza", call!(client.delete_example(DeleteExampleOptions::new("ws", "order", "one pizza")))),
        ("GET", "/v1/workspaces/ws/counterexamples", call!(client.list_counterexamples(ListCounterexamplesOptions::new("ws")))),
        ("POST", "/v1/workspaces/ws/counterexamples", call!(client.create_counterexample(CreateCounterexampleOptions::new("ws", "weather")))),
        ("GET", "/v1/workspaces/ws/counterexamples/weather", call!(client.get_counterexample(GetCounterexampleOptions::new("ws", "weather")))),
        ("POST", "/v1/workspaces/ws/counterexamples/weather", call!(client.update_counterexample(UpdateCounterexampleOptions::new("ws", "weather")))),
        ("DELETE", "/v1/workspaces/ws/counterexamples/weather", call!(client.delete_counterexample(DeleteCounterexampleOptions::new("ws", "weather")))),
        ("GET", "/v1/workspaces/ws/entities", call!(client.list_entities(ListEntitiesOptions::new("ws")))),
        ("POST", "/v1/workspaces/ws/entities", call!(client.create_entity(CreateEntityOptions::new("ws", "size")))),
        ("GET", "/v1/workspaces/ws/entities/size", call!(client.get_entity(GetEntityOptions::new("ws", "size")))),
        ("POST", "/v1/workspaces/ws/entities/size", call!(client.update_entity(UpdateEntityOptions::new("ws", "size")))),
        ("DELETE", "/v1/workspaces/ws/entities/size", call!(client.delete_entity(DeleteEntityOptions::new("ws", "size")))),
        ("GET", "/v1/workspaces/ws/entities/size/mentions", call!(client.list_mentions(ListMentionsOptions::new("ws", "size")))),
        ("GET", "/v1/workspaces/ws/entities/size/values", call!(client.list_values(ListValuesOptions::new("ws", "size")))),
        ("POST", "/v1/workspaces/ws/entities/size/values", call!(client.create_value(CreateValueOptions::new("ws", "size", "large")))),
        ("GET", "/v1/workspaces/ws/entities/size/values/large", call!(client.get_value(GetValueOptions::new("ws", "size", "large")))),
        ("POST", "/v1/workspaces/ws/entities/size/values/large", call!(client.update_value(UpdateValueOptions::new("ws", "size", "large")))),
        ("DELETE", "/v1/workspaces/ws/entities/size/values/large", call!(client.delete_value(DeleteValueOptions::new("ws", "size", "large")))),
        ("GET", "/v1/workspaces/ws/entities/size/values/large/synonyms", call!(client.list_synonyms(ListSynonymsOptions::new("ws", "size", "large")))),
        ("POST", "/v1/workspaces/ws/entities/size/values/large/synonyms", call!(client.create_synonym(CreateSynonymOptions::new("ws", "size", "large", "big")))),
        ("GET", "/v1/workspaces/ws/entities/size/values/large/synonyms/big", call!(client.get_synonym(GetSynonymOptions::new("ws", "size", "large", "big")))),
        ("POST", "/v1/workspaces/ws/entities/size/values/large/synonyms/big", call!(client.update_synonym(UpdateSynonymOptions::new("ws", "size", "large", "big")))),
        ("DELETE", "/v1/workspaces/ws/entities/size/values/large/synonyms/big", call!(client.delete_synonym(DeleteSynonymOptions::new("ws", "size", "large", "big")))),
        ("GET", "/v1/workspaces/ws/dialog_nodes", call!(client.list_dialog_nodes(ListDialogNodesOptions::new("ws")))),
        ("POST", "/v1/workspaces/ws/dialog_nodes", call!(client.create_dialog_node(CreateDialogNodeOptions::new("ws", "welcome")))),
        ("GET", "/v1/workspaces/ws/dialog_nodes/welcome", call!(client.get_dialog_node(GetDialogNodeOptions::new("ws", "welcome")))),
        ("POST", "/v1/workspaces/ws/dialog_nodes/welcome", call!(client.update_dialog_node(UpdateDialogNodeOptions::new("ws", "welcome")))),
        ("DELETE", "/v1/workspaces/ws/dialog_nodes/welcome", call!(client.delete_dialog_node(DeleteDialogNodeOptions::new("ws", "welcome")))),
        ("GET", "/v1/workspaces/ws/logs", call!(client.list_logs(ListLogsOptions::new("ws")))),
        ("GET", "/v1/workspaces/ws/logs", call!(client.all_logs(ListLogsOptions::new("ws")))),
        ("GET", "/v1/logs", call!(client.list_all_logs(ListAllLogsOptions::new("language::en")))),
        ("DELETE", "/v1/user_data", call!(client.delete_user_data(DeleteUserDataOptions::new("customer-1")))),
    ];

    for (method, path, call) in cases {
        let mock = server
            .mock(method, path)
            .match_query(version_query())
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let result = call.await;
        assert!(result.is_ok(), "{} {}: {:?}", method, path, result);
        mock.assert_async().await;
        mock.remove_async().await;
    }
}

#[tokio::test]
async fn test_every_operation_checks_required_fields() {
    let mut server = Server::new_async().await;
    let mut untouched = Vec::new();
    for method in ["GET", "POST", "DELETE"] {
        untouched.push(
            server
                .mock(method, Matcher::Any)
                .match_query(Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    let client = client(&server);

    let cases: Vec<(&str, Call)> = vec![
        ("workspace_id", call!(client.message(MessageOptions::new("").with_text("Hello")))),
        ("workspace_id", call!(client.get_workspace(GetWorkspaceOptions::new("")))),
        ("workspace_id", call!(client.update_workspace(UpdateWorkspaceOptions::new("")))),
        ("workspace_id", call!(client.delete_workspace(DeleteWorkspaceOptions::new("")))),
        ("workspace_id", call!(client.list_intents(ListIntentsOptions::new("")))),
        ("intent", call!(client.create_intent(CreateIntentOptions::new("ws", "")))),
        ("intent", call!(client.get_intent(GetIntentOptions::new("ws", "")))),
        ("workspace_id", call!(client.update_intent(UpdateIntentOptions::new("", "order")))),
        ("intent", call!(client.delete_intent(DeleteIntentOptions::new("ws", "")))),
        ("intent", call!(client.list_examples(ListExamplesOptions::new("ws", "")))),
        ("text", call!(client.create_example(CreateExampleOptions::new("ws", "order", "")))),
        ("intent", call!(client.get_example(GetExampleOptions::new("ws", "", "one pizza")))),
        ("text", call!(client.update_example(UpdateExampleOptions::new("ws", "order", "")))),
        ("workspace_id", call!(client.delete_example(DeleteExampleOptions::new("", "order", "one pizza")))),
        ("workspace_id", call!(client.list_counterexamples(ListCounterexamplesOptions::new("")))),
        ("text", call!(client.create_counterexample(CreateCounterexampleOptions::new("ws", "")))),
        ("text", call!(client.get_counterexample(GetCounterexampleOptions::new("ws", "")))),
        ("workspace_id", call!(client.update_counterexample(UpdateCounterexampleOptions::new("", "weather")))),
        ("text", call!(client.delete_counterexample(DeleteCounterexampleOptions::new("ws", "")))),
        ("workspace_id", call!(client.list_entities(ListEntitiesOptions::new("")))),
        ("entity", call!(client.create_entity(CreateEntityOptions::new("ws", "")))),
        ("entity", call!(client.get_entity(GetEntityOptions::new("ws", "")))),
        ("workspace_id", call!(client.update_entity(UpdateEntityOptions::new("", "size")))),
        ("entity", call!(client.delete_entity(DeleteEntityOptions::new("ws", "")))),
        ("entity", call!(client.list_mentions(ListMentionsOptions::new("ws", "")))),
        ("entity", call!(client.list_values(ListValuesOptions::new("ws", "")))),
        ("value", call!(client.create_value(CreateValueOptions::new("ws", "size", "")))),
        ("value", call!(client.get_value(GetValueOptions::new("ws", "size", "")))),
        ("workspace_id", call!(client.update_value(UpdateValueOptions::new("", "size", "large")))),
        ("value", call!(client.delete_value(DeleteValueOptions::new("ws", "size", "")))),
        ("value", call!(client.list_synonyms(ListSynonymsOptions::new("ws", "size", "")))),
        ("synonym", call!(client.create_synonym(CreateSynonymOptions::new("ws", "size", "large", "")))),
        ("entity", call!(client.get_synonym(GetSynonymOptions::new("ws", "", "large", "big")))),
        ("workspace_id", call!(client.update_synonym(UpdateSynonymOptions::new("", "size", "large", "big")))),
        ("synonym", call!(client.delete_synonym(DeleteSynonymOptions::new("ws", "size", "large", "")))),
        ("workspace_id", call!(client.list_dialog_nodes(ListDialogNodesOptions::new("")))),
        ("dialog_node", call!(client.create_dialog_node(CreateDialogNodeOptions::new("ws", "")))),
        ("dialog_node", call!(client.get_dialog_node(GetDialogNodeOptions::new("ws", "")))),
        ("workspace_id", call!(client.update_dialog_node(UpdateDialogNodeOptions::new("", "welcome")))),
        ("dialog_node", call!(client.delete_dialog_node(DeleteDialogNodeOptions::new("ws", "")))),
        ("workspace_id", call!(client.list_logs(ListLogsOptions::new("")))),
        ("workspace_id", call!(client.all_logs(ListLogsOptions::new("")))),
        ("filter", call!(client.list_all_logs(ListAllLogsOptions::new("")))),
        ("customer_id", call!(client.delete_user_data(DeleteUserDataOptions::new("")))),
    ];

    for (field, call) in cases {
        match call.await {
            Err(ApiError::MissingRequired(name)) => assert_eq!(name, field),
            other => panic!("expected missing {}, got {:?}", field, other),
        }
    }

    for mock in untouched {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_update_workspace_append_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/workspaces/ws")
        .match_query(Matcher::AllOf(vec![
            version_query(),
            Matcher::UrlEncoded("append".into(), "true".into()),
        ]))
        .match_body(Matcher::Json(json!({"counterexamples": [{"text": "weather"}]})))
        .with_status(200)
        .with_body(r#"{"name": "xxx"}"#)
        .create_async()
        .await;

    let options = UpdateWorkspaceOptions {
        counterexamples: Some(vec![Counterexample::new("weather")]),
        append: Some(true),
        ..UpdateWorkspaceOptions::new("ws")
    };
    client(&server).update_workspace(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_dot_segment_value_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"counterexamples": [], "pagination": {}}"#)
        .expect(0)
        .create_async()
        .await;
    let client = client(&server);

    for text in [".", ".."] {
        let err = client
            .get_counterexample(&GetCounterexampleOptions::new("ws", text))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)), "{}: {:?}", text, err);
        assert!(err.is_local());
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_all_logs_follows_cursor() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/v1/workspaces/ws/logs")
        .match_query(Matcher::Exact("version=2018-07-10&page_limit=1".into()))
        .with_status(200)
        .with_body(
            json!({
                "logs": [{"log_id": "log-1"}],
                "pagination": {"next_url": "/v1/workspaces/ws/logs?cursor=c2", "next_cursor": "c2"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/v1/workspaces/ws/logs")
        .match_query(Matcher::Exact("version=2018-07-10&page_limit=1&cursor=c2".into()))
        .with_status(200)
        .with_body(r#"{"logs": [{"log_id": "log-2"}], "pagination": {}}"#)
        .create_async()
        .await;

    let options = ListLogsOptions {
        page_limit: Some(1),
        ..ListLogsOptions::new("ws")
    };
    let logs = client(&server).all_logs(&options).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let ids: Vec<_> = logs.iter().map(|log| log.log_id.as_str()).collect();
    assert_eq!(ids, vec!["log-1", "log-2"]);
}

#[tokio::test]
async fn test_repeated_cursor_stops_paging() {
    let mut server = Server::new_async().await;
    let workspaces = server
        .mock("GET", "/v1/workspaces")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "workspaces": [{"name": "one"}],
                "pagination": {"refresh_url": "/v1/workspaces", "next_cursor": "same"}
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;
    let logs = server
        .mock("GET", "/v1/workspaces/ws/logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"logs": [{"log_id": "log-1"}], "pagination": {"next_cursor": "same"}}"#)
        .expect(2)
        .create_async()
        .await;
    let client = client(&server);

    let all = client.all_workspaces(&ListWorkspacesOptions::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    let all = client.all_logs(&ListLogsOptions::new("ws")).await.unwrap();
    assert_eq!(all.len(), 2);

    workspaces.assert_async().await;
    logs.assert_async().await;
}
