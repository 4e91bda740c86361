//! Integration tests for paged listings and display-name lookups using wiremock
//!
//! These tests verify paging through `nextLink`, the uniqueness rule for
//! display names, and how API errors surface through a lookup.

use std::sync::Arc;

use arm_client::policy::{
    find_policy_definition_by_display_name, find_policy_set_definition_by_display_name,
};
use arm_client::{ArmClient, BearerToken, ClientError};
use arm_lookup::LookupError;
use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUB: &str = "00000000-0000-0000-0000-000000000000";

fn definitions_path() -> String {
    format!("/subscriptions/{SUB}/providers/Microsoft.Authorization/policyDefinitions")
}

fn definition(name: &str, display_name: &str) -> Value {
    json!({
        "id": format!("/subscriptions/{SUB}/providers/Microsoft.Authorization/policyDefinitions/{name}"),
        "name": name,
        "properties": {
            "displayName": display_name,
            "policyType": "Custom"
        }
    })
}

fn client(server: &MockServer) -> ArmClient {
    ArmClient::new(&server.uri(), SUB, Arc::new(BearerToken::new("test-token"))).unwrap()
}

/// Mounts two pages: the first links to the second via `nextLink`.
async fn mount_two_pages(server: &MockServer, first: Vec<Value>, second: Vec<Value>) {
    let next_link = format!("{}/page-two?api-version=2021-06-01", server.uri());

    Mock::given(method("GET"))
        .and(path(definitions_path()))
        .and(query_param("api-version", "2021-06-01"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": first,
            "nextLink": next_link
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page-two"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": second })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_finds_unique_match_on_later_page() {
    let server = MockServer::start().await;
    mount_two_pages(
        &server,
        vec![definition("p1", "Allowed locations")],
        vec![definition("p2", "Require tags")],
    )
    .await;

    let found = find_policy_definition_by_display_name(&client(&server), "Require tags")
        .await
        .unwrap();

    assert_eq!(found.name, "p2");
    assert_eq!(found.parsed_id().unwrap().name, "p2");
}

#[tokio::test]
async fn test_duplicate_display_names_are_ambiguous() {
    let server = MockServer::start().await;
    mount_two_pages(
        &server,
        vec![definition("b", "Require tags")],
        vec![definition("a", "Require tags")],
    )
    .await;

    let err = find_policy_definition_by_display_name(&client(&server), "Require tags")
        .await
        .unwrap_err();

    match err {
        LookupError::Ambiguous { ids, .. } => {
            assert_eq!(ids.len(), 2);
            assert!(ids[0].ends_with("/a"));
        }
        other => panic!("expected ambiguous, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_display_name_is_not_found() {
    let server = MockServer::start().await;
    mount_two_pages(&server, vec![definition("p1", "Allowed locations")], vec![]).await;

    let err = find_policy_definition_by_display_name(&client(&server), "allowed locations")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_api_error_surfaces_through_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{SUB}/providers/Microsoft.Authorization/policySetDefinitions"
        )))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ms-request-id", "req-123")
                .set_body_json(json!({
                    "error": {
                        "code": "AuthorizationFailed",
                        "message": "The client does not have authorization"
                    }
                })),
        )
        .mount(&server)
        .await;

    let err = find_policy_set_definition_by_display_name(&client(&server), "Anything")
        .await
        .unwrap_err();

    let LookupError::Listing(source) = err else {
        panic!("expected listing error");
    };
    match source.downcast_ref::<ClientError>() {
        Some(ClientError::Api {
            status,
            code,
            request_id,
            ..
        }) => {
            assert_eq!(*status, 403);
            assert_eq!(code, "AuthorizationFailed");
            assert_eq!(request_id.as_deref(), Some("req-123"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_foreign_next_link_is_not_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(definitions_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [definition("p1", "Allowed locations")],
            "nextLink": "https://attacker.example.com/steal?api-version=2021-06-01"
        })))
        .mount(&server)
        .await;

    let err = find_policy_definition_by_display_name(&client(&server), "Allowed locations")
        .await
        .unwrap_err();

    let LookupError::Listing(source) = err else {
        panic!("expected listing error");
    };
    assert!(matches!(
        source.downcast_ref::<ClientError>(),
        Some(ClientError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(definitions_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result: Result<Value, ClientError> = client(&server)
        .get_json(&definitions_path(), "2021-06-01")
        .await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}
