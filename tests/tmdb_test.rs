//! TMDB client tests against a local mock server.

use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use tmdb_list_sync::config::Credentials;
use tmdb_list_sync::lists::{choose_or_create, fetch_lists};
use tmdb_list_sync::prompt::ScriptedPrompter;
use tmdb_list_sync::{SyncError, TmdbClient};

fn client(server: &Server) -> TmdbClient {
    let credentials = Credentials {
        api_key: "test_key".into(),
        bearer_token: "test_token".into(),
        account_id: "42".into(),
        api_base_url: None,
    };
    TmdbClient::with_base_url(credentials, server.url())
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn test_fetch_lists_is_authenticated() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/account/42/lists")
        .match_query(Matcher::UrlEncoded("api_key".into(), "test_key".into()))
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "page": 1,
                "results": [
                    {"id": 8001, "name": "Weekend", "item_count": 3, "description": ""},
                    {"id": 8002, "name": "Docs", "item_count": 0, "description": ""}
                ],
                "total_results": 2
            }"#,
        )
        .create();

    let lists = fetch_lists(&client(&server)).unwrap();

    mock.assert();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id, 8001);
    assert_eq!(lists[0].name, "Weekend");
    assert_eq!(lists[0].item_count, 3);
    assert_eq!(lists[1].id, 8002);
}

#[test]
fn test_fetch_lists_error_carries_status_and_body() {
    let mut server = Server::new();

    server
        .mock("GET", "/account/42/lists")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"status_code": 3, "status_message": "Authentication failed"}"#)
        .create();

    let err = fetch_lists(&client(&server)).unwrap_err();

    match err {
        SyncError::RemoteService { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Authentication failed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_no_lists_goes_straight_to_creation() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/list")
        .match_query(Matcher::UrlEncoded("api_key".into(), "test_key".into()))
        .match_header("authorization", "Bearer test_token")
        .match_body(Matcher::Json(json!({
            "name": "To watch",
            "description": "From titles.txt",
            "language": "en"
        })))
        .with_status(201)
        .with_body(r#"{"status_code": 1, "status_message": "Success.", "success": true, "list_id": 5150}"#)
        .create();

    let mut prompter = ScriptedPrompter::new(["To watch", "From titles.txt"]);
    let id = choose_or_create(&client(&server), &[], &mut prompter).unwrap();

    mock.assert();
    assert_eq!(id, 5150);
    // Only name and description were asked, never a menu number
    assert_eq!(prompter.asked.len(), 2);
    assert!(prompter.asked.iter().all(|q| !q.contains("choice")));
}

#[test]
fn test_create_list_without_list_id_fails() {
    let mut server = Server::new();

    server
        .mock("POST", "/list")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body(r#"{"success": true, "id": 77}"#)
        .create();

    let mut prompter = ScriptedPrompter::new(["Name", "Description"]);
    let err = choose_or_create(&client(&server), &[], &mut prompter).unwrap_err();

    match err {
        SyncError::InvalidResponse(msg) => assert!(msg.contains("list_id")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_menu_zero_creates_list() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/list")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body(r#"{"success": true, "list_id": 9}"#)
        .create();

    let lists = vec![tmdb_list_sync::models::MediaList {
        id: 1,
        name: "Existing".into(),
        item_count: 2,
    }];
    let mut prompter = ScriptedPrompter::new(["x", "0", "New", "Desc"]);
    let id = choose_or_create(&client(&server), &lists, &mut prompter).unwrap();

    mock.assert();
    assert_eq!(id, 9);
    assert_eq!(prompter.warnings.len(), 1);
}

// =============================================================================
// Item status / add
// =============================================================================

#[test]
fn test_item_status_non_200_means_absent() {
    let mut server = Server::new();

    server
        .mock("GET", "/list/7/item_status")
        .match_query(Matcher::UrlEncoded("media_id".into(), "27205".into()))
        .with_status(404)
        .with_body(r#"{"status_code": 34}"#)
        .create();

    assert!(!client(&server).item_status(7, 27205).unwrap());
}

#[test]
fn test_item_status_present() {
    let mut server = Server::new();

    server
        .mock("GET", "/list/7/item_status")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("media_id".into(), "27205".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "7", "item_present": true}"#)
        .create();

    assert!(client(&server).item_status(7, 27205).unwrap());
}

#[test]
fn test_add_item_requires_201() {
    let mut server = Server::new();

    server
        .mock("POST", "/list/7/add_item")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status_code": 8, "status_message": "Duplicate entry"}"#)
        .create();

    let err = client(&server).add_item(7, 27205).unwrap_err();
    match err {
        SyncError::RemoteService { status, body } => {
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("Duplicate entry"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Account lookup
// =============================================================================

#[test]
fn test_account_lookup() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/account")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_body(r#"{"id": 548, "username": "moviefan", "include_adult": false}"#)
        .create();

    let account = client(&server).account().unwrap();

    mock.assert();
    assert_eq!(account.id, 548);
    assert_eq!(account.username.as_deref(), Some("moviefan"));
}

#[test]
fn test_account_lookup_without_id() {
    let mut server = Server::new();

    server
        .mock("GET", "/account")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"username": "moviefan"}"#)
        .create();

    let err = client(&server).account().unwrap_err();
    assert!(matches!(err, SyncError::InvalidResponse(_)));
}

#[test]
fn test_network_error() {
    let credentials = Credentials::default();
    // Port 9 (discard) is not expected to accept connections
    let client = TmdbClient::with_base_url(credentials, "http://127.0.0.1:9");

    let err = client.search_multi("Inception").unwrap_err();
    assert!(matches!(err, SyncError::Network(_)));
}
