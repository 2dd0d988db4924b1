use serde_json::json;
use tido::api::{ApiError, HttpStore, RemoteStore, Todo};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// The shape jsonplaceholder serves: numeric ids plus a userId field.
fn sample_response() -> serde_json::Value {
    json!([
        {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
        {"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": false},
        {"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": true},
    ])
}

fn sample_todo() -> Todo {
    Todo {
        id: "4f2a6c0e-0b1f-4f7e-9c2a-1d3e5b7a9c11".to_string(),
        title: "Buy milk".to_string(),
        completed: false,
    }
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_todos_in_response_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let todos = store.fetch(10).await.unwrap();

    assert_eq!(todos.len(), 3);
    assert_eq!(
        todos.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );
    assert_eq!(todos[0].title, "delectus aut autem");
    assert!(todos[2].completed);
}

#[tokio::test]
async fn test_fetch_sends_limit_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("_limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let todos = store.fetch(5).await.unwrap();

    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_fetch_accepts_string_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "abc-123", "title": "mixed", "completed": false},
            {"id": 9, "title": "numeric", "completed": false},
        ])))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let todos = store.fetch(10).await.unwrap();

    assert_eq!(todos[0].id, "abc-123");
    assert_eq!(todos[1].id, "9");
}

#[tokio::test]
async fn test_fetch_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let result = store.fetch(10).await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let result = store.fetch(10).await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    // Port 1 is never listening.
    let store = HttpStore::new("http://127.0.0.1:1".to_string());
    let result = store.fetch(10).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_todo_body() {
    let mock_server = MockServer::start().await;
    let todo = sample_todo();

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(&todo))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "4f2a6c0e-0b1f-4f7e-9c2a-1d3e5b7a9c11",
            "title": "Buy milk",
            "completed": false,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let result = store.create(&todo).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_ignores_response_body() {
    let mock_server = MockServer::start().await;

    // The endpoint's echo is irrelevant; even garbage must not fail a create.
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let result = store.create(&sample_todo()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let store = HttpStore::new(mock_server.uri());
    let result = store.create(&sample_todo()).await;

    assert!(matches!(result, Err(ApiError::Api { status: 503, .. })));
}
