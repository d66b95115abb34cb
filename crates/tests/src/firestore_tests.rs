use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::pipeline::fetch_stats;
use server::store::{FirestoreStore, RecordStore};
use shared_types::{AppError, AppErrorKind, Collection};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "schoolboard-test";

fn collection_path(collection: Collection) -> String {
    format!("/v1/projects/{PROJECT}/databases/(default)/documents/{collection}")
}

fn city_document(city: &str) -> Value {
    json!({
        "name": format!("projects/{PROJECT}/databases/(default)/documents/schools/{city}"),
        "fields": { "city": { "stringValue": city } }
    })
}

async fn mount_page(server: &MockServer, collection: Collection, token: Option<&str>, body: Value) {
    let mock = Mock::given(method("GET")).and(path(collection_path(collection)));
    let mock = match token {
        Some(token) => mock.and(query_param("pageToken", token)),
        None => mock.and(query_param_is_missing("pageToken")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_follows_page_tokens_until_exhausted() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Collection::Schools,
        None,
        json!({
            "documents": [city_document("Riyadh"), city_document("Jeddah")],
            "nextPageToken": "page-2"
        }),
    )
    .await;
    mount_page(
        &server,
        Collection::Schools,
        Some("page-2"),
        json!({ "documents": [city_document("Riyadh")] }),
    )
    .await;

    let store = FirestoreStore::new(server.uri(), PROJECT)
        .unwrap()
        .with_page_size(2);
    let records = store.list_records(Collection::Schools).await.unwrap();

    let cities: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("city").and_then(Value::as_str))
        .collect();
    assert_eq!(cities, vec!["Riyadh", "Jeddah", "Riyadh"]);
}

#[tokio::test]
async fn test_sends_page_size_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(collection_path(Collection::Users)))
        .and(query_param("pageSize", "50"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreStore::new(server.uri(), PROJECT)
        .unwrap()
        .with_page_size(50)
        .with_api_key("secret");
    let records = store.list_records(Collection::Users).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(collection_path(Collection::Agencies)))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend down"))
        .mount(&server)
        .await;

    let store = FirestoreStore::new(server.uri(), PROJECT).unwrap();
    let err = store.list_records(Collection::Agencies).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::FetchFailure);
    assert!(err.message.contains("agencies"), "{}", err.message);
    assert!(err.message.contains("503"), "{}", err.message);
}

#[tokio::test]
async fn test_malformed_body_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(collection_path(Collection::Schools)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = FirestoreStore::new(server.uri(), PROJECT).unwrap();
    let err = store.list_records(Collection::Schools).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::FetchFailure);
}

#[tokio::test]
async fn test_unreachable_store_is_a_fetch_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let store = FirestoreStore::new(uri, PROJECT).unwrap();
    let err = store.list_records(Collection::Users).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::FetchFailure);
}

#[tokio::test]
async fn test_dashboard_stats_over_rest() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Collection::Schools,
        None,
        json!({
            "documents": [
                city_document("Abha"),
                { "fields": { "name": { "stringValue": "No city" } } },
                city_document("Abha")
            ]
        }),
    )
    .await;
    mount_page(
        &server,
        Collection::Users,
        None,
        json!({ "documents": [{ "fields": {} }, { "fields": {} }] }),
    )
    .await;
    mount_page(&server, Collection::Agencies, None, json!({})).await;

    let store = FirestoreStore::new(server.uri(), PROJECT).unwrap();
    let stats = fetch_stats(&store).await.unwrap();

    assert_eq!(stats.summary.schools, 3);
    assert_eq!(stats.summary.users, 2);
    assert_eq!(stats.summary.agencies, 0);
    let names: Vec<&str> = stats.cities.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Abha", shared_types::UNSPECIFIED_CITY]);
}

#[tokio::test]
async fn test_api_key_stays_out_of_unreachable_error() {
    // nothing listens on the discard port
    let store = FirestoreStore::new("http://127.0.0.1:9", PROJECT)
        .unwrap()
        .with_api_key("secret-api-key");
    let err = store.list_records(Collection::Users).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::FetchFailure);
    assert!(!err.message.contains("secret-api-key"), "{}", err.message);
    assert!(
        !AppError::friendly_message(&serde_json::to_string(&err).unwrap())
            .contains("secret-api-key")
    );
}

#[tokio::test]
async fn test_api_key_stays_out_of_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(collection_path(Collection::Schools)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = FirestoreStore::new(server.uri(), PROJECT)
        .unwrap()
        .with_api_key("secret-api-key");
    let err = store.list_records(Collection::Schools).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::FetchFailure);
    assert!(!err.message.contains("secret-api-key"), "{}", err.message);
}

#[tokio::test]
async fn test_invalid_base_url_is_an_internal_error() {
    let store = FirestoreStore::new("not a url", PROJECT)
        .unwrap()
        .with_api_key("secret-api-key");
    let err = store.list_records(Collection::Agencies).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert!(!err.message.contains("secret-api-key"), "{}", err.message);
}

#[tokio::test]
async fn test_repeated_page_token_stops_listing() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Collection::Schools,
        None,
        json!({ "documents": [city_document("Tabuk")], "nextPageToken": "stuck" }),
    )
    .await;
    mount_page(
        &server,
        Collection::Schools,
        Some("stuck"),
        json!({ "documents": [city_document("Hail")], "nextPageToken": "stuck" }),
    )
    .await;

    let store = FirestoreStore::new(server.uri(), PROJECT).unwrap();
    let records = tokio::time::timeout(
        Duration::from_secs(5),
        store.list_records(Collection::Schools),
    )
    .await
    .expect("listing should stop when the page token repeats")
    .unwrap();
    assert_eq!(records.len(), 2);
}
