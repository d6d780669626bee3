use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;

use places_collector::{
    config::Config,
    output::write_csv,
    record::PlaceRecord,
    Collector, Coordinates, LocatorClient, PlacesApi, SearchSpec,
};

async fn places(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    let text = params.get("text").cloned().unwrap_or_default();
    match text.as_str() {
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => {
            let language = headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({
                "results": [
                    {
                        "name": format!("Cafe {}", text),
                        "lat": 55.751,
                        "lon": 37.611,
                        "rating": {"value": 4.5, "count": 10}
                    },
                    {"address": "Тверская, 1"}
                ],
                "echo": params,
                "accept_language": language
            }))
            .into_response()
        }
    }
}

async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/", get(places));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn config(base_url: String) -> Config {
    Config {
        api_key: "test-key".to_string(),
        base_url,
        lang: "ru_RU".to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn spec(name: &str, query: &str) -> SearchSpec {
    SearchSpec::new(name, query, Coordinates::new(55.75, 37.61))
}

#[tokio::test]
async fn request_sends_base_params_and_headers() {
    let client = LocatorClient::new(&config(spawn_upstream().await)).unwrap();

    let json = client
        .request(&[("text".to_string(), "coffee".to_string())])
        .await;

    let echo = &json["echo"];
    assert_eq!(echo["apikey"], "test-key");
    assert_eq!(echo["format"], "json");
    assert_eq!(echo["lang"], "ru_RU");
    assert_eq!(echo["text"], "coffee");
    assert_eq!(json["accept_language"], "ru-RU,ru;q=0.9,en;q=0.8");
}

#[tokio::test]
async fn server_error_yields_empty_map() {
    let client = LocatorClient::new(&config(spawn_upstream().await)).unwrap();

    let json = client.request(&[("text".to_string(), "fail".to_string())]).await;
    assert!(json.is_empty());

    let err = client
        .try_request(&[("text".to_string(), "fail".to_string())])
        .await
        .unwrap_err();
    assert_eq!(err.upstream_body(), Some("upstream exploded"));
}

#[tokio::test]
async fn non_json_body_yields_empty_map() {
    let client = LocatorClient::new(&config(spawn_upstream().await)).unwrap();
    let json = client.request(&[("text".to_string(), "garbage".to_string())]).await;
    assert!(json.is_empty());
}

#[tokio::test]
async fn failed_search_is_skipped_and_the_rest_is_written() {
    let client = LocatorClient::new(&config(spawn_upstream().await)).unwrap();
    let collector = Collector::new(client, Duration::ZERO);

    let records = collector
        .collect(&[spec("Broken", "fail"), spec("Test", "coffee"), spec("Html", "garbage")])
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].object_name, "Cafe coffee");
    assert_eq!(records[0].rating.as_f64(), Some(4.5));
    assert_eq!(records[0].reviews_count.as_i64(), Some(10));
    assert_eq!(records[0].search_query, "coffee");
    assert_eq!(records[1].object_name, "Неизвестно");
    assert_eq!(records[1].object_address, "Тверская, 1");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("places.csv");
    assert_eq!(write_csv(&records, &path).unwrap(), 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, PlaceRecord::FIELDS);
    assert_eq!(reader.records().count(), 2);
}
