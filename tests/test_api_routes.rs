//! HTTP surface test: serve a loaded database in-process and exercise every route.

use json_collections_api::storage::{self, DataPaths};
use json_collections_api::{transport, Database};
use axum::extract::Request;
use axum::ServiceExt;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn spawn_app(database: Database) -> String {
    let state = transport::http::AppState::new(database, "test");
    let router = transport::http::create_app(state);

    // Bind to an ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(router)).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

/// Database loaded with no files on disk (built-in defaults).
async fn spawn_default_app() -> String {
    let tmp = TempDir::new().unwrap();
    let paths = DataPaths::new(tmp.path().join("db.json"), tmp.path().join("db"));
    spawn_app(storage::load(&paths)).await
}

async fn get_json(url: &str) -> (u16, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_status_on_default_dataset() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/api/status", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "running");
    assert_eq!(body["collections"], json!(["dosen", "mahasiswa"]));
    assert_eq!(body["itemCounts"], json!({"dosen": 1, "mahasiswa": 1}));
    assert_eq!(body["platform"], "test");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_list_collection() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/api/mahasiswa", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([{"id": 1, "nama": "Jane Smith", "nim": "12345678"}]));
}

#[tokio::test]
async fn test_unknown_collection_is_404_with_available() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/api/prodi", base_url)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Collection 'prodi' not found");
    assert_eq!(body["available"], json!(["dosen", "mahasiswa"]));

    let (status, body) = get_json(&format!("{}/api/prodi/1", base_url)).await;
    assert_eq!(status, 404);
    assert_eq!(body["available"], json!(["dosen", "mahasiswa"]));
}

#[tokio::test]
async fn test_get_record_by_id() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/api/dosen/1", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"id": 1, "nama": "Dr. John Doe", "nidn": "1234567890"}));

    let (status, body) = get_json(&format!("{}/api/dosen/99", base_url)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Item with id '99' not found in collection 'dosen'");
    assert_eq!(body["totalItems"], 1);
}

#[tokio::test]
async fn test_string_ids_match_numeric_and_back() {
    let mut db = Database::new();
    db.insert(
        "buku",
        json!([
            {"id": "10", "judul": "Rust"},
            {"id": 11, "judul": "Axum"},
            {"id": "ISBN-12", "judul": "Serde"}
        ]),
    );
    let base_url = spawn_app(db).await;

    let (status, body) = get_json(&format!("{}/api/buku/10", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["judul"], "Rust");

    let (status, body) = get_json(&format!("{}/api/buku/11", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["judul"], "Axum");

    let (status, body) = get_json(&format!("{}/api/buku/ISBN-12", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["judul"], "Serde");
}

#[tokio::test]
async fn test_non_array_collection() {
    let mut db = Database::new();
    db.insert("config", json!({"tahun": 2024}));
    let base_url = spawn_app(db).await;

    let (status, body) = get_json(&format!("{}/api/config", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"tahun": 2024}));

    let (_, body) = get_json(&format!("{}/api/status", base_url)).await;
    assert_eq!(body["itemCounts"], json!({"config": "not array"}));

    let (status, body) = get_json(&format!("{}/api/config/1", base_url)).await;
    assert_eq!(status, 404);
    assert_eq!(body["totalItems"], 0);
}

#[tokio::test]
async fn test_unmatched_route_lists_endpoints() {
    let base_url = spawn_default_app().await;

    for path in ["/", "/health", "/api/dosen/1/extra", "/other/api/dosen"] {
        let (status, body) = get_json(&format!("{}{}", base_url, path)).await;
        assert_eq!(status, 200, "path {}", path);
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["path"], path);
        assert_eq!(
            body["availableEndpoints"],
            json!(["/api/status", "/api/:collection", "/api/:collection/:id"])
        );
    }
}

#[tokio::test]
async fn test_repeated_requests_are_stable() {
    let base_url = spawn_default_app().await;
    let url = format!("{}/api/dosen", base_url);

    let (_, first) = get_json(&url).await;
    for _ in 0..5 {
        let (status, body) = get_json(&url).await;
        assert_eq!(status, 200);
        assert_eq!(body, first);
    }
}

#[tokio::test]
async fn test_trailing_slash_reaches_routes() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/api/dosen/", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([{"id": 1, "nama": "Dr. John Doe", "nidn": "1234567890"}]));

    let (status, body) = get_json(&format!("{}/api/dosen/1/", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["nama"], "Dr. John Doe");

    let (status, body) = get_json(&format!("{}/api/status/", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn test_route_literals_ignore_case() {
    let base_url = spawn_default_app().await;

    let (status, body) = get_json(&format!("{}/API/dosen", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body[0]["nidn"], "1234567890");

    let (status, body) = get_json(&format!("{}/Api/Status", base_url)).await;
    assert_eq!(status, 200);
    assert_eq!(body["collections"], json!(["dosen", "mahasiswa"]));

    // Collection names stay case-sensitive.
    let (status, body) = get_json(&format!("{}/API/Dosen", base_url)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Collection 'Dosen' not found");
}

#[tokio::test]
async fn test_unmatched_non_get_is_404() {
    let base_url = spawn_default_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/nowhere", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client
        .delete(format!("{}/nowhere", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client.head(format!("{}/nowhere", base_url)).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}
