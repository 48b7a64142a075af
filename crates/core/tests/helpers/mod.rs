//! Fake search backend for client integration tests.
//!
//! Each test assembles an axum `Router` with the behaviour it needs, serves
//! it on an ephemeral localhost port, and points a `BackendClient` at it.

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use litpath_core::{BackendClient, ClientConfig};

/// Request bodies received by `/search`, in arrival order.
pub type Recorded = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on 127.0.0.1 and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server crashed");
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn client(base_url: &str) -> BackendClient {
    BackendClient::new(ClientConfig::new(base_url))
}

pub fn sample_search_body() -> Value {
    json!({
        "overview": "Plastic affects soil [1] and roots [2].",
        "documents": [
            {
                "title": "Microplastics in Paddy Soil",
                "author": "Santos, M.",
                "publication_year": "2021",
                "abstract": "One. Two. Three. Four.",
                "file": "santos_2021.txt",
                "degree": "Master of Science",
                "call_no": "TH 631.4 S237",
                "subjects": "Agriculture, Soil Science",
                "university": "Central Luzon State University"
            },
            {
                "author": "Reyes, A.",
                "publication_year": 2019,
                "abstract": "",
                "file": "reyes_2019.txt",
                "subjects": ["Botany"]
            }
        ],
        "related_questions": ["Which crops are most affected?"]
    })
}

async fn healthy() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "total_documents": 2,
        "total_chunks": 48,
        "total_txt_files": 2
    }))
}

async fn search_ok(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    recorded.lock().expect("poisoned").push(body);
    Json(sample_search_body())
}

/// Healthy backend whose `/search` records requests and returns
/// [`sample_search_body`].
pub fn healthy_backend(recorded: Recorded) -> Router {
    Router::new()
        .route("/health", get(healthy))
        .route("/search", post(search_ok))
        .with_state(recorded)
}

/// Healthy backend whose `/search` always fails with `status` and `body`.
pub fn failing_backend(status: StatusCode, body: &'static str) -> Router {
    Router::new()
        .route("/health", get(healthy))
        .route(
            "/search",
            post(move || async move {
                (status, [("content-type", "application/json")], body)
            }),
        )
}
