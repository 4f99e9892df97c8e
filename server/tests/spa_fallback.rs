//! End-to-end tests for the static server.
//!
//! Requests run against a temporary site directory.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use storyfront_server::server::{INDEX_FILE, create_router};
use tower::ServiceExt;

const INDEX_HTML: &str = "<html><body><div id=\"app\"></div></body></html>";

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join(INDEX_FILE), INDEX_HTML).expect("write index");
    std::fs::create_dir_all(dir.path().join("pkg")).expect("create pkg");
    std::fs::write(dir.path().join("pkg/storyfront.js"), "export {}").expect("write js");
    dir
}

async fn get(dir: &tempfile::TempDir, uri: &str) -> (StatusCode, String) {
    let response = create_router(dir.path())
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_root_serves_index() {
    let dir = site();
    let (status, body) = get(&dir, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_deep_path_serves_index() {
    let dir = site();
    for uri in ["/about/team", "/a/b/c/d", "/blog?page=2"] {
        let (status, body) = get(&dir, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, INDEX_HTML, "{uri}");
    }
}

#[tokio::test]
async fn test_existing_asset_served() {
    let dir = site();
    let (status, body) = get(&dir, "/pkg/storyfront.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export {}");
}
