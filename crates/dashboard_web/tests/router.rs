use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use dashboard_core::{DbConfig, SqliteConnector};
use dashboard_web::{build_router, AppState};
use rusqlite::Connection;
use tempfile::TempDir;
use tower::ServiceExt;

fn router_with(sql: &str) -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(sql).unwrap();
    drop(conn);
    let connector = SqliteConnector::new(DbConfig::new(path.to_str().unwrap()));
    (dir, build_router(AppState::new(connector)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

const SEED: &str = "CREATE TABLE contacts (name TEXT, city TEXT);
     CREATE TABLE goals (title TEXT, achieved INTEGER);
     INSERT INTO contacts VALUES ('Amy', 'Oslo'), ('Abe', 'Rome'), ('Bob', NULL);
     INSERT INTO goals VALUES ('run', 1), ('read', 0), ('swim', 0);";

#[tokio::test]
async fn root_defaults_to_contacts() {
    let (_dir, router) = router_with(SEED);
    let (status, body) = get(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>Contacts</h2>"));
    assert!(body.contains("value=\"Contacts\" checked"));
    assert!(body.contains("<td>Oslo</td>"));
    assert!(body.contains("data-label=\"A\" data-count=\"2\""));
}

#[tokio::test]
async fn goals_page_shows_proportions() {
    let (_dir, router) = router_with(SEED);
    let (status, body) = get(router, "/?page=Goals").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>Goals</h2>"));
    assert!(body.contains("value=\"Goals\" checked"));
    assert!(body.contains(">66.7%</text>"));
    assert!(body.contains(">33.3%</text>"));
}

#[tokio::test]
async fn unknown_page_is_bad_request() {
    let (_dir, router) = router_with(SEED);
    let (status, body) = get(router, "/?page=Tasks").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Tasks"));
}

#[tokio::test]
async fn data_access_failure_shows_raw_error() {
    let (_dir, router) = router_with("CREATE TABLE contacts (name TEXT);");
    let (status, body) = get(router, "/?page=Goals").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("<pre class=\"error\">"));
    assert!(body.contains("no such table: goals"));
    assert!(body.contains("<h1>Navigation</h1>"));
}

#[tokio::test]
async fn schema_failure_shows_raw_error() {
    let (_dir, router) = router_with("CREATE TABLE goals (title TEXT);");
    let (status, body) = get(router, "/?page=Goals").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("table `goals` has no `achieved` column"));
}
