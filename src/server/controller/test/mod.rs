use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceExt;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    router, startup, state::AppState, storage::memory::MemoryBlobStore,
};
use test_utils::{builder::TestBuilder, factory};


/// Builds the API router over the given database and blob store.
async fn app(db: &DatabaseConnection, blobs: Arc<MemoryBlobStore>) -> Router {
    let session = startup::connect_to_session(db).await.unwrap();
    let (routes, _) = router::router();

    routes
        .with_state(AppState::new(db.clone(), blobs, "/media/".to_string()))
        .layer(session)
}

/// Persists a session signed in as `user_id` and returns its request cookie.
async fn signed_in_cookie(db: &DatabaseConnection, user_id: i32) -> String {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    let session = Session::new(
        None,
        Arc::new(store),
        Some(Expiry::OnInactivity(time::Duration::days(1))),
    );
    crate::server::middleware::session::AuthSession::new(&session)
        .set_user_id(user_id)
        .await
        .unwrap();
    session.save().await.unwrap();

    format!("id={}", session.id().unwrap())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request("GET", uri, cookie)
}

fn request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
