//! HTTP routes for the agency API.
//!
//! | Method | Path                                   | Success |
//! |--------|----------------------------------------|---------|
//! | GET    | `/cats/`                               | 200     |
//! | POST   | `/cats/`                               | 201     |
//! | GET    | `/cats/{cat_id}`                       | 200     |
//! | PATCH  | `/cats/{cat_id}`                       | 200     |
//! | DELETE | `/cats/{cat_id}`                       | 204     |
//! | GET    | `/missions/`                           | 200     |
//! | POST   | `/missions/`                           | 201     |
//! | GET    | `/missions/{mission_id}`               | 200     |
//! | PATCH  | `/missions/{mission_id}`               | 200     |
//! | DELETE | `/missions/{mission_id}`               | 204     |
//! | PATCH  | `/missions/mission/target/{target_id}` | 200     |
//! | GET    | `/health`                              | 200     |
//!
//! Collection paths answer with and without the trailing slash.

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use log::info;
use serde_json::{json, Value};
use spycat_core::Agency;

pub mod cats;
pub mod missions;


/// Builds the full application router over the given agency.
pub fn router(agency: Agency) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(cats::router())
        .merge(missions::router())
        .layer(middleware::from_fn(log_requests))
        .with_state(agency)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
