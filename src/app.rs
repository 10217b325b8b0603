use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::otp::rest::otp_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .route("/", get(health_handler))
    .nest("/api", otp_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "ok": true, "version": "1.0" }))
}
