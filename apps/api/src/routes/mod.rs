pub mod cors;
pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors::cors_layer(&state.config.allowed_origins);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/analyze", post(handlers::handle_analyze).layer(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        // Outermost: disallowed origins never reach the CORS layer or a handler.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::reject_disallowed_origin,
        ))
        .with_state(state)
}

/// A panic anywhere below the router becomes the generic 500 envelope.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
