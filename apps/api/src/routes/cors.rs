//! Cross-origin policy: an explicit allow-list.
//!
//! `CorsLayer` answers preflights and decorates responses for allowed
//! origins; `reject_disallowed_origin` turns away everything else before it
//! reaches a handler. Requests without an `Origin` header (curl, server-side
//! callers) pass through.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        debug!("Request from origin: {:?}", origin);
        if !state.config.allowed_origins.iter().any(|allowed| allowed == origin) {
            warn!("Blocked by CORS: {:?}", origin);
            return AppError::OriginNotAllowed.into_response();
        }
    }
    next.run(request).await
}
