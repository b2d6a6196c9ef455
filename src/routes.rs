use axum::{
    http::{header, HeaderValue},
    routing::any,
    Router,
};
use std::time::Duration;
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;
use crate::websocket;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Translation gateway
        .route("/", any(handlers::translate_handler))
        // WebSocket greeting
        .route("/ws", any(websocket::websocket_handler))
        // Any other path is the translation endpoint too
        .fallback(handlers::translate_handler)
}

/// Full application: routes plus tracing, timeout and CORS layers.
///
/// CORS headers are the outermost layer so that every response carries them,
/// including errors and timeouts.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    create_routes()
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization, X-NoSugar-App"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .with_state(state)
}
