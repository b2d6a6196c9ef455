use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::error::GatewayError;
use crate::state::AppState;
use crate::translate::TranslationRequest;

/// `POST /` translation endpoint.
///
/// Auth is checked before the body is touched, so an unauthenticated caller
/// always gets 401 whatever it sent.
pub async fn translate_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, GatewayError> {
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if request.method() != Method::POST {
        return Err(GatewayError::MethodNotAllowed);
    }

    if let Some(expected) = state.client_api_key.as_deref() {
        if !credential_matches(request.headers(), expected) {
            return Err(GatewayError::Unauthorized);
        }
    }

    let body: Bytes = axum::body::to_bytes(request.into_body(), state.max_body_bytes)
        .await
        .map_err(|_| GatewayError::BodyRead)?;

    let payload: TranslationRequest =
        serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidRequest)?;
    debug!(
        "Translating {} text(s) to {:?} via {}",
        payload.text.len(),
        payload.target_lang,
        state.translation.engine_name()
    );

    let reply = state.translation.translate(&payload).await?;
    info!(
        "{} answered {} with {} translation(s)",
        state.translation.engine_name(),
        reply.status,
        reply.body.translations.len()
    );

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(reply.body)).into_response())
}

/// Compare the caller's `Authorization` value with the configured key.
/// A leading `Bearer ` scheme is accepted; the rest must match exactly.
fn credential_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v))
        .is_some_and(|presented| presented == expected)
}
