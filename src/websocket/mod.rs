pub mod handshake;

use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use hyper::upgrade::OnUpgrade;
use hyper_util::rt::TokioIo;
use tracing::{error, info};

use crate::error::GatewayError;
use crate::state::AppState;

/// `GET /ws`: validate the upgrade, take over the raw connection, greet once.
///
/// The spawned task owns the connection from here on and closes it when the
/// peer stops being readable. Rejected requests never take the connection.
pub async fn websocket_handler(
    State(state): State<AppState>,
    mut request: Request,
) -> Result<Response, GatewayError> {
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let headers = request.headers();
    let wants_websocket = headers
        .get(header::UPGRADE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("websocket"));
    if !wants_websocket {
        return Err(GatewayError::UpgradeRequired);
    }

    let key = headers
        .get(header::SEC_WEBSOCKET_KEY)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(GatewayError::MissingKey)?;
    let accept = handshake::accept_token(key);

    let on_upgrade = request
        .extensions_mut()
        .remove::<OnUpgrade>()
        .ok_or(GatewayError::HijackUnsupported)?;

    let connection_id = state.generate_connection_id();
    tokio::spawn(async move {
        match on_upgrade.await {
            Ok(upgraded) => {
                info!("New WebSocket connection: {}", connection_id);
                if let Err(e) = handshake::greet_and_hold(TokioIo::new(upgraded)).await {
                    error!("WebSocket {} failed: {}", connection_id, e);
                }
                info!("WebSocket {} closed", connection_id);
            }
            Err(e) => error!("Connection takeover failed for {}: {}", connection_id, e),
        }
    });

    Ok(handshake::switching_protocols(&accept))
}
