//! Hand-written RFC 6455 handshake and greeting.
//!
//! This is deliberately not a WebSocket implementation: one unmasked text
//! frame is sent, everything the peer sends afterwards is discarded unparsed,
//! and the connection lives until a read fails. There is no ping/pong, no
//! fragmentation, no mask validation and no close handshake. Callers only see
//! [`accept_token`], [`switching_protocols`] and [`greet_and_hold`], so a real
//! WebSocket library can replace this module without touching them.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1::{Digest, Sha1};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

const WEBSOCKET_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// FIN + text opcode, unmasked, 7-bit payload length 2, payload "ok"
pub const GREETING_FRAME: [u8; 4] = [0x81, 0x02, b'o', b'k'];

/// `Sec-WebSocket-Accept` value for a client's `Sec-WebSocket-Key`
pub fn accept_token(key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(WEBSOCKET_GUID.as_bytes());
    STANDARD.encode(hasher.finalize())
}

/// The `101 Switching Protocols` response completing the handshake
pub fn switching_protocols(accept: &str) -> Response {
    (
        StatusCode::SWITCHING_PROTOCOLS,
        [
            (header::UPGRADE, "websocket"),
            (header::CONNECTION, "Upgrade"),
            (header::SEC_WEBSOCKET_ACCEPT, accept),
        ],
    )
        .into_response()
}

/// Send the greeting frame, then drain the connection until the peer goes
/// away. End of stream and read errors both end the connection.
pub async fn greet_and_hold<IO>(mut io: IO) -> io::Result<()>
where
    IO: AsyncRead + AsyncWrite + Unpin,
{
    io.write_all(&GREETING_FRAME).await?;
    io.flush().await?;

    let mut buf = [0u8; 1024];
    loop {
        match io.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
    }

    let _ = io.shutdown().await;
    Ok(())
}
