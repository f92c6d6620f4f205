use async_trait::async_trait;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
    routing::get,
    Router,
};
use todochat::chat::{serve_connection, Connection};
use todochat::errors::{ChatError, ChatResult};
use tracing::{debug, error, info, warn};

/// Adapts an axum WebSocket to the chat [`Connection`].
///
/// Text frames and UTF-8 binary frames are chat units. Ping and pong frames
/// are handled by the transport and skipped. A close frame, the end of the
/// stream or a read failure (a peer that vanished without the closing
/// handshake) all mean the peer is gone.
struct SocketConnection {
    socket: WebSocket,
}

#[async_trait]
impl Connection for SocketConnection {
    async fn receive(&mut self) -> Option<ChatResult<String>> {
        loop {
            let message = match self.socket.recv().await? {
                Ok(message) => message,
                Err(e) => {
                    debug!("chat socket read ended: {}", e);
                    return None;
                }
            };
            match message {
                Message::Text(text) => return Some(Ok(text)),
                Message::Binary(data) => {
                    return Some(String::from_utf8(data).map_err(|_| ChatError::NotUtf8))
                }
                Message::Ping(_) | Message::Pong(_) => continue,
                Message::Close(_) => return None,
            }
        }
    }

    async fn send(&mut self, text: String) -> ChatResult<()> {
        self.socket
            .send(Message::Text(text))
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))
    }
}

async fn websocket(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(socket: WebSocket) {
    info!("chat connection opened");
    let mut conn = SocketConnection { socket };
    match serve_connection(&mut conn).await {
        Ok(replies) => info!(replies, "chat connection closed by peer"),
        Err(ChatError::Transport(e)) => warn!("chat connection lost: {}", e),
        Err(e) => error!("chat connection dropped: {}", e),
    }
}

pub fn routes() -> Router {
    Router::new().route("/websocket", get(websocket))
}
