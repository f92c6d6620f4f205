use crate::errors::ChatResult;
use crate::models::message::ChatMessage;
use async_trait::async_trait;

/// One open bidirectional link to a peer.
#[async_trait]
pub trait Connection: Send {
    /// Wait for the next inbound unit. Returns `None` once the peer has closed
    /// the connection; nothing may be received after that.
    async fn receive(&mut self) -> Option<ChatResult<String>>;

    async fn send(&mut self, text: String) -> ChatResult<()>;
}

/// Reply to every inbound chat record until the peer goes away.
///
/// Each unit is parsed, answered with [`ChatMessage::reply`] and dropped, so
/// replies go out in receive order. A unit that fails to parse ends the loop
/// with an error and no reply. Returns the number of replies sent.
pub async fn serve_connection<C>(conn: &mut C) -> ChatResult<usize>
where
    C: Connection + ?Sized,
{
    let mut replies = 0;
    while let Some(inbound) = conn.receive().await {
        let message = ChatMessage::parse(&inbound?)?;
        tracing::debug!("chat message: {:?}", message.chat_message);
        conn.send(message.reply()).await?;
        replies += 1;
    }
    Ok(replies)
}
