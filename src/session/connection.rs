//! Chat Connection
//!
//! Owns the WebSocket for one session. The stream is split into a reader
//! task that publishes [`SessionEvent`]s onto a single-consumer channel and
//! a writer task that drains outbound commands, so callers never block on
//! the transport. There is no reconnection: once `Closed` is published the
//! connection is finished for the lifetime of the session.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::error::SessionError;
use super::events::{ChatReply, SessionEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Commands handed to the writer task
#[derive(Debug)]
pub(crate) enum Command {
    /// Send one raw text frame (the user's literal input, no envelope)
    Send(String),
    /// Send a close frame and stop
    Close,
}

/// Handle to one live WebSocket connection
///
/// Obtained from [`ChatConnection::open`] together with the event receiver.
/// Dropping the handle closes the connection.
pub struct ChatConnection {
    outbound: mpsc::UnboundedSender<Command>,
    closed: bool,
}

impl ChatConnection {
    /// Open the connection for a session
    ///
    /// Dials `<ws_base_url>/chat/<session_id>` and returns the handle plus
    /// the event channel. `Opened` is the first event on the channel; it is
    /// published as soon as the handshake completes.
    pub async fn open(
        ws_base_url: &str,
        session_id: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), SessionError> {
        let url = format!("{}/chat/{}", ws_base_url.trim_end_matches('/'), session_id);

        let (stream, _response) = connect_async(url.as_str()).await?;
        tracing::debug!(url = %url, "WebSocket handshake complete");

        let (sink, source) = stream.split();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        // The consumer sees Opened before any reply can arrive
        let _ = event_tx.send(SessionEvent::Opened);

        tokio::spawn(write_loop(sink, outbound_rx));
        tokio::spawn(read_loop(source, event_tx));

        Ok((Self::from_sender(outbound_tx), event_rx))
    }

    pub(crate) fn from_sender(outbound: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            outbound,
            closed: false,
        }
    }

    /// Queue one outbound text frame
    ///
    /// Never blocks; the writer task owns the sink. Fails only when the
    /// connection has already shut down.
    pub fn send(&self, text: &str) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::ConnectionClosed);
        }
        self.outbound
            .send(Command::Send(text.to_string()))
            .map_err(|_| SessionError::ConnectionClosed)
    }

    /// Close the connection
    ///
    /// Idempotent: the close frame is sent at most once no matter how many
    /// times this is called.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let _ = self.outbound.send(Command::Close);
    }

    /// Whether `close` has been called on this handle
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for ChatConnection {
    fn drop(&mut self) {
        self.close();
    }
}

/// Drain outbound commands into the sink until closed
async fn write_loop(
    mut sink: futures_util::stream::SplitSink<WsStream, WsMessage>,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            Command::Send(text) => {
                if let Err(e) = sink.send(WsMessage::Text(text)).await {
                    tracing::warn!(error = %e, "Outbound frame failed");
                    break;
                }
            }
            Command::Close => {
                let _ = sink.send(WsMessage::Close(None)).await;
                break;
            }
        }
    }
}

/// Publish inbound frames as events until the stream ends
///
/// Malformed payloads are dropped with a warning rather than ending the
/// session. `Closed` is always the final event.
async fn read_loop(
    mut source: futures_util::stream::SplitStream<WsStream>,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    while let Some(frame) = source.next().await {
        match frame {
            Ok(WsMessage::Text(text)) => match serde_json::from_str::<ChatReply>(&text) {
                Ok(reply) => {
                    if events.send(SessionEvent::Reply(reply.response)).is_err() {
                        // Consumer went away; nothing left to do
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping malformed chat frame");
                }
            },
            Ok(WsMessage::Close(_)) => break,
            Ok(_) => {} // ping/pong and binary frames are not part of the protocol
            Err(e) => {
                tracing::warn!(error = %e, "WebSocket read failed");
                break;
            }
        }
    }

    let _ = events.send(SessionEvent::Closed);
}
