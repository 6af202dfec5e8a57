//! Session Controller
//!
//! Owns everything with session lifetime: the session identifier, the
//! transcript, the draft input, the readiness flag, and the connection
//! handle. Events are applied one at a time in arrival order, so the
//! transcript has no concurrent writers.

use tokio::sync::mpsc;
use uuid::Uuid;

use super::connection::ChatConnection;
use super::error::SessionError;
use super::events::SessionEvent;
use super::message::Message;
use super::transcript::Transcript;

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// User message appended and frame handed to the connection
    Sent,
    /// Preconditions unmet; nothing happened
    Ignored,
    /// User message appended but the connection refused the frame
    Failed,
}

/// One chat session, created per client run and never resumed
pub struct ChatSession {
    session_id: String,
    transcript: Transcript,
    draft: String,
    ready: bool,
    connection: Option<ChatConnection>,
}

impl ChatSession {
    /// Create a session with a fresh random identifier
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            transcript: Transcript::new(),
            draft: String::new(),
            ready: false,
            connection: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Open the single connection for this session
    ///
    /// Returns the event receiver for the consumer loop. A session connects
    /// at most once; there is no reconnection after `Closed`.
    pub async fn connect(
        &mut self,
        ws_base_url: &str,
    ) -> Result<mpsc::UnboundedReceiver<SessionEvent>, SessionError> {
        if self.connection.is_some() {
            return Err(SessionError::AlreadyConnected);
        }

        let (connection, events) = ChatConnection::open(ws_base_url, &self.session_id).await?;
        self.connection = Some(connection);
        Ok(events)
    }

    /// Apply one connection event
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Opened => {
                self.ready = true;
            }
            SessionEvent::Reply(text) => {
                self.transcript.push(Message::assistant(text));
            }
            SessionEvent::Closed => {
                // No reconnection: submissions are no-ops from here on
                self.ready = false;
            }
        }
    }

    /// Submit the current draft
    ///
    /// No-op unless the trimmed draft is non-empty, the session is ready,
    /// and a connection exists. On submission the user message is appended
    /// with the raw (untrimmed) draft text before the frame is handed to
    /// the connection, so the transcript shows it regardless of what the
    /// transport does. The draft is cleared only when the hand-off succeeds.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.draft.trim().is_empty() || !self.ready {
            return SubmitOutcome::Ignored;
        }
        let Some(connection) = self.connection.as_ref() else {
            return SubmitOutcome::Ignored;
        };

        self.transcript.push(Message::user(self.draft.clone()));

        match connection.send(&self.draft) {
            Ok(()) => {
                self.draft.clear();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "Submission failed; connection is gone");
                self.ready = false;
                SubmitOutcome::Failed
            }
        }
    }

    /// Tear the session down
    ///
    /// Closes the connection if one is open. Safe to call repeatedly; the
    /// close frame goes out at most once.
    pub fn close(&mut self) {
        if let Some(connection) = self.connection.as_mut() {
            connection.close();
        }
        self.ready = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::connection::Command;
    use crate::session::message::Role;

    /// Session wired to an in-memory connection; returns the outbound end
    fn connected_session() -> (ChatSession, mpsc::UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new();
        session.connection = Some(ChatConnection::from_sender(tx));
        session.handle_event(SessionEvent::Opened);
        (session, rx)
    }

    fn outbound_frames(rx: &mut mpsc::UnboundedReceiver<Command>) -> Vec<String> {
        let mut frames = Vec::new();
        while let Ok(command) = rx.try_recv() {
            if let Command::Send(text) = command {
                frames.push(text);
            }
        }
        frames
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = ChatSession::new();
        let b = ChatSession::new();
        assert_ne!(a.session_id(), b.session_id());
        assert!(!a.session_id().is_empty());
    }

    #[test]
    fn test_events_drive_readiness_and_transcript() {
        let mut session = ChatSession::new();
        assert!(!session.is_ready());

        session.handle_event(SessionEvent::Opened);
        assert!(session.is_ready());

        session.handle_event(SessionEvent::Reply("hi there".to_string()));
        session.handle_event(SessionEvent::Reply("still me".to_string()));

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, "hi there");
        assert_eq!(messages[1].content, "still me");

        session.handle_event(SessionEvent::Closed);
        assert!(!session.is_ready());
    }

    #[test]
    fn test_submit_appends_and_sends_literal_text() {
        let (mut session, mut rx) = connected_session();

        session.set_draft("  hello  ");
        assert_eq!(session.submit(), SubmitOutcome::Sent);

        // Raw untrimmed text, both in the transcript and on the wire
        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "  hello  ");
        assert_eq!(outbound_frames(&mut rx), vec!["  hello  "]);

        // Draft cleared on success
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn test_submit_whitespace_only_is_noop() {
        let (mut session, mut rx) = connected_session();

        session.set_draft("   \t  ");
        assert_eq!(session.submit(), SubmitOutcome::Ignored);

        assert!(session.transcript().is_empty());
        assert!(outbound_frames(&mut rx).is_empty());
        // Draft untouched
        assert_eq!(session.draft(), "   \t  ");
    }

    #[test]
    fn test_submit_before_open_is_noop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new();
        session.connection = Some(ChatConnection::from_sender(tx));

        session.set_draft("hello");
        assert_eq!(session.submit(), SubmitOutcome::Ignored);

        assert!(session.transcript().is_empty());
        assert!(outbound_frames(&mut rx).is_empty());
        assert_eq!(session.draft(), "hello");
    }

    #[test]
    fn test_submit_without_connection_is_noop() {
        let mut session = ChatSession::new();
        session.handle_event(SessionEvent::Opened);
        session.set_draft("hello");

        assert_eq!(session.submit(), SubmitOutcome::Ignored);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_submit_after_closed_is_noop() {
        let (mut session, mut rx) = connected_session();
        session.handle_event(SessionEvent::Closed);

        session.set_draft("hello");
        assert_eq!(session.submit(), SubmitOutcome::Ignored);
        assert!(outbound_frames(&mut rx).is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_user_message_and_draft() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new();
        session.connection = Some(ChatConnection::from_sender(tx));
        session.handle_event(SessionEvent::Opened);

        // Writer side gone: the send is rejected
        drop(rx);

        session.set_draft("hello");
        assert_eq!(session.submit(), SubmitOutcome::Failed);

        // The local append happened before the transport was consulted
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().last().unwrap().content, "hello");
        // Draft retained, readiness dropped
        assert_eq!(session.draft(), "hello");
        assert!(!session.is_ready());
    }

    #[test]
    fn test_interleaved_submissions_and_replies_keep_order() {
        let (mut session, mut rx) = connected_session();

        session.set_draft("hello");
        session.submit();
        session.handle_event(SessionEvent::Reply("hi there".to_string()));
        session.set_draft("tell me about Bicep");
        session.submit();
        session.handle_event(SessionEvent::Reply("gladly".to_string()));

        let roles: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            roles,
            vec![
                (Role::User, "hello"),
                (Role::Assistant, "hi there"),
                (Role::User, "tell me about Bicep"),
                (Role::Assistant, "gladly"),
            ]
        );
        assert_eq!(
            outbound_frames(&mut rx),
            vec!["hello", "tell me about Bicep"]
        );
    }

    #[tokio::test]
    async fn test_close_is_idempotent_through_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new();
        session.connection = Some(ChatConnection::from_sender(tx));
        session.handle_event(SessionEvent::Opened);

        session.close();
        session.close();

        assert!(!session.is_ready());
        assert!(matches!(rx.recv().await, Some(Command::Close)));
        drop(session);
        assert!(rx.recv().await.is_none());
    }
}
