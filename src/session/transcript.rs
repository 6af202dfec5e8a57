//! Conversation Transcript
//!
//! Append-only, oldest first. Entries are never reordered, mutated, or
//! deleted; the whole transcript is discarded when the session ends.

use super::message::Message;

/// Ordered sequence of messages for one session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the transcript
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::message::Role;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("second"));
        transcript.push(Message::user("third"));

        let contents: Vec<_> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_roles_preserved() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello"));
        transcript.push(Message::assistant("hi there"));

        assert_eq!(transcript.messages()[0].role, Role::User);
        assert_eq!(transcript.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn test_len_and_last() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());

        transcript.push(Message::user("one"));
        transcript.push(Message::user("two"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last().unwrap().content, "two");
    }
}
