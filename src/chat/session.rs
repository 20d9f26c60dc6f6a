use tracing::debug;

use super::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Transcript plus a single in-flight slot. Every request gets a new
/// generation; only the reply for the pending generation is accepted.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    generation: u64,
    pending: Option<u64>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING)],
            generation: 0,
            pending: None,
        }
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit(&mut self, input: &str) -> Option<u64> {
        let text = input.trim();
        if text.is_empty() || self.pending.is_some() {
            return None;
        }

        self.messages.push(ChatMessage::new(Role::User, text));
        self.generation += 1;
        self.pending = Some(self.generation);
        Some(self.generation)
    }

    pub fn receive(&mut self, generation: u64, reply: String) -> bool {
        if self.pending != Some(generation) {
            debug!(generation, pending = ?self.pending, "chat_reply_dropped");
            return false;
        }

        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        self.pending = None;
        true
    }

    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::default();
        // Keep counting so a reply for the abandoned request can never match.
        self.generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_pending());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), None);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn second_message_waits_for_the_first_reply() {
        let mut session = ChatSession::default();
        let first = session.submit("  Hello  ").unwrap();
        assert_eq!(session.messages()[1].text, "Hello");
        assert_eq!(session.submit("Again"), None);
        assert!(session.is_pending());

        assert!(session.receive(first, "Hi there".to_string()));
        assert!(!session.is_pending());
        let second = session.submit("Again").unwrap();
        assert!(second > first);
    }

    #[test]
    fn stale_replies_are_dropped() {
        let mut session = ChatSession::default();
        let first = session.submit("Hello").unwrap();
        session.reset();
        let second = session.submit("Fresh start").unwrap();

        assert!(!session.receive(first, "late".to_string()));
        assert!(session.receive(second, "current".to_string()));
        let texts: Vec<_> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "Fresh start", "current"]);
    }

    #[test]
    fn duplicate_reply_is_dropped() {
        let mut session = ChatSession::default();
        let id = session.submit("Hello").unwrap();
        assert!(session.receive(id, "one".to_string()));
        assert!(!session.receive(id, "two".to_string()));
        assert_eq!(session.messages().len(), 3);
    }
}
