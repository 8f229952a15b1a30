use crate::models::chat::{ ChatMessage, ROLE_ASSISTANT, ROLE_USER };

/// First message of every session, shown before any user turn.
pub const GREETING: &str = "Hello! I'm a SQL assistant. Ask me anything about your database.";

/// Conversation history for one session. Held only in memory and discarded
/// with the session.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Renders the history for interpolation into a prompt, one
    /// `Role: content` line per message.
    pub fn format_for_prompt(&self) -> String {
        let mut result = String::new();
        for msg in &self.messages {
            let role_display = match msg.role.as_str() {
                ROLE_USER => "User",
                ROLE_ASSISTANT => "Assistant",
                other => other,
            };
            result.push_str(&format!("{}: {}\n", role_display, msg.content));
        }
        result
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_single_assistant_greeting() {
        let history = ChatHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.messages()[0].role, ROLE_ASSISTANT);
        assert_eq!(history.messages()[0].content, GREETING);
    }

    #[test]
    fn test_length_is_one_plus_two_per_turn() {
        let mut history = ChatHistory::new();
        for turn in 1..=3 {
            history.push_user(&format!("question {}", turn));
            history.push_assistant(&format!("answer {}", turn));
            assert_eq!(history.len(), 1 + 2 * turn);
        }
    }

    #[test]
    fn test_turns_alternate_user_then_assistant() {
        let mut history = ChatHistory::new();
        history.push_user("q1");
        history.push_assistant("a1");
        history.push_user("q2");
        history.push_assistant("a2");

        let roles: Vec<&str> = history
            .messages()
            .iter()
            .map(|m| m.role.as_str())
            .collect();
        assert_eq!(
            roles,
            vec![ROLE_ASSISTANT, ROLE_USER, ROLE_ASSISTANT, ROLE_USER, ROLE_ASSISTANT]
        );
    }

    #[test]
    fn test_format_for_prompt_labels_roles() {
        let mut history = ChatHistory::new();
        history.push_user("How many products are there?");

        let rendered = history.format_for_prompt();
        assert!(rendered.starts_with(&format!("Assistant: {}\n", GREETING)));
        assert!(rendered.ends_with("User: How many products are there?\n"));
    }
}
