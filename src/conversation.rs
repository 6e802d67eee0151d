//! Message records and the append-only conversation log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One row of the conversation. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    /// Raw user text, kept only when `content` differs from it.
    #[serde(rename = "original", default, skip_serializing_if = "Option::is_none")]
    original_text: Option<String>,
    #[serde(rename = "converted", default)]
    was_converted: bool,
}

impl Message {
    /// User message shown exactly as typed.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            original_text: None,
            was_converted: false,
        }
    }

    /// User message rewritten into another script.
    pub fn converted(content: impl Into<String>, original: impl Into<String>) -> Self {
        let content = content.into();
        let original = original.into();
        let original_text = (content != original).then_some(original);
        Self {
            role: Role::User,
            content,
            original_text,
            was_converted: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: text.into(),
            original_text: None,
            was_converted: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn original_text(&self) -> Option<&str> {
        self.original_text.as_deref()
    }

    pub fn was_converted(&self) -> bool {
        self.was_converted
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered, append-only list of messages for one session.
///
/// Serializes as a bare JSON array so a shell can hand it back on the next
/// submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn: the user's message, then the bot's reply.
    pub fn push_turn(&mut self, user: Message, bot: Message) {
        debug_assert_eq!(user.role, Role::User);
        debug_assert_eq!(bot.role, Role::Bot);
        self.messages.push(user);
        self.messages.push(bot);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of completed turns.
    pub fn turns(&self) -> usize {
        self.messages.len() / 2
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
