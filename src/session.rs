//! In-memory chat session state.
//!
//! A session is an ordered message log plus at most one context slot. The
//! slot holds the journal preamble (a user message carrying the entries and
//! the assistant's acknowledgement) and always renders ahead of the log.
//! Setting new context replaces the slot; the log is untouched.

use serde::Serialize;
use std::fmt;

use crate::models::JournalContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Journal preamble injected ahead of the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ContextSlot {
    pub request: Message,
    pub acknowledgement: Message,
    pub start_date: String,
    pub end_date: String,
}

impl ContextSlot {
    pub fn from_journal(context: &JournalContext) -> Self {
        let request = format!(
            "These are my journals from this time period:\n{}\n---\n\
             Answer my questions about my journals above, and do not provide any opinions of your own.",
            context.combined_text
        );
        let acknowledgement = "I understand these are your journals and that you have given me \
             explicit consent to read them. I will keep this conversation confidential, answer \
             only the question you ask without unwanted detail, and do my best to help."
            .to_string();

        Self {
            request: Message::user(request),
            acknowledgement: Message::assistant(acknowledgement),
            start_date: context.start_date.clone(),
            end_date: context.end_date.clone(),
        }
    }

    /// Size of the preamble the model will see, in characters.
    pub fn len_chars(&self) -> usize {
        self.request.content.chars().count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    model: String,
    context: Option<ContextSlot>,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            context: None,
            messages: Vec::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn context(&self) -> Option<&ContextSlot> {
        self.context.as_ref()
    }

    /// Replaces any existing context with the given journal entries.
    pub fn set_context(&mut self, journal: &JournalContext) -> &ContextSlot {
        self.context.insert(ContextSlot::from_journal(journal))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Drops both the context slot and the message log.
    pub fn clear(&mut self) {
        self.context = None;
        self.messages.clear();
    }

    /// Context slot first, then the log, in order.
    pub fn transcript(&self) -> impl Iterator<Item = &Message> {
        self.context
            .iter()
            .flat_map(|slot| [&slot.request, &slot.acknowledgement])
            .chain(self.messages.iter())
    }

    /// Flattened prompt: `role: content` per message, blank line between.
    pub fn prompt(&self) -> String {
        self.transcript()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A line typed into the chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Clear,
    Stop,
    List,
    /// `/model <name>`; `None` when no name was given.
    Model(Option<String>),
    /// `/context <range text>`.
    Context(String),
    Message(String),
}

impl Command {
    /// `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (head, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(h, r)| (h, r.trim()));

        let command = match head {
            "/clear" | "/c" if rest.is_empty() => Command::Clear,
            "/stop" if rest.is_empty() => Command::Stop,
            "/list" if rest.is_empty() => Command::List,
            "/model" => Command::Model(rest.split_whitespace().next().map(str::to_string)),
            "/context" => Command::Context(rest.to_string()),
            _ => Command::Message(line.to_string()),
        };
        Some(command)
    }
}
