//! Core types: user, chat, message, reply target and reply payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names, bot flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_bot: bool,
}

impl User {
    /// How the user is addressed in replies: `@username` when known, otherwise the first name.
    pub fn mention(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(username), _) => format!("@{}", username),
            (None, Some(first_name)) => first_name.clone(),
            (None, None) => format!("user {}", self.id),
        }
    }
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// An inbound text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Handle used to address replies to this message.
    pub fn reference(&self) -> MessageRef {
        MessageRef {
            chat: self.chat.clone(),
            message_id: self.id.clone(),
        }
    }
}

/// Opaque address of the message a reply answers. Only the transport interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat: Chat,
    pub message_id: String,
}

/// A handler's output, addressed to the message that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub target: MessageRef,
    pub payload: ReplyPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReplyPayload {
    Text(String),
    Rich(RichContent),
}

/// One titled block inside [`RichContent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Structured reply: the transport decides how (or whether) to render it richly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// 0xRRGGBB accent colour.
    pub color: Option<u32>,
    pub fields: Vec<RichField>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl RichContent {
    pub const RED: u32 = 0xE74C3C;
    pub const GREEN: u32 = 0x2ECC71;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(RichField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Flattens the content to plain text for transports without embeds. Sections are separated by blank lines.
    pub fn to_plain_text(&self) -> String {
        let mut sections = Vec::new();
        if let Some(title) = &self.title {
            sections.push(title.clone());
        }
        if let Some(description) = &self.description {
            sections.push(description.clone());
        }
        for field in &self.fields {
            sections.push(format!("{}\n{}", field.name, field.value));
        }
        if let Some(url) = &self.url {
            sections.push(url.clone());
        }
        match (&self.footer, &self.timestamp) {
            (Some(footer), Some(ts)) => {
                sections.push(format!("{} ({})", footer, ts.format("%Y-%m-%d %H:%M UTC")))
            }
            (Some(footer), None) => sections.push(footer.clone()),
            (None, Some(ts)) => sections.push(ts.format("%Y-%m-%d %H:%M UTC").to_string()),
            (None, None) => {}
        }
        sections.join("\n\n")
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
