use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Id of the greeting that seeds every fresh transcript.
pub const GREETING_ID: &str = "welcome";

pub const GREETING_TEXT: &str = "SYSTEM ONLINE. I am the portfolio's digital proxy. \
Ask me anything about technical expertise or experience.";

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    User,
    Assistant,
}

/// A finalized transcript entry.
///
/// Messages are never edited once created: the fields are private and only
/// exposed through read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    id: String,
    role: Role,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text.into())
    }

    pub fn greeting() -> Self {
        Self {
            id: GREETING_ID.to_string(),
            role: Role::Assistant,
            text: GREETING_TEXT.to_string(),
        }
    }

    fn new(role: Role, text: String) -> Self {
        let prefix = match role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            id: format!("{prefix}-{}", Uuid::new_v4()),
            role,
            text,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_role_prefix_and_are_unique() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert!(a.id().starts_with("user-"));
        assert_ne!(a.id(), b.id());
        assert!(Message::assistant("ok").id().starts_with("assistant-"));
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Message::greeting()).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        assert!(json.contains("\"id\":\"welcome\""));
    }
}
