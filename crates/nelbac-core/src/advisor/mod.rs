//! AI advisor chat: session, transcript, and generative-text providers.
//!
//! One outbound request/response cycle per user message, a fixed
//! fallback string on failure, no retry, no streaming, no cancellation.

pub mod providers;
pub mod session;

pub use providers::{build_provider, AdvisorProvider, GeminiProvider, OpenAiProvider};
pub use session::AdvisorSession;

use serde::{Deserialize, Serialize};

/// Greeting shown when the transcript is empty.
pub const WELCOME_MESSAGE: &str =
    "Systems check complete. I am the Nelbac AI Advisor. How can I assist with your \
     infrastructure today?";

/// Reply appended when the provider call fails.
pub const FALLBACK_REPLY: &str =
    "The neural link is currently unstable. Please try again in a moment.";

/// Reply after the transcript is cleared.
pub const CLEARED_MESSAGE: &str = "Memory buffer cleared. System ready for new input.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Advisor,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Advisor => "advisor",
        }
    }

    pub fn parse_role(s: &str) -> Self {
        match s {
            "user" => ChatRole::User,
            _ => ChatRole::Advisor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn advisor(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Advisor,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_text() {
        assert_eq!(ChatRole::parse_role(ChatRole::User.as_str()), ChatRole::User);
        assert_eq!(
            ChatRole::parse_role(ChatRole::Advisor.as_str()),
            ChatRole::Advisor
        );
    }

    #[test]
    fn unknown_role_text_falls_back_to_advisor() {
        assert_eq!(ChatRole::parse_role("assistant"), ChatRole::Advisor);
    }
}
