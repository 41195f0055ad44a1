//! Canned-response support chat.

/// How long the onboarding badge stays up on a first visit.
pub const ONBOARDING_DURATION_MS: u32 = 5_000;

/// Delay before the bot answers.
pub const REPLY_DELAY_MS: u32 = 500;

pub const GREETING: &str = "Hello! How can I help you today?";

const HELLO_REPLY: &str = "Hello there! How can I assist you?";
const TICKET_REPLY: &str = "You can purchase tickets from the match details page.";
const MATCH_REPLY: &str = "You can find the list of upcoming matches on the home page.";
const FALLBACK_REPLY: &str = "I'm sorry, I don't understand. Can you please rephrase?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Transcript every chat starts with.
pub fn initial_transcript() -> Vec<ChatMessage> {
    vec![ChatMessage::bot(GREETING)]
}

/// Trimmed user input, or `None` when there is nothing to send.
pub fn accept_input(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Picks the canned answer for `input`. Rules are checked in order and the
/// first match wins.
pub fn bot_reply(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    let says_hi = lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "hi");
    if lower.contains("hello") || says_hi {
        HELLO_REPLY
    } else if lower.contains("ticket") {
        TICKET_REPLY
    } else if lower.contains("match") {
        MATCH_REPLY
    } else {
        FALLBACK_REPLY
    }
}
