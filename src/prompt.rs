//! Prompt rendering for the translation pipeline.
//!
//! A [`PromptTemplate`] turns the caller's `(language, text)` pair into the
//! fixed two-message chat prompt sent upstream. Rendering is total and
//! deterministic: any strings are accepted, including empty ones, and no
//! language validation is performed.

use serde::{Deserialize, Serialize};

/// Instruction template used when none is supplied explicitly.
pub const DEFAULT_SYSTEM_TEMPLATE: &str = "Translate the following into {language}:";

/// Placeholder substituted with the target language at render time.
const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Message roles sent to the chat-completions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Template for the system instruction of the translation prompt.
///
/// Holds the instruction with a `{language}` placeholder; [`render`](Self::render)
/// substitutes the target language and pairs the instruction with the source
/// text as a user message.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system_template: String,
}

impl PromptTemplate {
    /// Create a template from a custom system instruction.
    ///
    /// Occurrences of `{language}` in `system_template` are replaced at
    /// render time.
    pub fn new(system_template: impl Into<String>) -> Self {
        Self {
            system_template: system_template.into(),
        }
    }

    /// Render the two-message prompt: `[system, user]`, always in that order.
    ///
    /// The user message carries `text` unchanged.
    pub fn render(&self, language: &str, text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_template.replace(LANGUAGE_PLACEHOLDER, language)),
            ChatMessage::user(text),
        ]
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_TEMPLATE)
    }
}
