//! Reply extraction: structured provider reply → plain text.

use crate::error::{TranslateError, TranslateResult};
use crate::provider::types::ChatCompletionResponse;

/// Extracts the textual payload from a structured reply.
pub struct ResponseParser;

impl ResponseParser {
    /// Return the first choice's message content verbatim.
    ///
    /// All other reply fields (usage, model, finish reason) are discarded.
    /// Fails with [`TranslateError::MalformedReply`] when the reply carries
    /// no choices or the choice has no content field.
    pub fn extract_text(response: &ChatCompletionResponse) -> TranslateResult<String> {
        let choice = response
            .choices
            .first()
            .ok_or_else(|| TranslateError::malformed_reply("No choices in reply"))?;

        choice
            .message
            .content
            .clone()
            .ok_or_else(|| TranslateError::malformed_reply("Reply choice has no content field"))
    }
}
