#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

use super::memory::MemoryWindow;
use crate::domain::models::ChatError;
use crate::domain::models::ChatOptions;
use crate::domain::models::Exchange;
use crate::domain::models::History;
use crate::domain::models::ProviderBox;
use crate::domain::models::TokenUsage;

/// One completed conversation turn. The caller owns the history and decides
/// when to append the exchange; `usage` is provider metadata for display.
#[derive(Debug)]
pub struct Turn {
    pub exchange: Exchange,
    pub usage: Option<TokenUsage>,
}

pub struct Orchestrator {}

impl Orchestrator {
    /// Runs a single turn end to end: validates the prompt, assembles the
    /// bounded context window, and makes exactly one provider call. On any
    /// error the history is left exactly as it was and no exchange exists for
    /// the failed turn.
    pub async fn submit(
        provider: &ProviderBox,
        text: &str,
        options: &ChatOptions,
        history: &History,
    ) -> Result<Turn, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::validation("your message is empty"));
        }

        let context = MemoryWindow::build(history, options.window_size);
        let reply = provider.generate(options.model, context, text).await?;

        return Ok(Turn {
            exchange: Exchange::new(text, &reply.text),
            usage: reply.usage,
        });
    }
}
