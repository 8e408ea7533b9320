use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use super::ChatError;
use super::Exchange;
use super::ModelName;

/// Token counts reported by the provider alongside a reply. Display only,
/// nothing downstream depends on them.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug)]
pub struct ProviderReply {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

#[async_trait]
pub trait Provider {
    /// Used at startup to verify credentials and reachability before the
    /// first conversation turn.
    async fn health_check(&self) -> Result<(), ChatError>;

    /// Requests a single completion from the provider. `context` holds the
    /// bounded window of recent exchanges, oldest first, and `text` is the
    /// new prompt. Implementations make exactly one request and never retry.
    async fn generate(
        &self,
        model: ModelName,
        context: &[Exchange],
        text: &str,
    ) -> Result<ProviderReply, ChatError>;
}

pub type ProviderBox = Box<dyn Provider + Send + Sync>;
