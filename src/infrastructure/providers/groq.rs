#[cfg(test)]
#[path = "groq_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatError;
use crate::domain::models::Exchange;
use crate::domain::models::ModelName;
use crate::domain::models::Provider;
use crate::domain::models::ProviderReply;
use crate::domain::models::TokenUsage;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<MessageRequest>,
    stream: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionMessageResponse {
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: CompletionMessageResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoiceResponse>,
    usage: Option<TokenUsage>,
}

pub struct Groq {
    url: String,
    token: String,
    health_check_timeout: String,
    request_timeout: String,
}

impl Default for Groq {
    fn default() -> Groq {
        return Groq {
            url: Config::get(ConfigKey::GroqURL),
            token: Config::get(ConfigKey::GroqToken),
            health_check_timeout: Config::get(ConfigKey::HealthCheckTimeout),
            request_timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

#[async_trait]
impl Provider for Groq {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<(), ChatError> {
        if self.url.is_empty() {
            return Err(ChatError::configuration("Groq URL is not defined"));
        }
        if self.token.is_empty() {
            return Err(ChatError::configuration(
                "Groq token is not defined. Set GROQ_API_KEY or pass --groq-token",
            ));
        }

        let timeout = self.health_check_timeout.parse::<u64>().map_err(|_| {
            return ChatError::configuration(format!(
                "{} is not a valid health check timeout",
                self.health_check_timeout
            ));
        })?;

        let res = reqwest::Client::new()
            .get(format!("{url}/openai/v1/models", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .timeout(Duration::from_millis(timeout))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Groq is not reachable");
            return Err(ChatError::provider_request("Groq is not reachable"));
        }

        let status = res.unwrap().status().as_u16();
        if status == 401 || status == 403 {
            tracing::error!(status = status, "Groq rejected the configured token");
            return Err(ChatError::configuration("Groq rejected the configured token"));
        }
        if status >= 400 {
            tracing::error!(status = status, "Groq health check failed");
            return Err(ChatError::provider_request("Groq health check failed"));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn generate(
        &self,
        model: ModelName,
        context: &[Exchange],
        text: &str,
    ) -> Result<ProviderReply, ChatError> {
        let timeout = self.request_timeout.parse::<u64>().map_err(|_| {
            return ChatError::configuration(format!(
                "{} is not a valid request timeout",
                self.request_timeout
            ));
        })?;

        let mut messages: Vec<MessageRequest> = Vec::with_capacity(context.len() * 2 + 1);
        for exchange in context {
            messages.push(MessageRequest {
                role: "user".to_string(),
                content: exchange.human.to_string(),
            });
            messages.push(MessageRequest {
                role: "assistant".to_string(),
                content: exchange.ai.to_string(),
            });
        }
        messages.push(MessageRequest {
            role: "user".to_string(),
            content: text.to_string(),
        });

        let req = CompletionRequest {
            model: model.to_string(),
            messages,
            stream: false,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/openai/v1/chat/completions", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .timeout(Duration::from_millis(timeout))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Groq"
            );
            return Err(ChatError::provider_request(format!(
                "Groq request failed with status {}",
                res.status().as_u16()
            )));
        }

        let body = res.json::<CompletionResponse>().await.map_err(|err| {
            return ChatError::provider_request(format!("Groq returned an unreadable reply: {err}"));
        })?;
        tracing::debug!(body = ?body, "Completion response");

        let choice = body.choices.first().ok_or_else(|| {
            return ChatError::provider_request("Groq returned no choices");
        })?;

        return Ok(ProviderReply {
            text: choice.message.content.to_string(),
            usage: body.usage,
        });
    }
}
