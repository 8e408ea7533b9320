#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use thiserror::Error;

/// Failure taxonomy for a chat session.
///
/// `Configuration` failures are fatal at startup. `ProviderRequest` failures
/// drop the current turn and leave the history untouched so the prompt can be
/// resubmitted. `Validation` failures reject input before any provider call.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider request failed: {0}")]
    ProviderRequest(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ChatError {
    pub fn configuration(message: impl Into<String>) -> ChatError {
        return ChatError::Configuration(message.into());
    }

    pub fn provider_request(message: impl Into<String>) -> ChatError {
        return ChatError::ProviderRequest(message.into());
    }

    pub fn validation(message: impl Into<String>) -> ChatError {
        return ChatError::Validation(message.into());
    }

    pub fn is_configuration(&self) -> bool {
        return matches!(self, ChatError::Configuration(_));
    }

    pub fn is_provider_request(&self) -> bool {
        return matches!(self, ChatError::ProviderRequest(_));
    }

    pub fn is_validation(&self) -> bool {
        return matches!(self, ChatError::Validation(_));
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> ChatError {
        if err.is_timeout() {
            return ChatError::ProviderRequest(format!("timed out: {err}"));
        }
        return ChatError::ProviderRequest(err.to_string());
    }
}
