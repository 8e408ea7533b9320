#[cfg(test)]
#[path = "options_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::ChatError;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// The Groq hosted models this app knows how to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
pub enum ModelName {
    #[strum(serialize = "mixtral-8x7b-32768")]
    Mixtral8x7b,
    #[strum(serialize = "llama3-8b-8192")]
    Llama3_8b,
}

impl ModelName {
    pub fn parse(text: String) -> Option<ModelName> {
        return ModelName::iter().find(|e| return e.to_string() == text);
    }
}

/// Accepted context window sizes, as the strings clap and the config file
/// validators see them.
pub fn window_size_values() -> Vec<String> {
    return (1..=10).map(|e| return e.to_string()).collect();
}

/// Per-turn snapshot of the tunable chat options. Read once as a turn starts
/// so that `/model` and `/window` changes only apply between turns.
#[derive(Debug)]
pub struct ChatOptions {
    pub model: ModelName,
    pub window_size: usize,
}

impl ChatOptions {
    /// Builds options from raw config values, rejecting anything a config
    /// file could have smuggled past the CLI validators.
    pub fn parse(model: String, window_size: String) -> Result<ChatOptions, ChatError> {
        let model = ModelName::parse(model.clone()).ok_or_else(|| {
            return ChatError::configuration(format!("{model} is not a supported model"));
        })?;

        let window_size = window_size.parse::<usize>().map_err(|_| {
            return ChatError::configuration(format!("{window_size} is not a valid window size"));
        })?;
        if !(1..=10).contains(&window_size) {
            return Err(ChatError::configuration(format!(
                "window size must be between 1 and 10, got {window_size}"
            )));
        }

        return Ok(ChatOptions { model, window_size });
    }

    pub fn from_config() -> Result<ChatOptions, ChatError> {
        return ChatOptions::parse(
            Config::get(ConfigKey::Model),
            Config::get(ConfigKey::WindowSize),
        );
    }
}
