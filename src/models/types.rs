//! Core error types for model loading.
//!
//! This module provides:
//! - `LoadError` - Errors raised while turning a `provider:model` name into a client
//! - `RegistryError` - Errors raised by the provider registry

use thiserror::Error;

/// Errors that can occur while loading a chat model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Malformed model name '{0}': expected 'provider:model'")]
    MalformedName(String),
    #[error("Unknown provider '{provider}' (registered: {})", .registered.join(", "))]
    UnknownProvider {
        provider: String,
        registered: Vec<String>,
    },
    #[error("No API key for {provider}: pass the api_key option or set {env_var}")]
    MissingApiKey {
        provider: String,
        env_var: String,
    },
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },
    #[error("Provider {provider} failed to build model: {message}")]
    Provider { provider: String, message: String },
}

/// Errors that can occur while registering providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Provider already registered: {0}")]
    AlreadyRegistered(String),
    #[error("Invalid provider name '{0}'")]
    InvalidProviderName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_lists_registered() {
        let err = LoadError::UnknownProvider {
            provider: "openai".to_string(),
            registered: vec!["dashscope".to_string(), "siliconflow".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'openai'"));
        assert!(msg.contains("dashscope, siliconflow"));
    }

    #[test]
    fn test_missing_api_key_mentions_env_var() {
        let err = LoadError::MissingApiKey {
            provider: "dashscope".to_string(),
            env_var: "DASHSCOPE_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("DASHSCOPE_API_KEY"));
    }
}
