//! OpenAI-compatible chat clients for providers in the regional endpoint table.

use std::sync::Arc;

use serdes_ai_models::{openai::OpenAIChatModel, Model};
use tracing::{debug, info};

use crate::config::RegionalEndpoint;
use crate::models::options::{ModelOptions, API_KEY, BASE_URL};
use crate::models::registry::ChatModelFactory;
use crate::models::LoadError;

/// Constructor for a provider that speaks the OpenAI chat completions API.
#[derive(Debug, Clone, Copy)]
pub struct OpenAiCompatibleProvider {
    endpoint: &'static RegionalEndpoint,
}

impl OpenAiCompatibleProvider {
    pub fn new(endpoint: &'static RegionalEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn provider(&self) -> &'static str {
        self.endpoint.provider
    }

    /// Base URL the client will use.
    ///
    /// Resolution order: `base_url` option, the provider's base URL
    /// variable, then the provider default.
    pub fn effective_base_url(&self, options: &ModelOptions) -> Result<String, LoadError> {
        if let Some(url) = options.base_url()? {
            return Ok(url.to_string());
        }
        if let Some(url) = std::env::var(self.endpoint.base_url_env)
            .ok()
            .filter(|u| !u.is_empty())
        {
            return Ok(url);
        }
        Ok(self.endpoint.default_base_url.to_string())
    }

    /// API key the client will use.
    ///
    /// The `api_key` option may reference environment variables with `$VAR`
    /// or `${VAR}`; without the option the provider's key variable is read.
    pub fn resolve_api_key(&self, options: &ModelOptions) -> Result<String, LoadError> {
        if let Some(template) = options.api_key()? {
            return shellexpand::env(template)
                .map(|s| s.into_owned())
                .map_err(|e| LoadError::EnvVarNotFound(e.var_name));
        }

        std::env::var(self.endpoint.api_key_env).map_err(|_| LoadError::MissingApiKey {
            provider: self.endpoint.provider.to_string(),
            env_var: self.endpoint.api_key_env.to_string(),
        })
    }
}

impl ChatModelFactory for OpenAiCompatibleProvider {
    fn create(
        &self,
        model_name: &str,
        options: &ModelOptions,
    ) -> Result<Arc<dyn Model>, LoadError> {
        let api_key = self.resolve_api_key(options)?;
        let base_url = self.effective_base_url(options)?;

        for key in options.keys().filter(|k| *k != API_KEY && *k != BASE_URL) {
            debug!(
                provider = %self.endpoint.provider,
                option = %key,
                "Ignoring option not used by OpenAI-compatible client"
            );
        }

        let model = OpenAIChatModel::new(model_name, api_key).with_base_url(&base_url);

        info!(
            provider = %self.endpoint.provider,
            model_id = %model.identifier(),
            endpoint = %base_url,
            "Chat model ready"
        );
        Ok(Arc::new(model))
    }
}
