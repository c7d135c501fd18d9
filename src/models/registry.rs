//! Provider registry mapping provider names to model constructors.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serdes_ai_models::Model;
use tracing::{debug, info};

use super::options::ModelOptions;
use super::types::{LoadError, RegistryError};

/// Builds a chat model client for one provider.
pub trait ChatModelFactory: Send + Sync {
    /// Create a client for `model_name` (the part after `provider:`).
    fn create(&self, model_name: &str, options: &ModelOptions)
        -> Result<Arc<dyn Model>, LoadError>;
}

impl<F> ChatModelFactory for F
where
    F: Fn(&str, &ModelOptions) -> Result<Arc<dyn Model>, LoadError> + Send + Sync,
{
    fn create(
        &self,
        model_name: &str,
        options: &ModelOptions,
    ) -> Result<Arc<dyn Model>, LoadError> {
        self(model_name, options)
    }
}

/// A provider name paired with its model constructor.
#[derive(Clone)]
pub struct ProviderRegistration {
    pub provider: String,
    pub chat_model: Arc<dyn ChatModelFactory>,
}

impl ProviderRegistration {
    pub fn new(provider: impl Into<String>, chat_model: impl ChatModelFactory + 'static) -> Self {
        Self {
            provider: provider.into(),
            chat_model: Arc::new(chat_model),
        }
    }
}

impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// Registry of chat model providers.
///
/// Interior mutability lets the process-wide instance accept registrations
/// from any thread after initialization.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, Arc<dyn ChatModelFactory>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in providers.
    pub fn with_builtin_providers() -> Self {
        let registry = Self::new();
        {
            let mut providers = registry.providers.write();
            for registration in crate::providers::builtin_registrations() {
                providers.insert(registration.provider, registration.chat_model);
            }
        }
        registry
    }

    /// Register a provider. Names must be unique, non-empty and free of `:`.
    pub fn register(
        &self,
        provider: impl Into<String>,
        chat_model: Arc<dyn ChatModelFactory>,
    ) -> Result<(), RegistryError> {
        let provider = provider.into();
        if provider.is_empty() || provider.contains(':') {
            return Err(RegistryError::InvalidProviderName(provider));
        }

        let mut providers = self.providers.write();
        if providers.contains_key(&provider) {
            return Err(RegistryError::AlreadyRegistered(provider));
        }

        debug!(provider = %provider, "Registering model provider");
        providers.insert(provider, chat_model);
        Ok(())
    }

    /// Register several providers in order, stopping at the first failure.
    pub fn batch_register(
        &self,
        registrations: impl IntoIterator<Item = ProviderRegistration>,
    ) -> Result<(), RegistryError> {
        for registration in registrations {
            self.register(registration.provider, registration.chat_model)?;
        }
        Ok(())
    }

    /// Get the constructor for a provider.
    pub fn get(&self, provider: &str) -> Option<Arc<dyn ChatModelFactory>> {
        self.providers.read().get(provider).cloned()
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.providers.read().contains_key(provider)
    }

    /// Get all provider names as a sorted vector.
    pub fn providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Get the process-wide registry.
///
/// The built-in providers are registered on first access, exactly once.
pub fn global_registry() -> &'static ProviderRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let registry = ProviderRegistry::with_builtin_providers();
        info!(providers = ?registry.providers(), "Model providers registered");
        registry
    })
}
