//! Model resolution and creation.
//!
//! Provides `load_chat_model()` which turns a `provider:model` name into a
//! concrete model client, injecting a region-aware base URL for providers
//! listed in the regional endpoint table.
//!
//! # Base URL Resolution
//! For every endpoint row whose provider name occurs in the model name
//! (substring match, table order):
//! 1. The provider's base URL variable (e.g. `DASHSCOPE_API_BASE`)
//! 2. Otherwise the URL for the normalized `REGION`, if any
//!
//! Each matching row replaces the previous row's result, so a name matching
//! both providers ends up with the later row's outcome even when that outcome
//! is "nothing".

use std::sync::Arc;

use serdes_ai_models::Model;
use tracing::{debug, info, warn};

use crate::config::{REGIONAL_ENDPOINTS, REGION_ENV};

use super::options::{ModelOptions, BASE_URL};
use super::region::normalize_region;
use super::registry::{global_registry, ProviderRegistry};
use super::types::LoadError;

/// Split a `provider:model` name at the first colon.
pub fn parse_model_name(fully_specified_name: &str) -> Result<(&str, &str), LoadError> {
    match fully_specified_name.split_once(':') {
        Some((provider, model)) if !provider.is_empty() && !model.is_empty() => {
            Ok((provider, model))
        }
        _ => Err(LoadError::MalformedName(fully_specified_name.to_string())),
    }
}

/// Resolve the base URL for a model name against the process environment.
pub fn resolve_base_url(fully_specified_name: &str) -> Option<String> {
    resolve_base_url_with(fully_specified_name, |key| std::env::var(key).ok())
}

/// Resolve the base URL for a model name using `lookup` to read variables.
pub fn resolve_base_url_with<F>(fully_specified_name: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let region = lookup(REGION_ENV);
    let mut base_url = None;

    for endpoint in REGIONAL_ENDPOINTS {
        if !fully_specified_name.contains(endpoint.provider) {
            continue;
        }

        base_url = lookup(endpoint.base_url_env);
        if base_url.is_none() {
            if let Some(region) = region.as_deref().filter(|r| !r.is_empty()) {
                match normalize_region(region) {
                    Some(normalized) => {
                        base_url = Some(endpoint.url_for(normalized).to_string());
                    }
                    None => {
                        warn!(region = %region, "Ignoring unrecognized {}", REGION_ENV);
                    }
                }
            }
        }

        debug!(
            provider = %endpoint.provider,
            base_url = ?base_url,
            "Resolved regional base URL"
        );
    }

    base_url
}

/// Inject the resolved base URL into `options`.
///
/// A resolved, non-empty URL overwrites any caller-supplied `base_url`;
/// otherwise the options are returned unchanged.
pub fn apply_base_url<F>(
    fully_specified_name: &str,
    mut options: ModelOptions,
    lookup: F,
) -> ModelOptions
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = resolve_base_url_with(fully_specified_name, lookup) {
        if !base_url.is_empty() {
            options.set(BASE_URL, base_url);
        }
    }
    options
}

/// Load a registered model by name without any base URL handling.
///
/// Errors from the provider's constructor are returned unchanged.
pub fn load_registered(
    registry: &ProviderRegistry,
    fully_specified_name: &str,
    options: &ModelOptions,
) -> Result<Arc<dyn Model>, LoadError> {
    let (provider, model_name) = parse_model_name(fully_specified_name)?;

    let factory = registry
        .get(provider)
        .ok_or_else(|| LoadError::UnknownProvider {
            provider: provider.to_string(),
            registered: registry.providers(),
        })?;

    debug!(provider = %provider, model = %model_name, "Creating chat model");
    factory.create(model_name, options)
}

/// Load a chat model from a fully specified `provider:model` name.
///
/// Uses the global registry and reads `REGION` and the providers' base URL
/// variables from the process environment.
pub fn load_chat_model(
    fully_specified_name: &str,
    options: ModelOptions,
) -> Result<Arc<dyn Model>, LoadError> {
    load_chat_model_in(
        global_registry(),
        fully_specified_name,
        options,
        |key| std::env::var(key).ok(),
    )
}

/// [`load_chat_model`] against an explicit registry and variable lookup.
pub fn load_chat_model_in<F>(
    registry: &ProviderRegistry,
    fully_specified_name: &str,
    options: ModelOptions,
    lookup: F,
) -> Result<Arc<dyn Model>, LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    debug!(model_name = %fully_specified_name, "load_chat_model called");

    let options = apply_base_url(fully_specified_name, options, lookup);
    let model = load_registered(registry, fully_specified_name, &options)?;

    info!(
        model_name = %fully_specified_name,
        model_id = %model.identifier(),
        "Model ready"
    );
    Ok(model)
}
