//! Model providers, region handling, and loading.
//!
//! This module handles:
//! - Normalizing deployment regions
//! - The provider registry and its built-in providers
//! - Resolving `provider:model` names into model clients

pub mod loader;
pub mod options;
pub mod region;
pub mod registry;
pub mod types;

pub use loader::{
    apply_base_url, load_chat_model, load_chat_model_in, load_registered, parse_model_name,
    resolve_base_url, resolve_base_url_with,
};
pub use options::ModelOptions;
pub use region::{normalize_region, Region, RegionError};
pub use registry::{global_registry, ChatModelFactory, ProviderRegistration, ProviderRegistry};
pub use types::{LoadError, RegistryError};
