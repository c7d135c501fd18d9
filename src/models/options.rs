//! Open keyword options forwarded to provider constructors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::LoadError;

/// Option key carrying the endpoint root.
pub const BASE_URL: &str = "base_url";
/// Option key carrying the provider credential.
pub const API_KEY: &str = "api_key";

/// Keyword options for a model constructor.
///
/// The bag is deliberately open: keys are interpreted by the provider that
/// receives them, and unrecognized keys are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelOptions(Map<String, Value>);

impl ModelOptions {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get a string option.
    ///
    /// Returns `InvalidOption` when the key is present but holds a non-string
    /// value. `null` reads as absent.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, LoadError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(LoadError::InvalidOption {
                key: key.to_string(),
                reason: format!("expected a string, got {}", other),
            }),
        }
    }

    pub fn base_url(&self) -> Result<Option<&str>, LoadError> {
        self.get_str(BASE_URL)
    }

    pub fn api_key(&self) -> Result<Option<&str>, LoadError> {
        self.get_str(API_KEY)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.set(BASE_URL, base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.set(API_KEY, api_key.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ModelOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ModelOptions> for Map<String, Value> {
    fn from(options: ModelOptions) -> Self {
        options.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ModelOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
