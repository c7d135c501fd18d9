//! Built-in chat model providers.
//!
//! DashScope and SiliconFlow both expose OpenAI-compatible endpoints, so each
//! is an [`OpenAiCompatibleProvider`] bound to its row of the endpoint table.

mod openai_compatible;

pub use openai_compatible::OpenAiCompatibleProvider;

use crate::config::endpoints::{DASHSCOPE, SILICONFLOW};
use crate::models::registry::ProviderRegistration;

/// DashScope (Alibaba Cloud Model Studio) client constructor.
pub fn dashscope() -> OpenAiCompatibleProvider {
    OpenAiCompatibleProvider::new(&DASHSCOPE)
}

/// SiliconFlow client constructor.
pub fn siliconflow() -> OpenAiCompatibleProvider {
    OpenAiCompatibleProvider::new(&SILICONFLOW)
}

/// Registrations installed into the global registry.
pub fn builtin_registrations() -> Vec<ProviderRegistration> {
    vec![
        ProviderRegistration::new("dashscope", dashscope()),
        ProviderRegistration::new("siliconflow", siliconflow()),
    ]
}
