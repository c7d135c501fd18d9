//! Regional endpoint table for the built-in providers.
//!
//! Data-first: every provider-specific string (environment variable names,
//! regional URLs, fallback URL) lives in [`REGIONAL_ENDPOINTS`] so the loader
//! and the provider clients read from a single place.

use crate::models::region::Region;

/// Environment variable selecting the deployment region.
pub const REGION_ENV: &str = "REGION";

/// Endpoint routing data for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalEndpoint {
    /// Provider name as used in `provider:model` identifiers
    pub provider: &'static str,
    /// Explicit base URL override variable
    pub base_url_env: &'static str,
    /// Credential variable read by the client
    pub api_key_env: &'static str,
    /// Base URL for [`Region::Prc`]
    pub prc: &'static str,
    /// Base URL for [`Region::International`]
    pub international: &'static str,
    /// Base URL the client falls back to when nothing else is configured
    pub default_base_url: &'static str,
}

impl RegionalEndpoint {
    pub fn url_for(&self, region: Region) -> &'static str {
        match region {
            Region::Prc => self.prc,
            Region::International => self.international,
        }
    }
}

pub const DASHSCOPE: RegionalEndpoint = RegionalEndpoint {
    provider: "dashscope",
    base_url_env: "DASHSCOPE_API_BASE",
    api_key_env: "DASHSCOPE_API_KEY",
    prc: "https://dashscope.aliyuncs.com/compatible-mode/v1",
    international: "https://dashscope-intl.aliyuncs.com/compatible-mode/v1",
    default_base_url: "https://dashscope-intl.aliyuncs.com/compatible-mode/v1",
};

pub const SILICONFLOW: RegionalEndpoint = RegionalEndpoint {
    provider: "siliconflow",
    base_url_env: "SILICONFLOW_API_BASE",
    api_key_env: "SILICONFLOW_API_KEY",
    prc: "https://api.siliconflow.cn/v1",
    international: "https://api.siliconflow.com/v1",
    default_base_url: "https://api.siliconflow.cn/v1",
};

/// Providers with region-aware endpoints.
///
/// Order matters: base URL resolution walks this table front to back and a
/// later match replaces the result of an earlier one.
pub const REGIONAL_ENDPOINTS: &[RegionalEndpoint] = &[DASHSCOPE, SILICONFLOW];

/// Look up the endpoint row for an exact provider name.
pub fn endpoint_for(provider: &str) -> Option<&'static RegionalEndpoint> {
    REGIONAL_ENDPOINTS.iter().find(|e| e.provider == provider)
}
