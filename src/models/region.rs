//! Deployment region normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical deployment regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Mainland China endpoints
    Prc,
    /// Global endpoints
    International,
}

/// Returned by `Region::from_str` for unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized region '{0}' (expected prc, cn, international or en)")]
pub struct RegionError(pub String);

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Prc => "prc",
            Region::International => "international",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_region(s).ok_or_else(|| RegionError(s.to_string()))
    }
}

/// Normalize region aliases to a canonical region.
///
/// Matching is case-insensitive: `prc`/`cn` map to [`Region::Prc`] and
/// `international`/`en` map to [`Region::International`]. Anything else,
/// including the empty string, yields `None`.
pub fn normalize_region(region: &str) -> Option<Region> {
    match region.to_lowercase().as_str() {
        "prc" | "cn" => Some(Region::Prc),
        "international" | "en" => Some(Region::International),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_region("PRC"), Some(Region::Prc));
        assert_eq!(normalize_region("cn"), Some(Region::Prc));
        assert_eq!(normalize_region("CN"), Some(Region::Prc));
        assert_eq!(normalize_region("En"), Some(Region::International));
        assert_eq!(
            normalize_region("International"),
            Some(Region::International)
        );
    }

    #[test]
    fn test_normalize_invalid() {
        assert_eq!(normalize_region(""), None);
        assert_eq!(normalize_region("xx"), None);
        // No trimming: surrounding whitespace is not an alias
        assert_eq!(normalize_region(" cn"), None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Region::Prc.to_string(), "prc");
        assert_eq!(Region::International.to_string(), "international");
        assert_eq!("en".parse::<Region>(), Ok(Region::International));
        assert!("mars".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Region::International).unwrap();
        assert_eq!(json, "\"international\"");
        let parsed: Region = serde_json::from_str("\"prc\"").unwrap();
        assert_eq!(parsed, Region::Prc);
    }
}
