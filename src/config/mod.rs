//! Configuration management.
//!
//! All configuration comes from the environment; see [`endpoints`] for the
//! variables each provider reads.

pub mod endpoints;

pub use endpoints::{endpoint_for, RegionalEndpoint, REGIONAL_ENDPOINTS, REGION_ENV};
