// crates/access-gate-config/src/lib.rs
// ============================================================================
// Module: Access Gate Config Library
// Description: Public API surface for Access Gate configuration.
// Purpose: Expose settings loading, validation, and engine wiring helpers.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! Configuration crate for Access Gate deployments. Settings are loaded
//! from TOML, validated fail-closed against hard limits, and converted into
//! the policy map and engine configuration the core engine consumes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AccessGateSettings;
pub use config::ConfigError;
pub use config::ensure_limitation_types_registered;
