// access-gate-core/src/lib.rs
// ============================================================================
// Module: Access Gate Core Library
// Description: Public API surface for the Access Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Access Gate core provides deterministic permission evaluation for a
//! content repository: role assignments and policies are resolved into
//! transient permission sets and evaluated against targets through
//! pluggable limitation types. It is backend-agnostic and integrates
//! through explicit interfaces rather than embedding into repository
//! services.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::LimitationError;
pub use interfaces::LimitationNotFoundError;
pub use interfaces::LimitationType;
pub use interfaces::LimitationTypeResolver;
pub use interfaces::RoleStore;
pub use interfaces::StoreError;
pub use interfaces::ValidationError;
pub use runtime::AccessError;
pub use runtime::AccessGate;
pub use runtime::AccessGateConfig;
pub use runtime::AuthoringError;
pub use runtime::DEFAULT_ANONYMOUS_USER_ID;
pub use runtime::EvaluationMode;
pub use runtime::LimitationValidationError;
pub use runtime::LimitationValidationFailure;
pub use runtime::PermissionEvaluator;
pub use runtime::RoleDomainMapper;
pub use runtime::Session;
pub use runtime::validate_limitations;
