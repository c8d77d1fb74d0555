// crates/access-gate-limitations/src/lib.rs
// ============================================================================
// Module: Access Gate Limitations
// Description: Built-in limitation types and registry utilities.
// Purpose: Provide zero-config limitation evaluators aligned with Access Gate core.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! This crate ships the built-in limitation types (subtree, section, owner,
//! content type) and a registry implementation that resolves limitation
//! identifiers with policy enforcement. Limitation types are deterministic
//! pure functions of their inputs and fail closed on malformed values.
//! Invariants:
//! - Limitation identifiers are resolved via [`LimitationRegistry`].
//! - Built-in types enforce strict value validation and fail closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod content_type;
pub mod owner;
pub mod registry;
pub mod section;
pub mod subtree;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content_type::CONTENT_TYPE_IDENTIFIER;
pub use content_type::ContentTypeLimitationType;
pub use owner::OWNER_IDENTIFIER;
pub use owner::OWNER_SELF_VALUE;
pub use owner::OwnerLimitationType;
pub use registry::BUILTIN_LIMITATION_IDENTIFIERS;
pub use registry::LimitationAccessPolicy;
pub use registry::LimitationRegistry;
pub use registry::RegistryError;
pub use registry::is_builtin_limitation_identifier;
pub use section::SECTION_IDENTIFIER;
pub use section::SectionLimitationType;
pub use subtree::SUBTREE_IDENTIFIER;
pub use subtree::SubtreeLimitationType;
