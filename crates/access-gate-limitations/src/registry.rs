// crates/access-gate-limitations/src/registry.rs
// ============================================================================
// Module: Limitation Type Registry
// Description: Registry for built-in and external limitation types.
// Purpose: Resolve limitation identifiers with access-policy checks.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! The limitation registry resolves limitation identifiers to their
//! evaluator implementations and enforces allowlist and denylist policy. It
//! implements the core [`access_gate_core::LimitationTypeResolver`]
//! interface for seamless integration with the engine. A blocked identifier
//! resolves exactly like an unregistered one, so policy cannot be probed
//! through error differences.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use access_gate_core::LimitationIdentifier;
use access_gate_core::LimitationNotFoundError;
use access_gate_core::LimitationType;
use access_gate_core::LimitationTypeResolver;
use thiserror::Error;

use crate::ContentTypeLimitationType;
use crate::OwnerLimitationType;
use crate::SectionLimitationType;
use crate::SubtreeLimitationType;
use crate::content_type::CONTENT_TYPE_IDENTIFIER;
use crate::owner::OWNER_IDENTIFIER;
use crate::section::SECTION_IDENTIFIER;
use crate::subtree::SUBTREE_IDENTIFIER;

// ============================================================================
// SECTION: Built-in Identifiers
// ============================================================================

/// Identifiers of the built-in limitation types.
pub const BUILTIN_LIMITATION_IDENTIFIERS: [&str; 4] =
    [CONTENT_TYPE_IDENTIFIER, OWNER_IDENTIFIER, SECTION_IDENTIFIER, SUBTREE_IDENTIFIER];

/// Returns true when the identifier names a built-in limitation type.
#[must_use]
pub fn is_builtin_limitation_identifier(identifier: &str) -> bool {
    BUILTIN_LIMITATION_IDENTIFIERS.contains(&identifier)
}

// ============================================================================
// SECTION: Access Policy
// ============================================================================

/// Access policy controlling which limitation types may be resolved.
///
/// # Invariants
/// - `denylist` overrides `allowlist` when both are present.
/// - If `allowlist` is `None`, all identifiers are allowed unless denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitationAccessPolicy {
    /// Optional allowlist of limitation identifiers.
    pub allowlist: Option<BTreeSet<String>>,
    /// Explicit denylist of limitation identifiers.
    pub denylist: BTreeSet<String>,
}

impl LimitationAccessPolicy {
    /// Returns a policy that permits all limitation types.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            allowlist: None,
            denylist: BTreeSet::new(),
        }
    }

    /// Returns true when the identifier is allowed by policy.
    #[must_use]
    pub fn is_allowed(&self, identifier: &str) -> bool {
        if self.denylist.contains(identifier) {
            return false;
        }
        if let Some(allowlist) = &self.allowlist {
            return allowlist.contains(identifier);
        }
        true
    }
}

impl Default for LimitationAccessPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Limitation identifier registered twice.
    #[error("limitation type already registered: {0}")]
    AlreadyRegistered(String),
}

// ============================================================================
// SECTION: Limitation Registry
// ============================================================================

/// Limitation type registry with policy enforcement.
///
/// # Invariants
/// - Limitation identifiers are unique within the registry.
/// - Access policy is enforced on every resolution.
/// - Registered types are `Send + Sync` and stored behind trait objects.
pub struct LimitationRegistry {
    /// Limitation types keyed by identifier.
    types: BTreeMap<String, Box<dyn LimitationType + Send + Sync>>,
    /// Access control policy for limitation resolution.
    policy: LimitationAccessPolicy,
}

impl LimitationRegistry {
    /// Creates a new registry with the provided policy.
    #[must_use]
    pub fn new(policy: LimitationAccessPolicy) -> Self {
        Self {
            types: BTreeMap::new(),
            policy,
        }
    }

    /// Creates a registry with built-in limitation types registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when built-in registration fails.
    pub fn with_builtin_types() -> Result<Self, RegistryError> {
        let mut registry = Self::new(LimitationAccessPolicy::default());
        registry.register_builtin_types()?;
        Ok(registry)
    }

    /// Registers a limitation type under the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] for duplicate identifiers.
    pub fn register_type(
        &mut self,
        identifier: impl Into<String>,
        limitation_type: impl LimitationType + Send + Sync + 'static,
    ) -> Result<(), RegistryError> {
        let identifier = identifier.into();
        if self.types.contains_key(&identifier) {
            return Err(RegistryError::AlreadyRegistered(identifier));
        }
        self.types.insert(identifier, Box::new(limitation_type));
        Ok(())
    }

    /// Registers the built-in limitation types.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when an identifier is already taken.
    pub fn register_builtin_types(&mut self) -> Result<(), RegistryError> {
        self.register_type(SUBTREE_IDENTIFIER, SubtreeLimitationType::new())?;
        self.register_type(SECTION_IDENTIFIER, SectionLimitationType::new())?;
        self.register_type(OWNER_IDENTIFIER, OwnerLimitationType::new())?;
        self.register_type(CONTENT_TYPE_IDENTIFIER, ContentTypeLimitationType::new())?;
        Ok(())
    }

    /// Returns the configured policy.
    #[must_use]
    pub const fn policy(&self) -> &LimitationAccessPolicy {
        &self.policy
    }

    /// Returns the registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl LimitationTypeResolver for LimitationRegistry {
    fn limitation_type(
        &self,
        identifier: &LimitationIdentifier,
    ) -> Result<&dyn LimitationType, LimitationNotFoundError> {
        if !self.policy.is_allowed(identifier.as_str()) {
            return Err(LimitationNotFoundError::new(identifier.clone()));
        }
        self.types
            .get(identifier.as_str())
            .map(|limitation_type| limitation_type.as_ref() as &dyn LimitationType)
            .ok_or_else(|| LimitationNotFoundError::new(identifier.clone()))
    }
}
