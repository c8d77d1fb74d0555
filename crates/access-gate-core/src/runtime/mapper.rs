// access-gate-core/src/runtime/mapper.rs
// ============================================================================
// Module: Access Gate Role Domain Mapper
// Description: Translation of stored role records into the domain model.
// Purpose: Resolve selectors and limitation identifiers during set construction.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The domain mapper turns persistence-shaped records into typed domain
//! objects. Selector strings become [`Selector`] values and stored
//! limitations are checked against the limitation-type registry, so an
//! unknown identifier surfaces here, lazily, during permission-set
//! construction rather than when the role was loaded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::role::Limitation;
use crate::core::role::Policy;
use crate::core::role::PolicyLimitations;
use crate::core::role::Role;
use crate::core::selector::Selector;
use crate::core::stored::StoredLimitation;
use crate::core::stored::StoredPolicy;
use crate::core::stored::StoredRole;
use crate::interfaces::LimitationTypeResolver;
use crate::runtime::engine::AccessError;

// ============================================================================
// SECTION: Role Domain Mapper
// ============================================================================

/// Maps stored role records into domain objects.
pub struct RoleDomainMapper<'a, L: LimitationTypeResolver + ?Sized> {
    /// Registry used to resolve limitation identifiers.
    resolver: &'a L,
}

impl<'a, L: LimitationTypeResolver + ?Sized> RoleDomainMapper<'a, L> {
    /// Creates a new mapper over the given resolver.
    #[must_use]
    pub const fn new(resolver: &'a L) -> Self {
        Self {
            resolver,
        }
    }

    /// Builds a domain limitation from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::LimitationNotFound`] for unregistered
    /// identifiers and [`AccessError::Limitation`] for malformed values.
    pub fn build_limitation(&self, stored: &StoredLimitation) -> Result<Limitation, AccessError> {
        let limitation_type = self.resolver.limitation_type(&stored.identifier)?;
        let limitation = Limitation::new(stored.identifier.clone(), stored.values.clone());
        limitation_type.accept_value(&limitation)?;
        Ok(limitation)
    }

    /// Builds a domain policy from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when a stored limitation cannot be resolved
    /// or accepted.
    pub fn build_policy(&self, stored: &StoredPolicy) -> Result<Policy, AccessError> {
        let limitations = if stored.limitations.is_empty() {
            PolicyLimitations::NotNeeded
        } else {
            let mut built = Vec::with_capacity(stored.limitations.len());
            for limitation in &stored.limitations {
                built.push(self.build_limitation(limitation)?);
            }
            PolicyLimitations::Required {
                limitations: built,
            }
        };

        Ok(Policy {
            module: Selector::parse(&stored.module),
            function: Selector::parse(&stored.function),
            limitations,
        })
    }

    /// Builds a domain role with all of its policies.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when any policy fails to build.
    pub fn build_role(&self, stored: &StoredRole) -> Result<Role, AccessError> {
        let mut policies = Vec::with_capacity(stored.policies.len());
        for policy in &stored.policies {
            policies.push(self.build_policy(policy)?);
        }
        Ok(Role {
            id: stored.id,
            status: stored.status,
            policies,
        })
    }
}
