// access-gate-core/src/core/role.rs
// ============================================================================
// Module: Access Gate Role Domain Model
// Description: Roles, policies, limitations, and role assignments.
// Purpose: Define the in-memory domain objects consumed by the evaluator.
// Dependencies: crate::core::{identifiers, selector}, serde
// ============================================================================

//! ## Overview
//! The role domain model is the typed, read-only view of roles loaded from
//! the persistence collaborator. Policies carry typed selectors and resolved
//! limitations; limitation identifiers have already been checked against the
//! registry by the time these objects exist. Domain objects are built fresh
//! for every access check and never written back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::GroupId;
use crate::core::identifiers::LimitationIdentifier;
use crate::core::identifiers::RoleId;
use crate::core::identifiers::UserId;
use crate::core::selector::Selector;

// ============================================================================
// SECTION: Limitations
// ============================================================================

/// Named, parameterized restriction narrowing a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limitation {
    /// Limitation type identifier resolved against the registry.
    pub identifier: LimitationIdentifier,
    /// Limitation values, stored as strings by the persistence layer.
    pub values: Vec<String>,
}

impl Limitation {
    /// Creates a new limitation.
    #[must_use]
    pub fn new(identifier: impl Into<LimitationIdentifier>, values: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            values,
        }
    }
}

/// Limitations attached to a policy.
///
/// The persistence layer represents "no limitation needed" as the wildcard
/// literal; the domain model keeps that distinction explicit instead of
/// overloading an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyLimitations {
    /// The policy grants unconditionally for its module/function.
    NotNeeded,
    /// All listed limitations must pass for the policy to grant.
    Required {
        /// Limitations combined with AND semantics.
        limitations: Vec<Limitation>,
    },
}

impl PolicyLimitations {
    /// Returns the limitations to evaluate, empty when none are needed.
    #[must_use]
    pub fn as_slice(&self) -> &[Limitation] {
        match self {
            Self::NotNeeded => &[],
            Self::Required {
                limitations,
            } => limitations,
        }
    }
}

// ============================================================================
// SECTION: Policies
// ============================================================================

/// A (module, function, limitations) grant rule owned by a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Module selector, possibly the wildcard.
    pub module: Selector,
    /// Function selector, possibly the wildcard.
    pub function: Selector,
    /// Limitations narrowing the grant.
    pub limitations: PolicyLimitations,
}

impl Policy {
    /// Returns true when the policy applies to the given module and function.
    #[must_use]
    pub fn applies_to(&self, module: &str, function: &str) -> bool {
        self.module.matches(module) && self.function.matches(function)
    }

    /// Returns true when the policy is an unrestricted all-wildcard grant.
    #[must_use]
    pub const fn is_all_wildcard(&self) -> bool {
        self.module.is_any()
            && self.function.is_any()
            && matches!(self.limitations, PolicyLimitations::NotNeeded)
    }
}

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Publication status of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleStatus {
    /// Role draft under edit, not yet effective.
    Draft,
    /// Published role, immutable except through a new draft cycle.
    Published,
}

/// A named collection of policies assignable to users and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub id: RoleId,
    /// Publication status.
    pub status: RoleStatus,
    /// Policies owned by the role.
    pub policies: Vec<Policy>,
}

// ============================================================================
// SECTION: Role Assignments
// ============================================================================

/// Subject a role is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleSubject {
    /// Role assigned directly to a user.
    User {
        /// User identifier.
        user_id: UserId,
    },
    /// Role assigned to a user group.
    Group {
        /// Group identifier.
        group_id: GroupId,
    },
}

