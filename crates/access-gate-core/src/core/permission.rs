// access-gate-core/src/core/permission.rs
// ============================================================================
// Module: Access Gate Permission Sets
// Description: Transient permission sets and access-check results.
// Purpose: Represent the per-decision output of permission-set construction.
// Dependencies: crate::core::role, serde
// ============================================================================

//! ## Overview
//! A permission set pairs the optional scoping limitation of one role
//! assignment with the policies of that role which match the checked
//! module/function. Sets are built fresh for every access check from current
//! role assignments and discarded when the check completes; they are never
//! persisted or cached across checks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::role::Limitation;
use crate::core::role::Policy;

// ============================================================================
// SECTION: Permission Sets
// ============================================================================

/// One role assignment's contribution to an access decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Scoping limitation of the assignment, when present.
    pub limitation: Option<Limitation>,
    /// Policies of the assigned role matching the checked module/function.
    pub policies: Vec<Policy>,
}

// ============================================================================
// SECTION: Access Results
// ============================================================================

/// Result of permission-set construction for a module/function pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessResult {
    /// Access is granted unconditionally (superuser shortcut).
    Granted,
    /// No role assignment yields any matching policy.
    Denied,
    /// Access depends on evaluating the listed permission sets in order.
    Restricted {
        /// Permission sets in assignment order.
        sets: Vec<PermissionSet>,
    },
}

impl AccessResult {
    /// Returns true when the result is an unconditional grant.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns true when the result is an unconditional deny.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}
