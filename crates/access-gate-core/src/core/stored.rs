// access-gate-core/src/core/stored.rs
// ============================================================================
// Module: Access Gate Stored Role Shapes
// Description: Persistence-shaped role records returned by the role store.
// Purpose: Keep raw storage forms separate from the resolved domain model.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The role store collaborator returns records in their storage form: module
//! and function names as raw strings (including the reserved `"*"` literal)
//! and limitations as unresolved identifier/value pairs. Translation into
//! the domain model happens lazily during permission-set construction, so
//! unknown limitation identifiers fail at resolution time rather than at
//! role load time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::LimitationIdentifier;
use crate::core::identifiers::RoleId;
use crate::core::role::RoleStatus;
use crate::core::role::RoleSubject;

// ============================================================================
// SECTION: Stored Records
// ============================================================================

/// Stored limitation record with an unresolved identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLimitation {
    /// Limitation type identifier as stored.
    pub identifier: LimitationIdentifier,
    /// Limitation values as stored.
    pub values: Vec<String>,
}

/// Stored policy record with raw selector strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPolicy {
    /// Raw module name, possibly the wildcard literal.
    pub module: String,
    /// Raw function name, possibly the wildcard literal.
    pub function: String,
    /// Stored limitations; an empty list means no limitation is needed.
    pub limitations: Vec<StoredLimitation>,
}

/// Stored role record with its policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRole {
    /// Role identifier.
    pub id: RoleId,
    /// Publication status.
    pub status: RoleStatus,
    /// Stored policies owned by the role.
    pub policies: Vec<StoredPolicy>,
}

/// Stored role assignment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoleAssignment {
    /// Assigned role identifier.
    pub role_id: RoleId,
    /// Subject the role is assigned to.
    pub subject: RoleSubject,
    /// Optional scoping limitation in storage form.
    pub limitation: Option<StoredLimitation>,
}
