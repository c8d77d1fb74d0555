// access-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Access Gate Interfaces
// Description: Backend-agnostic interfaces for limitation types and role storage.
// Purpose: Define the contract surfaces used by the Access Gate runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Access Gate integrates with limitation evaluators
//! and the persistence layer without embedding backend-specific details.
//! Implementations must be deterministic, side-effect free with respect to
//! evaluation inputs, and fail closed on missing or invalid data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::LimitationIdentifier;
use crate::core::identifiers::RoleId;
use crate::core::identifiers::UserId;
use crate::core::identifiers::UserReference;
use crate::core::role::Limitation;
use crate::core::stored::StoredRole;
use crate::core::stored::StoredRoleAssignment;
use crate::core::target::Target;

// ============================================================================
// SECTION: Limitation Types
// ============================================================================

/// Authoring-time validation failure for a single limitation value problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Limitation evaluation and acceptance errors.
#[derive(Debug, Error)]
pub enum LimitationError {
    /// Limitation values are structurally malformed for the type.
    #[error("malformed {identifier} limitation value: {message}")]
    MalformedValue {
        /// Limitation type identifier.
        identifier: LimitationIdentifier,
        /// Description of the malformation.
        message: String,
    },
    /// Limitation type cannot evaluate the given target shape.
    #[error("{identifier} limitation cannot evaluate target: {message}")]
    UnsupportedTarget {
        /// Limitation type identifier.
        identifier: LimitationIdentifier,
        /// Description of the unsupported shape.
        message: String,
    },
}

/// Pluggable evaluator for one limitation type.
///
/// Evaluation must be a pure function of the limitation, actor, target, and
/// context inputs; repeated calls with equal inputs return equal results.
pub trait LimitationType {
    /// Accepts a limitation value, failing fast on malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`LimitationError::MalformedValue`] when values do not have
    /// the structure the type requires.
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError>;

    /// Validates limitation values at role-authoring time.
    ///
    /// A non-empty result means the limitation is invalid and the authoring
    /// operation must not persist it.
    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError>;

    /// Evaluates the limitation against an actor, target, and context objects.
    ///
    /// # Errors
    ///
    /// Returns [`LimitationError`] when the limitation value or target shape
    /// cannot be evaluated.
    fn evaluate(
        &self,
        limitation: &Limitation,
        user: &UserReference,
        target: &Target,
        context: &[Target],
    ) -> Result<bool, LimitationError>;
}

// ============================================================================
// SECTION: Limitation Type Resolution
// ============================================================================

/// Error raised when a limitation identifier has no registered type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("limitation type not found: {identifier}")]
pub struct LimitationNotFoundError {
    /// The unresolved limitation identifier.
    pub identifier: LimitationIdentifier,
}

impl LimitationNotFoundError {
    /// Creates a new not-found error for the identifier.
    #[must_use]
    pub fn new(identifier: impl Into<LimitationIdentifier>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Read-only registry resolving limitation identifiers to their types.
///
/// Resolution is read-only after construction and safe to share across
/// concurrent access checks.
pub trait LimitationTypeResolver {
    /// Resolves a limitation identifier to its registered type.
    ///
    /// # Errors
    ///
    /// Returns [`LimitationNotFoundError`] when no type is registered under
    /// the identifier.
    fn limitation_type(
        &self,
        identifier: &LimitationIdentifier,
    ) -> Result<&dyn LimitationType, LimitationNotFoundError>;
}

// ============================================================================
// SECTION: Role Store
// ============================================================================

/// Role store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("role store io error: {0}")]
    Io(String),
    /// Referenced role does not exist.
    #[error("role not found: {0}")]
    RoleNotFound(RoleId),
    /// Store data is invalid.
    #[error("role store invalid data: {0}")]
    Invalid(String),
}

/// Persistence collaborator for roles and role assignments.
pub trait RoleStore {
    /// Loads role assignments effective for a user, including assignments
    /// inherited through the group hierarchy when `inherited` is set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn role_assignments_for(
        &self,
        user_id: UserId,
        inherited: bool,
    ) -> Result<Vec<StoredRoleAssignment>, StoreError>;

    /// Loads a role with its policies in storage form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RoleNotFound`] when the role does not exist.
    fn load_role(&self, role_id: RoleId) -> Result<StoredRole, StoreError>;
}
