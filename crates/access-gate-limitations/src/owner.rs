// crates/access-gate-limitations/src/owner.rs
// ============================================================================
// Module: Owner Limitation Type
// Description: Restricts grants to content owned by the current actor.
// Purpose: Evaluate ownership for access checks.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! The owner limitation restricts a grant to content objects owned by the
//! actor performing the check. The stored value form is the single flag
//! `"1"`, kept as the stable storage contract. Location targets carry no
//! owner and cannot be evaluated by this type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use access_gate_core::Limitation;
use access_gate_core::LimitationError;
use access_gate_core::LimitationType;
use access_gate_core::Target;
use access_gate_core::UserReference;
use access_gate_core::ValidationError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Stable identifier of the owner limitation type.
pub const OWNER_IDENTIFIER: &str = "Owner";

/// Stored value meaning "owned by the current actor".
pub const OWNER_SELF_VALUE: &str = "1";

// ============================================================================
// SECTION: Limitation Type Implementation
// ============================================================================

/// Limitation type restricting grants to content owned by the actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerLimitationType;

impl OwnerLimitationType {
    /// Creates a new owner limitation type.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks that values carry only the supported ownership flag.
    fn check_values(limitation: &Limitation) -> Result<(), LimitationError> {
        if limitation.values.is_empty() {
            return Err(LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: "owner limitation requires a value".to_string(),
            });
        }
        for value in &limitation.values {
            if value != OWNER_SELF_VALUE {
                return Err(LimitationError::MalformedValue {
                    identifier: limitation.identifier.clone(),
                    message: format!("unsupported owner limitation value: {value}"),
                });
            }
        }
        Ok(())
    }
}

impl LimitationType for OwnerLimitationType {
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError> {
        Self::check_values(limitation)
    }

    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if limitation.values.is_empty() {
            errors.push(ValidationError::new("owner limitation requires a value"));
        }
        for value in &limitation.values {
            if value != OWNER_SELF_VALUE {
                errors.push(ValidationError::new(format!(
                    "unsupported owner limitation value: {value}"
                )));
            }
        }
        errors
    }

    fn evaluate(
        &self,
        limitation: &Limitation,
        user: &UserReference,
        target: &Target,
        _context: &[Target],
    ) -> Result<bool, LimitationError> {
        Self::check_values(limitation)?;
        let info = target.content_info().ok_or_else(|| LimitationError::UnsupportedTarget {
            identifier: limitation.identifier.clone(),
            message: "owner limitation requires a content target".to_string(),
        })?;
        Ok(info.owner_id == user.user_id())
    }
}
