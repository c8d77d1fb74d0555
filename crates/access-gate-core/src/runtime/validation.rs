// access-gate-core/src/runtime/validation.rs
// ============================================================================
// Module: Access Gate Authoring Validation
// Description: Limitation value validation for role-authoring operations.
// Purpose: Reject invalid limitations before any role state is persisted.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Role-authoring operations (create role, add or update a policy, assign a
//! role) validate limitation values before persisting anything. Validation
//! aggregates every failing limitation so the caller can report all problems
//! at once; a single failure aborts the whole authoring operation, leaving
//! no partial role state behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::identifiers::LimitationIdentifier;
use crate::core::role::Limitation;
use crate::interfaces::LimitationError;
use crate::interfaces::LimitationNotFoundError;
use crate::interfaces::LimitationTypeResolver;
use crate::interfaces::ValidationError;

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Validation failures for one limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitationValidationFailure {
    /// Limitation type identifier.
    pub identifier: LimitationIdentifier,
    /// Validation errors reported by the limitation type.
    pub errors: Vec<ValidationError>,
}

/// Aggregate validation failure carrying every failing limitation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct LimitationValidationError {
    /// Failures keyed by limitation, in input order.
    pub failures: Vec<LimitationValidationFailure>,
}

impl fmt::Display for LimitationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limitation validation failed for {} limitation(s):", self.failures.len())?;
        for failure in &self.failures {
            write!(f, " {}", failure.identifier)?;
        }
        Ok(())
    }
}

/// Role-authoring errors.
#[derive(Debug, Error)]
pub enum AuthoringError {
    /// A limitation identifier has no registered type.
    #[error(transparent)]
    LimitationNotFound(#[from] LimitationNotFoundError),
    /// A limitation value is structurally malformed.
    #[error(transparent)]
    Limitation(#[from] LimitationError),
    /// One or more limitations failed value validation.
    #[error(transparent)]
    Validation(LimitationValidationError),
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates limitations for an authoring operation.
///
/// Each limitation is accepted (structural check) and validated through its
/// registered type. All validation failures are aggregated; resolution and
/// acceptance failures abort immediately.
///
/// # Errors
///
/// Returns [`AuthoringError::LimitationNotFound`] for unregistered
/// identifiers, [`AuthoringError::Limitation`] for malformed values, and
/// [`AuthoringError::Validation`] when any limitation reports validation
/// errors.
pub fn validate_limitations<L: LimitationTypeResolver + ?Sized>(
    resolver: &L,
    limitations: &[Limitation],
) -> Result<(), AuthoringError> {
    let mut failures = Vec::new();
    for limitation in limitations {
        let limitation_type = resolver.limitation_type(&limitation.identifier)?;
        limitation_type.accept_value(limitation)?;
        let errors = limitation_type.validate(limitation);
        if !errors.is_empty() {
            failures.push(LimitationValidationFailure {
                identifier: limitation.identifier.clone(),
                errors,
            });
        }
    }

    if failures.is_empty() {
        return Ok(());
    }
    Err(AuthoringError::Validation(LimitationValidationError {
        failures,
    }))
}
