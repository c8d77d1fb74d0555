// crates/access-gate-limitations/src/content_type.rs
// ============================================================================
// Module: Content Type Limitation Type
// Description: Restricts grants to configured content types.
// Purpose: Evaluate content-type membership for access checks.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! The content-type limitation restricts a grant to content objects of one
//! of the configured content types. Values are content type identifiers in
//! their stored string form. Location targets carry no content type and
//! cannot be evaluated by this type.

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

/// Stable identifier of the content-type limitation type.
pub const CONTENT_TYPE_IDENTIFIER: &str = "ContentType";

// ============================================================================
// SECTION: Limitation Type Implementation
// ============================================================================

/// Limitation type restricting grants to configured content types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeLimitationType;

impl ContentTypeLimitationType {
    /// Creates a new content-type limitation type.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the limitation values into content type identifiers.
    fn parse_values(limitation: &Limitation) -> Result<Vec<u64>, LimitationError> {
        let mut ids = Vec::with_capacity(limitation.values.len());
        for value in &limitation.values {
            let id = value.parse::<u64>().map_err(|_| LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: format!("content-type limitation value is not numeric: {value}"),
            })?;
            ids.push(id);
        }
        Ok(ids)
    }
}

impl LimitationType for ContentTypeLimitationType {
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError> {
        if limitation.values.is_empty() {
            return Err(LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: "content-type limitation requires at least one type id".to_string(),
            });
        }
        Self::parse_values(limitation).map(|_| ())
    }

    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if limitation.values.is_empty() {
            errors.push(ValidationError::new(
                "content-type limitation requires at least one type id",
            ));
        }
        for value in &limitation.values {
            if value.parse::<u64>().is_err() {
                errors.push(ValidationError::new(format!(
                    "content-type limitation value is not numeric: {value}"
                )));
            }
        }
        errors
    }

    fn evaluate(
        &self,
        limitation: &Limitation,
        _user: &UserReference,
        target: &Target,
        _context: &[Target],
    ) -> Result<bool, LimitationError> {
        let type_ids = Self::parse_values(limitation)?;
        let info = target.content_info().ok_or_else(|| LimitationError::UnsupportedTarget {
            identifier: limitation.identifier.clone(),
            message: "content-type limitation requires a content target".to_string(),
        })?;
        Ok(type_ids.contains(&info.content_type_id.value()))
    }
}
