// crates/access-gate-limitations/src/section.rs
// ============================================================================
// Module: Section Limitation Type
// Description: Restricts grants to content in configured sections.
// Purpose: Evaluate section membership for access checks.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! The section limitation restricts a grant to content objects belonging to
//! one of the configured sections. Values are section identifiers in their
//! stored string form. Location targets carry no section and cannot be
//! evaluated by this type.

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

/// Stable identifier of the section limitation type.
pub const SECTION_IDENTIFIER: &str = "Section";

// ============================================================================
// SECTION: Limitation Type Implementation
// ============================================================================

/// Limitation type restricting grants to configured sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionLimitationType;

impl SectionLimitationType {
    /// Creates a new section limitation type.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the limitation values into section identifiers.
    fn parse_values(limitation: &Limitation) -> Result<Vec<u64>, LimitationError> {
        let mut ids = Vec::with_capacity(limitation.values.len());
        for value in &limitation.values {
            let id = value.parse::<u64>().map_err(|_| LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: format!("section limitation value is not numeric: {value}"),
            })?;
            ids.push(id);
        }
        Ok(ids)
    }
}

impl LimitationType for SectionLimitationType {
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError> {
        if limitation.values.is_empty() {
            return Err(LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: "section limitation requires at least one section id".to_string(),
            });
        }
        Self::parse_values(limitation).map(|_| ())
    }

    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if limitation.values.is_empty() {
            errors.push(ValidationError::new("section limitation requires at least one section id"));
        }
        for value in &limitation.values {
            if value.parse::<u64>().is_err() {
                errors.push(ValidationError::new(format!(
                    "section limitation value is not numeric: {value}"
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
        let sections = Self::parse_values(limitation)?;
        let info = target.content_info().ok_or_else(|| LimitationError::UnsupportedTarget {
            identifier: limitation.identifier.clone(),
            message: "section limitation requires a content target".to_string(),
        })?;
        Ok(sections.contains(&info.section_id.value()))
    }
}
