// crates/access-gate-limitations/src/subtree.rs
// ============================================================================
// Module: Subtree Limitation Type
// Description: Restricts grants to content placed under configured subtrees.
// Purpose: Evaluate location-path prefix containment for access checks.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! The subtree limitation restricts a grant to targets placed under one of
//! the configured location paths. A content target matches when any of its
//! location paths (or, for unplaced content, any location supplied through
//! the context objects) lies under a configured subtree; a location target
//! matches on its own path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use access_gate_core::Limitation;
use access_gate_core::LimitationError;
use access_gate_core::LimitationType;
use access_gate_core::LocationPath;
use access_gate_core::Target;
use access_gate_core::UserReference;
use access_gate_core::ValidationError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Stable identifier of the subtree limitation type.
pub const SUBTREE_IDENTIFIER: &str = "Subtree";

// ============================================================================
// SECTION: Limitation Type Implementation
// ============================================================================

/// Limitation type restricting grants to configured subtrees.
///
/// # Invariants
/// - Values are location paths in storage form (`/1/2/`).
/// - Evaluation is a pure function of the limitation, target, and context.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtreeLimitationType;

impl SubtreeLimitationType {
    /// Creates a new subtree limitation type.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the limitation values into location paths.
    fn parse_values(limitation: &Limitation) -> Result<Vec<LocationPath>, LimitationError> {
        let mut paths = Vec::with_capacity(limitation.values.len());
        for value in &limitation.values {
            let path = LocationPath::parse(value).map_err(|err| LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: err.to_string(),
            })?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Collects the candidate paths of a target, consulting context objects
    /// for unplaced content.
    fn candidate_paths(target: &Target, context: &[Target]) -> Vec<LocationPath> {
        match target {
            Target::Location {
                location,
            } => vec![location.path.clone()],
            Target::Content {
                info,
            } => {
                if info.location_paths.is_empty() {
                    context
                        .iter()
                        .filter_map(Target::location)
                        .map(|location| location.path.clone())
                        .collect()
                } else {
                    info.location_paths.clone()
                }
            }
        }
    }
}

impl LimitationType for SubtreeLimitationType {
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError> {
        if limitation.values.is_empty() {
            return Err(LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: "subtree limitation requires at least one path".to_string(),
            });
        }
        Self::parse_values(limitation).map(|_| ())
    }

    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if limitation.values.is_empty() {
            errors.push(ValidationError::new("subtree limitation requires at least one path"));
        }
        for value in &limitation.values {
            if let Err(err) = LocationPath::parse(value) {
                errors.push(ValidationError::new(err.to_string()));
            }
        }
        errors
    }

    fn evaluate(
        &self,
        limitation: &Limitation,
        _user: &UserReference,
        target: &Target,
        context: &[Target],
    ) -> Result<bool, LimitationError> {
        let subtrees = Self::parse_values(limitation)?;
        let candidates = Self::candidate_paths(target, context);
        Ok(candidates
            .iter()
            .any(|candidate| subtrees.iter().any(|subtree| subtree.contains(candidate))))
    }
}
