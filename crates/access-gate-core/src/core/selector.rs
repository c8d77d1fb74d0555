// access-gate-core/src/core/selector.rs
// ============================================================================
// Module: Access Gate Selectors
// Description: Module and function selectors with wildcard support.
// Purpose: Replace magic "*" string comparison with a typed selector.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Policies select the actions they grant through module and function
//! selectors. The persistence layer stores a selector as either a literal
//! name or the reserved wildcard string `"*"`. This module keeps that wire
//! contract intact while exposing a typed enum, so matching logic never
//! compares raw strings against the wildcard literal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Reserved wildcard literal used by the persistence layer.
pub const WILDCARD_LITERAL: &str = "*";

// ============================================================================
// SECTION: Selector
// ============================================================================

/// Module or function selector attached to a policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches exactly one module or function name.
    Exact(String),
    /// Matches any module or function name.
    Any,
}

impl Selector {
    /// Parses a stored selector string, mapping the wildcard literal to
    /// [`Selector::Any`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD_LITERAL {
            Self::Any
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Returns true when the selector matches the given name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == name,
            Self::Any => true,
        }
    }

    /// Returns the stored string form of the selector.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(exact) => exact,
            Self::Any => WILDCARD_LITERAL,
        }
    }

    /// Returns true when the selector is the wildcard.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
