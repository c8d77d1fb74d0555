// access-gate-core/src/core/target.rs
// ============================================================================
// Module: Access Gate Target Objects
// Description: Value objects access decisions are evaluated against.
// Purpose: Provide typed content and location shapes for limitation types.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! Targets are the read-only value objects the surrounding repository
//! services pass into an access check: a content object with its metadata
//! and placements, or a single location in the repository tree. Location
//! paths are typed and validated; limitation types never parse raw path
//! strings themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

use crate::core::identifiers::ContentId;
use crate::core::identifiers::ContentTypeId;
use crate::core::identifiers::LocationId;
use crate::core::identifiers::SectionId;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Location Paths
// ============================================================================

/// Materialized path of a location in the repository tree.
///
/// Paths serialize in the storage form `/1/2/99/` with leading and trailing
/// separators. Containment is segment-wise: `/1/2/` contains `/1/2/99/` but
/// not `/1/23/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationPath {
    /// Location identifiers from the root downwards.
    segments: Vec<u64>,
}

impl LocationPath {
    /// Parses a path from its storage form.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the string is not a well-formed path.
    pub fn parse(value: &str) -> Result<Self, PathError> {
        let trimmed = value
            .strip_prefix('/')
            .ok_or_else(|| PathError::MissingLeadingSeparator(value.to_string()))?;
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(PathError::Empty(value.to_string()));
        }
        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            let id = segment
                .parse::<u64>()
                .map_err(|_| PathError::InvalidSegment(value.to_string(), segment.to_string()))?;
            segments.push(id);
        }
        Ok(Self {
            segments,
        })
    }

    /// Builds a path from location identifier segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] when no segments are provided.
    pub fn from_segments(segments: Vec<u64>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty(String::new()));
        }
        Ok(Self {
            segments,
        })
    }

    /// Returns the path segments from the root downwards.
    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Returns true when `self` is an ancestor of `other` or equal to it.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.segments.len() >= self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        Ok(())
    }
}

impl Serialize for LocationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LocationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// Location path parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path does not start with the separator.
    #[error("location path must start with '/': {0}")]
    MissingLeadingSeparator(String),
    /// Path contains no segments.
    #[error("location path has no segments: {0}")]
    Empty(String),
    /// Path contains a non-numeric segment.
    #[error("location path {0} has invalid segment: {1}")]
    InvalidSegment(String, String),
}

// ============================================================================
// SECTION: Target Objects
// ============================================================================

/// Content metadata relevant to access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInfo {
    /// Content identifier.
    pub content_id: ContentId,
    /// Owner of the content object.
    pub owner_id: UserId,
    /// Section the content belongs to.
    pub section_id: SectionId,
    /// Content type of the object.
    pub content_type_id: ContentTypeId,
    /// Paths of the content's locations; empty for unplaced drafts.
    pub location_paths: Vec<LocationPath>,
}

/// A single location in the repository tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location identifier.
    pub location_id: LocationId,
    /// Materialized path of the location.
    pub path: LocationPath,
}

/// Value object an access decision is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// A content object with its metadata.
    Content {
        /// Content metadata.
        info: ContentInfo,
    },
    /// A location in the repository tree.
    Location {
        /// Location value.
        location: Location,
    },
}

impl Target {
    /// Returns the content metadata when the target is a content object.
    #[must_use]
    pub const fn content_info(&self) -> Option<&ContentInfo> {
        match self {
            Self::Content {
                info,
            } => Some(info),
            Self::Location {
                ..
            } => None,
        }
    }

    /// Returns the location when the target is a location.
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::Location {
                location,
            } => Some(location),
            Self::Content {
                ..
            } => None,
        }
    }
}
