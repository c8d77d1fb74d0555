// access-gate-limitations/tests/common/mod.rs
// =============================================================================
// Module: Limitation Test Helpers
// Description: Shared target and limitation fixtures for limitation tests.
// Purpose: Reduce duplication across integration tests for access-gate-limitations.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use access_gate_core::ContentId;
use access_gate_core::ContentInfo;
use access_gate_core::ContentTypeId;
use access_gate_core::Limitation;
use access_gate_core::Location;
use access_gate_core::LocationId;
use access_gate_core::LocationPath;
use access_gate_core::SectionId;
use access_gate_core::Target;
use access_gate_core::UserId;
use access_gate_core::UserReference;

/// Builds a limitation from string values.
pub fn limitation(identifier: &str, values: &[&str]) -> Limitation {
    Limitation::new(identifier, values.iter().map(ToString::to_string).collect())
}

/// Returns a user reference for the given identifier.
pub fn user(user_id: u64) -> UserReference {
    UserReference::new(UserId::new(user_id))
}

/// Builds a content target placed at the given paths.
///
/// # Panics
///
/// Panics when a path is malformed; fixtures use literal paths.
pub fn content_target(
    content_id: u64,
    owner_id: u64,
    section_id: u64,
    content_type_id: u64,
    paths: &[&str],
) -> Target {
    let location_paths = paths
        .iter()
        .map(|path| LocationPath::parse(path).unwrap_or_else(|err| panic!("bad fixture path: {err}")))
        .collect();
    Target::Content {
        info: ContentInfo {
            content_id: ContentId::new(content_id),
            owner_id: UserId::new(owner_id),
            section_id: SectionId::new(section_id),
            content_type_id: ContentTypeId::new(content_type_id),
            location_paths,
        },
    }
}

/// Builds a location target at the given path.
///
/// # Panics
///
/// Panics when the path is malformed; fixtures use literal paths.
pub fn location_target(location_id: u64, path: &str) -> Target {
    Target::Location {
        location: Location {
            location_id: LocationId::new(location_id),
            path: LocationPath::parse(path)
                .unwrap_or_else(|err| panic!("bad fixture path: {err}")),
        },
    }
}
