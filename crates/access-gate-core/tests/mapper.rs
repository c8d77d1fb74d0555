// access-gate-core/tests/mapper.rs
// ============================================================================
// Module: Role Domain Mapper Tests
// Description: Validate stored-to-domain translation of roles and policies.
// Purpose: Pin selector parsing, limitation resolution, and role mapping.
// Dependencies: access-gate-core
// ============================================================================
//! ## Overview
//! Exercises [`RoleDomainMapper`]: stored policies become typed policies with
//! parsed selectors, stored limitations are resolved and accepted against the
//! registry, and whole roles map with their status intact.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only panic-based assertions are permitted."
)]

use access_gate_core::AccessError;
use access_gate_core::PolicyLimitations;
use access_gate_core::RoleDomainMapper;
use access_gate_core::RoleId;
use access_gate_core::RoleStatus;

mod common;

use common::FixedLimitationType;
use common::RecordingResolver;
use common::ValueMatchLimitationType;
use common::published_role;
use common::stored_limitation;
use common::stored_policy;

// ============================================================================
// SECTION: Policy Mapping
// ============================================================================

#[test]
fn test_policy_without_stored_limitations_needs_none() {
    let resolver = RecordingResolver::new();
    let mapper = RoleDomainMapper::new(&resolver);

    let policy = mapper.build_policy(&stored_policy("content", "read", Vec::new())).unwrap();

    assert_eq!(policy.limitations, PolicyLimitations::NotNeeded);
    assert!(policy.applies_to("content", "read"));
    assert!(!policy.applies_to("content", "edit"));
    assert!(!policy.applies_to("section", "read"));
    assert_eq!(resolver.total_resolutions(), 0);
}

#[test]
fn test_policy_with_stored_limitations_requires_them() {
    let mut resolver = RecordingResolver::new();
    let (section_type, _) = FixedLimitationType::new(true);
    resolver.insert("Section", section_type);
    let mapper = RoleDomainMapper::new(&resolver);
    let stored = stored_policy(
        "content",
        "read",
        vec![stored_limitation("Section", &["3", "7"])],
    );

    let policy = mapper.build_policy(&stored).unwrap();

    let limitations = policy.limitations.as_slice();
    assert_eq!(limitations.len(), 1);
    assert_eq!(limitations[0].identifier.as_str(), "Section");
    assert_eq!(limitations[0].values, vec!["3".to_string(), "7".to_string()]);
}

#[test]
fn test_wildcard_selectors_apply_to_every_pair() {
    let resolver = RecordingResolver::new();
    let mapper = RoleDomainMapper::new(&resolver);

    let policy = mapper.build_policy(&stored_policy("*", "*", Vec::new())).unwrap();

    assert!(policy.applies_to("content", "read"));
    assert!(policy.applies_to("section", "assign"));
    assert!(policy.is_all_wildcard());
}

#[test]
fn test_wildcard_module_with_exact_function_is_not_all_wildcard() {
    let resolver = RecordingResolver::new();
    let mapper = RoleDomainMapper::new(&resolver);

    let policy = mapper.build_policy(&stored_policy("*", "read", Vec::new())).unwrap();

    assert!(policy.applies_to("content", "read"));
    assert!(policy.applies_to("section", "read"));
    assert!(!policy.applies_to("content", "edit"));
    assert!(!policy.is_all_wildcard());
}

// ============================================================================
// SECTION: Limitation Mapping
// ============================================================================

#[test]
fn test_unknown_limitation_identifier_fails_to_build() {
    let resolver = RecordingResolver::new();
    let mapper = RoleDomainMapper::new(&resolver);

    let result = mapper.build_limitation(&stored_limitation("Ghost", &["1"]));

    assert!(matches!(result, Err(AccessError::LimitationNotFound(_))));
}

#[test]
fn test_rejected_limitation_value_fails_to_build() {
    let mut resolver = RecordingResolver::new();
    let (strict_type, _) = ValueMatchLimitationType::new("1");
    resolver.insert("Owner", strict_type);
    let mapper = RoleDomainMapper::new(&resolver);

    let result = mapper.build_limitation(&stored_limitation("Owner", &[]));

    assert!(matches!(result, Err(AccessError::Limitation(_))));
}

// ============================================================================
// SECTION: Role Mapping
// ============================================================================

#[test]
fn test_role_maps_with_status_and_all_policies() {
    let mut resolver = RecordingResolver::new();
    let (section_type, _) = FixedLimitationType::new(true);
    resolver.insert("Section", section_type);
    let mapper = RoleDomainMapper::new(&resolver);
    let stored = published_role(
        7,
        vec![
            stored_policy("content", "read", vec![stored_limitation("Section", &["3"])]),
            stored_policy("content", "*", Vec::new()),
        ],
    );

    let role = mapper.build_role(&stored).unwrap();

    assert_eq!(role.id, RoleId::new(7));
    assert_eq!(role.status, RoleStatus::Published);
    assert_eq!(role.policies.len(), 2);
    assert!(role.policies[0].applies_to("content", "read"));
    assert!(role.policies[1].applies_to("content", "edit"));
}

#[test]
fn test_role_with_an_unresolvable_policy_fails_to_build() {
    let resolver = RecordingResolver::new();
    let mapper = RoleDomainMapper::new(&resolver);
    let stored = published_role(
        7,
        vec![
            stored_policy("content", "read", Vec::new()),
            stored_policy("content", "edit", vec![stored_limitation("Ghost", &["1"])]),
        ],
    );

    let result = mapper.build_role(&stored);

    assert!(matches!(result, Err(AccessError::LimitationNotFound(_))));
}
