// access-gate-core/src/core/mod.rs
// ============================================================================
// Module: Access Gate Core Types
// Description: Canonical domain types for permission evaluation.
// Purpose: Provide stable, serializable types for roles, policies, and targets.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Access Gate core types define the role/policy domain model, the stored
//! shapes returned by the persistence collaborator, target value objects,
//! the static policy map, and the transient permission-set structures built
//! per access check. These types are the canonical source of truth for any
//! derived service surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod permission;
pub mod policy_map;
pub mod role;
pub mod selector;
pub mod stored;
pub mod target;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::ContentId;
pub use identifiers::ContentTypeId;
pub use identifiers::GroupId;
pub use identifiers::LimitationIdentifier;
pub use identifiers::LocationId;
pub use identifiers::RoleId;
pub use identifiers::SectionId;
pub use identifiers::UserId;
pub use identifiers::UserReference;
pub use permission::AccessResult;
pub use permission::PermissionSet;
pub use policy_map::PolicyMap;
pub use policy_map::PolicyMapError;
pub use role::Limitation;
pub use role::Policy;
pub use role::PolicyLimitations;
pub use role::Role;
pub use role::RoleStatus;
pub use role::RoleSubject;
pub use selector::Selector;
pub use selector::WILDCARD_LITERAL;
pub use stored::StoredLimitation;
pub use stored::StoredPolicy;
pub use stored::StoredRole;
pub use stored::StoredRoleAssignment;
pub use target::ContentInfo;
pub use target::Location;
pub use target::LocationPath;
pub use target::PathError;
pub use target::Target;
