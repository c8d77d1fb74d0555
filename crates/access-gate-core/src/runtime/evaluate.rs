// access-gate-core/src/runtime/evaluate.rs
// ============================================================================
// Module: Access Gate Permission Evaluation
// Description: Ordered evaluation of permission sets against a target.
// Purpose: Produce the final grant/deny decision with strict short-circuiting.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The permission evaluator consumes the ordered permission sets built for
//! one access check and evaluates limitations against a concrete target and
//! context. The scoping limitation of a set gates its policies: when it
//! fails, the set's policies are not evaluated at all. Within a policy,
//! limitations combine with AND; across policies and sets, the first fully
//! granting policy decides and nothing after it is evaluated. That
//! short-circuit is part of the API contract, not an optimization detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::UserReference;
use crate::core::permission::PermissionSet;
use crate::core::role::Limitation;
use crate::core::role::Policy;
use crate::core::target::Target;
use crate::interfaces::LimitationTypeResolver;
use crate::runtime::engine::AccessError;

// ============================================================================
// SECTION: Permission Evaluator
// ============================================================================

/// Evaluates permission sets against a target using registered limitation types.
pub struct PermissionEvaluator<'a, L: LimitationTypeResolver + ?Sized> {
    /// Registry used to resolve limitation identifiers.
    resolver: &'a L,
}

impl<'a, L: LimitationTypeResolver + ?Sized> PermissionEvaluator<'a, L> {
    /// Creates a new evaluator over the given resolver.
    #[must_use]
    pub const fn new(resolver: &'a L) -> Self {
        Self {
            resolver,
        }
    }

    /// Evaluates permission sets in order and returns the access decision.
    ///
    /// Returns `true` at the first fully granting policy; an empty set list
    /// is a deny.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when a limitation identifier cannot be
    /// resolved or a limitation cannot evaluate the target.
    pub fn evaluate_sets(
        &self,
        sets: &[PermissionSet],
        user: &UserReference,
        target: &Target,
        context: &[Target],
    ) -> Result<bool, AccessError> {
        for set in sets {
            if let Some(limitation) = &set.limitation
                && !self.evaluate_limitation(limitation, user, target, context)?
            {
                continue;
            }
            for policy in &set.policies {
                if self.evaluate_policy(policy, user, target, context)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Evaluates one policy; all of its limitations must pass.
    ///
    /// A policy without limitations grants automatically.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when a limitation fails to resolve or evaluate.
    pub fn evaluate_policy(
        &self,
        policy: &Policy,
        user: &UserReference,
        target: &Target,
        context: &[Target],
    ) -> Result<bool, AccessError> {
        for limitation in policy.limitations.as_slice() {
            if !self.evaluate_limitation(limitation, user, target, context)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluates one limitation through its registered type.
    fn evaluate_limitation(
        &self,
        limitation: &Limitation,
        user: &UserReference,
        target: &Target,
        context: &[Target],
    ) -> Result<bool, AccessError> {
        let limitation_type = self.resolver.limitation_type(&limitation.identifier)?;
        Ok(limitation_type.evaluate(limitation, user, target, context)?)
    }
}
