// access-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Access Gate Engine
// Description: Permission-set construction and access decisions.
// Purpose: Answer has-access and can-user questions for repository actors.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The engine is the single canonical decision path for Access Gate. All
//! service surfaces answer authorization questions through [`AccessGate`]:
//! `has_access` builds the permission sets applicable to a module/function
//! pair and `can_user` evaluates them against a concrete target. Permission
//! sets are transient; nothing is cached between checks, so two checks with
//! unchanged role assignments return equal results.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::identifiers::LimitationIdentifier;
use crate::core::identifiers::UserId;
use crate::core::identifiers::UserReference;
use crate::core::permission::AccessResult;
use crate::core::permission::PermissionSet;
use crate::core::policy_map::PolicyMap;
use crate::core::role::Limitation;
use crate::core::role::Policy;
use crate::core::role::RoleStatus;
use crate::core::selector::Selector;
use crate::core::stored::StoredRoleAssignment;
use crate::core::target::Target;
use crate::interfaces::LimitationError;
use crate::interfaces::LimitationNotFoundError;
use crate::interfaces::LimitationType;
use crate::interfaces::LimitationTypeResolver;
use crate::interfaces::RoleStore;
use crate::interfaces::StoreError;
use crate::runtime::evaluate::PermissionEvaluator;
use crate::runtime::mapper::RoleDomainMapper;
use crate::runtime::session::Session;

// ============================================================================
// SECTION: Engine Configuration
// ============================================================================

/// Default anonymous user identifier when none is configured.
pub const DEFAULT_ANONYMOUS_USER_ID: u64 = 10;

/// Configuration for the Access Gate engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGateConfig {
    /// User identifier used when a session has no user reference set.
    pub anonymous_user_id: UserId,
}

impl Default for AccessGateConfig {
    fn default() -> Self {
        Self {
            anonymous_user_id: UserId::new(DEFAULT_ANONYMOUS_USER_ID),
        }
    }
}

// ============================================================================
// SECTION: Access Gate Engine
// ============================================================================

/// Permission evaluation engine over a role store and limitation registry.
pub struct AccessGate<S, L> {
    /// Role and assignment persistence collaborator.
    store: S,
    /// Limitation type registry.
    resolver: L,
    /// Static table of permitted module/function pairs.
    policy_map: PolicyMap,
    /// Engine configuration.
    config: AccessGateConfig,
}

impl<S, L> AccessGate<S, L>
where
    S: RoleStore,
    L: LimitationTypeResolver,
{
    /// Creates a new engine.
    #[must_use]
    pub const fn new(store: S, resolver: L, policy_map: PolicyMap, config: AccessGateConfig) -> Self {
        Self {
            store,
            resolver,
            policy_map,
            config,
        }
    }

    /// Returns the configured policy map.
    #[must_use]
    pub const fn policy_map(&self) -> &PolicyMap {
        &self.policy_map
    }

    /// Returns the limitation type resolver.
    #[must_use]
    pub const fn resolver(&self) -> &L {
        &self.resolver
    }

    /// Returns the role store collaborator.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the effective user reference for a session.
    ///
    /// Falls back to the configured anonymous user when the session has no
    /// user reference set.
    #[must_use]
    pub fn current_user_reference(&self, session: &Session) -> UserReference {
        session.user_reference().unwrap_or(UserReference::new(self.config.anonymous_user_id))
    }

    /// Builds the permission sets applicable to a module/function pair.
    ///
    /// Returns [`AccessResult::Granted`] for the superuser shortcut (an
    /// unscoped assignment holding an all-wildcard, unlimited policy),
    /// [`AccessResult::Denied`] when no assignment yields a matching policy,
    /// and [`AccessResult::Restricted`] with the sets otherwise. Only
    /// published roles contribute; assignments of draft roles are skipped.
    /// Escalated sessions are granted without consulting the store or the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidModuleFunction`] when the pair is not
    /// registered in the policy map, and propagates store and limitation
    /// resolution failures.
    pub fn has_access(
        &self,
        module: &str,
        function: &str,
        session: &Session,
    ) -> Result<AccessResult, AccessError> {
        if !self.policy_map.contains(module, function) {
            return Err(AccessError::InvalidModuleFunction {
                module: module.to_string(),
                function: function.to_string(),
            });
        }

        if session.is_escalated() {
            return Ok(AccessResult::Granted);
        }

        let user = self.current_user_reference(session);
        let assignments = self.store.role_assignments_for(user.user_id(), true)?;
        self.build_permission_sets(module, function, &assignments)
    }

    /// Decides whether the session's actor may perform an action on a target.
    ///
    /// When `context` is empty the target itself is used as the context
    /// object list. Stops at the first fully granting policy.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission-set construction and
    /// limitation evaluation.
    pub fn can_user(
        &self,
        module: &str,
        function: &str,
        target: &Target,
        context: &[Target],
        session: &Session,
    ) -> Result<bool, AccessError> {
        match self.has_access(module, function, session)? {
            AccessResult::Granted => Ok(true),
            AccessResult::Denied => Ok(false),
            AccessResult::Restricted {
                sets,
            } => {
                let user = self.current_user_reference(session);
                let context = if context.is_empty() {
                    std::slice::from_ref(target)
                } else {
                    context
                };
                let evaluator = PermissionEvaluator::new(&self.resolver);
                evaluator.evaluate_sets(&sets, &user, target, context)
            }
        }
    }

    /// Runs a callback with an escalated session.
    ///
    /// Every `has_access`/`can_user` call made with the escalated session is
    /// granted without limitation evaluation. The escalation is confined to
    /// the callback's session value; the caller's session is untouched, so
    /// normal evaluation resumes as soon as the callback returns or fails.
    pub fn sudo<T>(&self, session: &Session, f: impl FnOnce(&Self, &Session) -> T) -> T {
        let escalated = session.escalate();
        f(self, &escalated)
    }

    /// Builds permission sets from the loaded role assignments.
    fn build_permission_sets(
        &self,
        module: &str,
        function: &str,
        assignments: &[StoredRoleAssignment],
    ) -> Result<AccessResult, AccessError> {
        let mapper = RoleDomainMapper::new(&self.resolver);
        // Scoping limitation types are resolved once per identifier within a
        // single check, shared across assignments.
        let mut scope_types: BTreeMap<LimitationIdentifier, &dyn LimitationType> = BTreeMap::new();
        let mut sets = Vec::new();

        for assignment in assignments {
            let role = self.store.load_role(assignment.role_id)?;
            // Draft roles are not effective until published.
            if role.status != RoleStatus::Published {
                continue;
            }
            let mut policies: Vec<Policy> = Vec::new();
            for stored_policy in &role.policies {
                let module_matches = Selector::parse(&stored_policy.module).matches(module);
                let function_matches = Selector::parse(&stored_policy.function).matches(function);
                if module_matches && function_matches {
                    policies.push(mapper.build_policy(stored_policy)?);
                }
            }
            if policies.is_empty() {
                continue;
            }

            if assignment.limitation.is_none() && policies.iter().any(Policy::is_all_wildcard) {
                return Ok(AccessResult::Granted);
            }

            let limitation = match &assignment.limitation {
                Some(stored) => {
                    let limitation_type = match scope_types.get(&stored.identifier) {
                        Some(limitation_type) => *limitation_type,
                        None => {
                            let resolved = self.resolver.limitation_type(&stored.identifier)?;
                            scope_types.insert(stored.identifier.clone(), resolved);
                            resolved
                        }
                    };
                    let limitation =
                        Limitation::new(stored.identifier.clone(), stored.values.clone());
                    limitation_type.accept_value(&limitation)?;
                    Some(limitation)
                }
                None => None,
            };

            sets.push(PermissionSet {
                limitation,
                policies,
            });
        }

        if sets.is_empty() {
            return Ok(AccessResult::Denied);
        }
        Ok(AccessResult::Restricted {
            sets,
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Access check errors.
///
/// None of these variants is an authorization denial; a deny is the normal
/// `false`/[`AccessResult::Denied`] outcome. These errors signal
/// configuration or data-integrity problems and are not retryable.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Module/function pair is not registered in the policy map.
    #[error("module/function pair not registered in policy map: {module}/{function}")]
    InvalidModuleFunction {
        /// Requested module name.
        module: String,
        /// Requested function name.
        function: String,
    },
    /// A limitation identifier has no registered type.
    #[error(transparent)]
    LimitationNotFound(#[from] LimitationNotFoundError),
    /// A limitation value or target shape could not be evaluated.
    #[error(transparent)]
    Limitation(#[from] LimitationError),
    /// Role store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
