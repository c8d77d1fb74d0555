// access-gate-core/src/runtime/session.rs
// ============================================================================
// Module: Access Gate Session
// Description: Request-scoped actor and escalation state.
// Purpose: Thread current-user and sudo state explicitly through calls.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! A session carries the mutable state one logical request needs for access
//! checks: the optional current user reference and the evaluation mode. It
//! is an explicit value threaded through calls, one per inbound request or
//! task, never a process-wide slot; sharing one session across concurrent
//! requests would leak one actor's decisions into another's evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::UserReference;

// ============================================================================
// SECTION: Evaluation Mode
// ============================================================================

/// Evaluation mode for access checks made with a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Normal evaluation through permission sets and limitation types.
    #[default]
    Normal,
    /// Escalated evaluation: every check is granted without evaluation.
    Escalated,
}

// ============================================================================
// SECTION: Session
// ============================================================================

/// Request-scoped session state for access checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Current user reference, when explicitly set.
    user: Option<UserReference>,
    /// Evaluation mode for checks made with this session.
    mode: EvaluationMode,
}

impl Session {
    /// Creates a session with no user set and normal evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for a known user with normal evaluation.
    #[must_use]
    pub const fn for_user(user: UserReference) -> Self {
        Self {
            user: Some(user),
            mode: EvaluationMode::Normal,
        }
    }

    /// Sets the current user reference.
    pub const fn set_user_reference(&mut self, user: UserReference) {
        self.user = Some(user);
    }

    /// Returns the current user reference, when set.
    #[must_use]
    pub const fn user_reference(&self) -> Option<UserReference> {
        self.user
    }

    /// Returns the evaluation mode.
    #[must_use]
    pub const fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Returns true when checks with this session bypass evaluation.
    #[must_use]
    pub fn is_escalated(&self) -> bool {
        self.mode == EvaluationMode::Escalated
    }

    /// Returns an escalated copy of this session.
    ///
    /// Escalating an already escalated session stays escalated. The copy is
    /// independent; dropping it restores nothing because the original
    /// session is never mutated.
    #[must_use]
    pub const fn escalate(&self) -> Self {
        Self {
            user: self.user,
            mode: EvaluationMode::Escalated,
        }
    }
}
