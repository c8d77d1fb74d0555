// access-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Access Gate Runtime
// Description: Engine, evaluation, mapping, and session runtime components.
// Purpose: Group the decision-path implementation behind one module.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime components implement the decision path: session state, stored-to-
//! domain mapping, permission-set construction, and ordered evaluation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod engine;
pub mod evaluate;
pub mod mapper;
pub mod session;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use engine::AccessError;
pub use engine::AccessGate;
pub use engine::AccessGateConfig;
pub use engine::DEFAULT_ANONYMOUS_USER_ID;
pub use evaluate::PermissionEvaluator;
pub use mapper::RoleDomainMapper;
pub use session::EvaluationMode;
pub use session::Session;
pub use validation::AuthoringError;
pub use validation::LimitationValidationError;
pub use validation::LimitationValidationFailure;
pub use validation::validate_limitations;
