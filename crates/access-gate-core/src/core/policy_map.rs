// access-gate-core/src/core/policy_map.rs
// ============================================================================
// Module: Access Gate Policy Map
// Description: Static table of permitted module/function/limitation combinations.
// Purpose: Validate access-check inputs against deployment configuration.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! The policy map is the deployment-time table of every module/function pair
//! the engine may be asked about, along with the limitation identifiers that
//! may appear on policies for that pair. An access check against a pair that
//! is absent from the map is a programming or configuration mistake and
//! fails loudly; it is never treated as a deny.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::LimitationIdentifier;

// ============================================================================
// SECTION: Policy Map
// ============================================================================

/// Static map of permitted (module, function, limitation identifier) combinations.
///
/// # Invariants
/// - Module and function names are non-empty.
/// - The map is immutable once handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMap {
    /// Permitted functions and limitation identifiers keyed by module name.
    modules: BTreeMap<String, BTreeMap<String, BTreeSet<LimitationIdentifier>>>,
}

impl PolicyMap {
    /// Creates an empty policy map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function under a module with its permitted limitation identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyMapError`] on empty names or duplicate registration.
    pub fn insert_function(
        &mut self,
        module: impl Into<String>,
        function: impl Into<String>,
        limitations: impl IntoIterator<Item = LimitationIdentifier>,
    ) -> Result<(), PolicyMapError> {
        let module = module.into();
        let function = function.into();
        if module.trim().is_empty() {
            return Err(PolicyMapError::EmptyModuleName);
        }
        if function.trim().is_empty() {
            return Err(PolicyMapError::EmptyFunctionName(module));
        }
        let functions = self.modules.entry(module.clone()).or_default();
        if functions.contains_key(&function) {
            return Err(PolicyMapError::DuplicateFunction(module, function));
        }
        functions.insert(function, limitations.into_iter().collect());
        Ok(())
    }

    /// Returns true when the module/function pair is registered.
    #[must_use]
    pub fn contains(&self, module: &str, function: &str) -> bool {
        self.modules.get(module).is_some_and(|functions| functions.contains_key(function))
    }

    /// Returns the permitted limitation identifiers for a registered pair.
    #[must_use]
    pub fn limitations_for(
        &self,
        module: &str,
        function: &str,
    ) -> Option<&BTreeSet<LimitationIdentifier>> {
        self.modules.get(module).and_then(|functions| functions.get(function))
    }

    /// Iterates over all registered module/function pairs.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (&str, &str, &BTreeSet<LimitationIdentifier>)> {
        self.modules.iter().flat_map(|(module, functions)| {
            functions
                .iter()
                .map(move |(function, limitations)| (module.as_str(), function.as_str(), limitations))
        })
    }

    /// Returns the number of registered module/function pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }

    /// Returns true when no pairs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Policy map construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyMapError {
    /// Module name is empty.
    #[error("policy map module name is empty")]
    EmptyModuleName,
    /// Function name is empty.
    #[error("policy map function name is empty in module: {0}")]
    EmptyFunctionName(String),
    /// Module/function pair registered twice.
    #[error("policy map pair registered twice: {0}/{1}")]
    DuplicateFunction(String, String),
}
