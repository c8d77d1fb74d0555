// access-gate-config/src/config.rs
// ============================================================================
// Module: Access Gate Configuration
// Description: Configuration loading and validation for Access Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: access-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and content
//! limits. The file supplies the anonymous user identifier and the policy
//! map: the table of every module/function pair the engine may be asked
//! about, with the limitation identifiers permitted for each pair. Missing
//! or invalid configuration fails closed; the engine never starts with a
//! partially valid policy map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use access_gate_core::AccessGateConfig;
use access_gate_core::DEFAULT_ANONYMOUS_USER_ID;
use access_gate_core::LimitationIdentifier;
use access_gate_core::LimitationTypeResolver;
use access_gate_core::PolicyMap;
use access_gate_core::PolicyMapError;
use access_gate_core::UserId;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "access-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "ACCESS_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum number of modules in the policy map.
pub(crate) const MAX_MODULES: usize = 256;
/// Maximum number of functions per module.
pub(crate) const MAX_FUNCTIONS_PER_MODULE: usize = 256;
/// Maximum number of limitation identifiers per function.
pub(crate) const MAX_LIMITATIONS_PER_FUNCTION: usize = 64;
/// Maximum length of a module or function name.
pub(crate) const MAX_NAME_LENGTH: usize = 64;
/// Maximum length of a limitation identifier.
pub(crate) const MAX_LIMITATION_IDENTIFIER_LENGTH: usize = 64;

// ============================================================================
// SECTION: Settings Model
// ============================================================================

/// Access Gate deployment settings loaded from TOML.
///
/// # Invariants
/// - `policy_map` is the complete table of permitted module/function pairs.
/// - Settings are immutable once validated and handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessGateSettings {
    /// Anonymous user identifier used when no user reference is set.
    pub anonymous_user_id: Option<u64>,
    /// Policy map: module name to function name to limitation identifiers.
    #[serde(default)]
    pub policy_map: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl AccessGateSettings {
    /// Loads settings from the given path, the `ACCESS_GATE_CONFIG`
    /// environment variable, or the default filename, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, oversized,
    /// unparsable, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        let metadata =
            fs::metadata(&path).map_err(|err| ConfigError::Io(path.clone(), err.to_string()))?;
        let size = usize::try_from(metadata.len())
            .map_err(|_| ConfigError::FileTooLarge(path.clone()))?;
        if size > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::FileTooLarge(path));
        }
        let content =
            fs::read_to_string(&path).map_err(|err| ConfigError::Io(path.clone(), err.to_string()))?;
        Self::parse(&content)
    }

    /// Parses and validates settings from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings against hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first violated limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anonymous_user_id == Some(0) {
            return Err(ConfigError::InvalidAnonymousUserId);
        }
        if self.policy_map.len() > MAX_MODULES {
            return Err(ConfigError::TooManyModules(self.policy_map.len()));
        }
        for (module, functions) in &self.policy_map {
            validate_name("module", module)?;
            if functions.len() > MAX_FUNCTIONS_PER_MODULE {
                return Err(ConfigError::TooManyFunctions(module.clone(), functions.len()));
            }
            for (function, limitations) in functions {
                validate_name("function", function)?;
                if limitations.len() > MAX_LIMITATIONS_PER_FUNCTION {
                    return Err(ConfigError::TooManyLimitations(
                        format!("{module}/{function}"),
                        limitations.len(),
                    ));
                }
                let mut seen: BTreeSet<&str> = BTreeSet::new();
                for identifier in limitations {
                    validate_limitation_identifier(identifier)?;
                    if !seen.insert(identifier.as_str()) {
                        return Err(ConfigError::DuplicateLimitationIdentifier(
                            format!("{module}/{function}"),
                            identifier.clone(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the effective anonymous user identifier.
    #[must_use]
    pub fn anonymous_user_id(&self) -> UserId {
        UserId::new(self.anonymous_user_id.unwrap_or(DEFAULT_ANONYMOUS_USER_ID))
    }

    /// Builds the engine configuration from the settings.
    #[must_use]
    pub fn engine_config(&self) -> AccessGateConfig {
        AccessGateConfig {
            anonymous_user_id: self.anonymous_user_id(),
        }
    }

    /// Builds the core policy map from the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PolicyMap`] when map construction fails.
    pub fn build_policy_map(&self) -> Result<PolicyMap, ConfigError> {
        let mut map = PolicyMap::new();
        for (module, functions) in &self.policy_map {
            for (function, limitations) in functions {
                map.insert_function(
                    module.clone(),
                    function.clone(),
                    limitations.iter().map(LimitationIdentifier::new),
                )?;
            }
        }
        Ok(map)
    }

    /// Resolves the default configuration path.
    fn default_path() -> PathBuf {
        env::var(CONFIG_ENV_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from)
    }
}

// ============================================================================
// SECTION: Registry Cross-Check
// ============================================================================

/// Ensures every limitation identifier in the policy map has a registered type.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownLimitationType`] for the first identifier
/// without a registered limitation type.
pub fn ensure_limitation_types_registered<L: LimitationTypeResolver + ?Sized>(
    map: &PolicyMap,
    resolver: &L,
) -> Result<(), ConfigError> {
    for (module, function, limitations) in map.entries() {
        for identifier in limitations {
            if resolver.limitation_type(identifier).is_err() {
                return Err(ConfigError::UnknownLimitationType(
                    format!("{module}/{function}"),
                    identifier.to_string(),
                ));
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("config io error for {0}: {1}")]
    Io(PathBuf, String),
    /// Configuration file exceeds the size limit.
    #[error("config file exceeds size limit: {0}")]
    FileTooLarge(PathBuf),
    /// Configuration content failed to parse.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Anonymous user identifier is invalid.
    #[error("anonymous_user_id must be non-zero")]
    InvalidAnonymousUserId,
    /// Policy map defines too many modules.
    #[error("policy map defines too many modules: {0}")]
    TooManyModules(usize),
    /// Module defines too many functions.
    #[error("module {0} defines too many functions: {1}")]
    TooManyFunctions(String, usize),
    /// Function permits too many limitation identifiers.
    #[error("pair {0} permits too many limitation identifiers: {1}")]
    TooManyLimitations(String, usize),
    /// Module or function name is invalid.
    #[error("invalid {0} name: {1}")]
    InvalidName(String, String),
    /// Limitation identifier is invalid.
    #[error("invalid limitation identifier: {0}")]
    InvalidLimitationIdentifier(String),
    /// Limitation identifier listed twice for one pair.
    #[error("pair {0} lists limitation identifier twice: {1}")]
    DuplicateLimitationIdentifier(String, String),
    /// Limitation identifier has no registered type.
    #[error("pair {0} references unregistered limitation type: {1}")]
    UnknownLimitationType(String, String),
    /// Policy map construction failed.
    #[error(transparent)]
    PolicyMap(#[from] PolicyMapError),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Validates a module or function name.
fn validate_name(kind: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return Err(ConfigError::InvalidName(kind.to_string(), name.to_string()));
    }
    if !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(ConfigError::InvalidName(kind.to_string(), name.to_string()));
    }
    Ok(())
}

/// Validates a limitation identifier.
fn validate_limitation_identifier(identifier: &str) -> Result<(), ConfigError> {
    if identifier.is_empty() || identifier.len() > MAX_LIMITATION_IDENTIFIER_LENGTH {
        return Err(ConfigError::InvalidLimitationIdentifier(identifier.to_string()));
    }
    if !identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidLimitationIdentifier(identifier.to_string()));
    }
    Ok(())
}
