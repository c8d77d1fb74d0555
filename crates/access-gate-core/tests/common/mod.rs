// access-gate-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared fakes and fixtures for engine integration tests.
// Purpose: Reduce duplication across integration tests for access-gate-core.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use access_gate_core::ContentId;
use access_gate_core::ContentInfo;
use access_gate_core::ContentTypeId;
use access_gate_core::Limitation;
use access_gate_core::LimitationError;
use access_gate_core::LimitationIdentifier;
use access_gate_core::LimitationNotFoundError;
use access_gate_core::LimitationType;
use access_gate_core::LimitationTypeResolver;
use access_gate_core::Location;
use access_gate_core::LocationId;
use access_gate_core::LocationPath;
use access_gate_core::PolicyMap;
use access_gate_core::RoleId;
use access_gate_core::RoleStatus;
use access_gate_core::RoleStore;
use access_gate_core::RoleSubject;
use access_gate_core::SectionId;
use access_gate_core::StoreError;
use access_gate_core::StoredLimitation;
use access_gate_core::StoredPolicy;
use access_gate_core::StoredRole;
use access_gate_core::StoredRoleAssignment;
use access_gate_core::Target;
use access_gate_core::UserId;
use access_gate_core::UserReference;
use access_gate_core::ValidationError;

/// Limitation type returning a fixed decision and counting evaluations.
pub struct FixedLimitationType {
    /// Decision returned by every evaluation.
    decision: bool,
    /// Shared evaluation counter.
    evaluations: Rc<Cell<usize>>,
}

impl FixedLimitationType {
    /// Creates a fixed-decision type along with its evaluation counter.
    pub fn new(decision: bool) -> (Self, Rc<Cell<usize>>) {
        let evaluations = Rc::new(Cell::new(0));
        (
            Self {
                decision,
                evaluations: Rc::clone(&evaluations),
            },
            evaluations,
        )
    }
}

impl LimitationType for FixedLimitationType {
    fn accept_value(&self, _limitation: &Limitation) -> Result<(), LimitationError> {
        Ok(())
    }

    fn validate(&self, _limitation: &Limitation) -> Vec<ValidationError> {
        Vec::new()
    }

    fn evaluate(
        &self,
        _limitation: &Limitation,
        _user: &UserReference,
        _target: &Target,
        _context: &[Target],
    ) -> Result<bool, LimitationError> {
        self.evaluations.set(self.evaluations.get() + 1);
        Ok(self.decision)
    }
}

/// Limitation type that grants only for listed values and counts evaluations.
pub struct ValueMatchLimitationType {
    /// Value that grants; any other value denies.
    granting_value: String,
    /// Shared evaluation counter.
    evaluations: Rc<Cell<usize>>,
}

impl ValueMatchLimitationType {
    /// Creates a value-matching type along with its evaluation counter.
    pub fn new(granting_value: &str) -> (Self, Rc<Cell<usize>>) {
        let evaluations = Rc::new(Cell::new(0));
        (
            Self {
                granting_value: granting_value.to_string(),
                evaluations: Rc::clone(&evaluations),
            },
            evaluations,
        )
    }
}

impl LimitationType for ValueMatchLimitationType {
    fn accept_value(&self, limitation: &Limitation) -> Result<(), LimitationError> {
        if limitation.values.is_empty() {
            return Err(LimitationError::MalformedValue {
                identifier: limitation.identifier.clone(),
                message: "at least one value required".to_string(),
            });
        }
        Ok(())
    }

    fn validate(&self, limitation: &Limitation) -> Vec<ValidationError> {
        if limitation.values.is_empty() {
            vec![ValidationError::new("at least one value required")]
        } else {
            Vec::new()
        }
    }

    fn evaluate(
        &self,
        limitation: &Limitation,
        _user: &UserReference,
        _target: &Target,
        _context: &[Target],
    ) -> Result<bool, LimitationError> {
        self.evaluations.set(self.evaluations.get() + 1);
        Ok(limitation.values.iter().any(|value| value == &self.granting_value))
    }
}

/// Resolver over boxed limitation types that records every resolution.
pub struct RecordingResolver {
    /// Registered types keyed by identifier.
    types: BTreeMap<String, Box<dyn LimitationType>>,
    /// Identifiers in resolution order.
    resolutions: RefCell<Vec<String>>,
}

impl RecordingResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
            resolutions: RefCell::new(Vec::new()),
        }
    }

    /// Registers a limitation type under an identifier.
    pub fn insert(&mut self, identifier: &str, limitation_type: impl LimitationType + 'static) {
        self.types.insert(identifier.to_string(), Box::new(limitation_type));
    }

    /// Returns how often the identifier was resolved.
    pub fn resolution_count(&self, identifier: &str) -> usize {
        self.resolutions.borrow().iter().filter(|resolved| *resolved == identifier).count()
    }

    /// Returns the total number of resolutions.
    pub fn total_resolutions(&self) -> usize {
        self.resolutions.borrow().len()
    }
}

impl LimitationTypeResolver for RecordingResolver {
    fn limitation_type(
        &self,
        identifier: &LimitationIdentifier,
    ) -> Result<&dyn LimitationType, LimitationNotFoundError> {
        self.resolutions.borrow_mut().push(identifier.as_str().to_string());
        self.types
            .get(identifier.as_str())
            .map(|limitation_type| limitation_type.as_ref())
            .ok_or_else(|| LimitationNotFoundError::new(identifier.clone()))
    }
}

/// In-memory role store with call counters.
pub struct FakeRoleStore {
    /// Assignments keyed by user identifier.
    assignments: BTreeMap<u64, Vec<StoredRoleAssignment>>,
    /// Roles keyed by role identifier.
    roles: BTreeMap<u64, StoredRole>,
    /// Number of assignment loads performed.
    assignment_loads: Cell<usize>,
    /// Number of role loads performed.
    role_loads: Cell<usize>,
}

impl FakeRoleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
            roles: BTreeMap::new(),
            assignment_loads: Cell::new(0),
            role_loads: Cell::new(0),
        }
    }

    /// Inserts a role record.
    pub fn insert_role(&mut self, role: StoredRole) {
        self.roles.insert(role.id.value(), role);
    }

    /// Assigns a role to a user.
    pub fn assign(&mut self, user_id: u64, assignment: StoredRoleAssignment) {
        self.assignments.entry(user_id).or_default().push(assignment);
    }

    /// Returns how many times assignments were loaded.
    pub fn assignment_loads(&self) -> usize {
        self.assignment_loads.get()
    }

    /// Returns how many times roles were loaded.
    pub fn role_loads(&self) -> usize {
        self.role_loads.get()
    }
}

impl RoleStore for FakeRoleStore {
    fn role_assignments_for(
        &self,
        user_id: UserId,
        _inherited: bool,
    ) -> Result<Vec<StoredRoleAssignment>, StoreError> {
        self.assignment_loads.set(self.assignment_loads.get() + 1);
        Ok(self.assignments.get(&user_id.value()).cloned().unwrap_or_default())
    }

    fn load_role(&self, role_id: RoleId) -> Result<StoredRole, StoreError> {
        self.role_loads.set(self.role_loads.get() + 1);
        self.roles.get(&role_id.value()).cloned().ok_or(StoreError::RoleNotFound(role_id))
    }
}

/// Builds a stored limitation from string values.
pub fn stored_limitation(identifier: &str, values: &[&str]) -> StoredLimitation {
    StoredLimitation {
        identifier: LimitationIdentifier::new(identifier),
        values: values.iter().map(ToString::to_string).collect(),
    }
}

/// Builds a stored policy from raw selector strings.
pub fn stored_policy(module: &str, function: &str, limitations: Vec<StoredLimitation>) -> StoredPolicy {
    StoredPolicy {
        module: module.to_string(),
        function: function.to_string(),
        limitations,
    }
}

/// Builds a published role with the given policies.
pub fn published_role(id: u64, policies: Vec<StoredPolicy>) -> StoredRole {
    StoredRole {
        id: RoleId::new(id),
        status: RoleStatus::Published,
        policies,
    }
}

/// Builds a draft role with the given policies.
pub fn draft_role(id: u64, policies: Vec<StoredPolicy>) -> StoredRole {
    StoredRole {
        id: RoleId::new(id),
        status: RoleStatus::Draft,
        policies,
    }
}

/// Builds a user role assignment, optionally scoped by a limitation.
pub fn user_assignment(
    role_id: u64,
    user_id: u64,
    limitation: Option<StoredLimitation>,
) -> StoredRoleAssignment {
    StoredRoleAssignment {
        role_id: RoleId::new(role_id),
        subject: RoleSubject::User {
            user_id: UserId::new(user_id),
        },
        limitation,
    }
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

/// Builds a policy map from module/function pairs without limitation identifiers.
///
/// # Panics
///
/// Panics on duplicate pairs; fixtures use unique pairs.
pub fn policy_map_with(pairs: &[(&str, &str)]) -> PolicyMap {
    let mut map = PolicyMap::new();
    for (module, function) in pairs {
        map.insert_function(*module, *function, Vec::new())
            .unwrap_or_else(|err| panic!("bad fixture pair: {err}"));
    }
    map
}
