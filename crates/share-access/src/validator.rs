//! # Hierarchy Validation
//!
//! Checks candidate access configurations before they are written.
//!
//! Two kinds of problems are reported, per field, in a single pass:
//! - **Invalid values**: a level outside the field's domain (owner must be
//!   `write`, public can never be `write`), or a raw value that is not a level
//! - **Hierarchy violations**: a broader audience granted more than the next
//!   narrower one (`team > owner`, `authenticated > team`, `public > authenticated`)
//!
//! Nothing is ever corrected; the caller rejects the write.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AccessConfig, AccessConfigPatch, AccessField, RawAccessPatch};
use crate::levels::AccessLevel;

/// Per-field validation messages.
///
/// Serializes as a map from field wire name to a list of messages, which is
/// the shape the HTTP layer returns to clients:
///
/// ```json
/// { "team_access": ["team access cannot exceed owner access"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", summarize(&.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<AccessField, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: AccessField, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Check if no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if `field` has any error.
    pub fn contains(&self, field: AccessField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: AccessField) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields with errors, narrowest audience first.
    pub fn fields(&self) -> Vec<AccessField> {
        self.errors.keys().copied().collect()
    }

    /// Iterate over `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AccessField, &[String])> {
        self.errors.iter().map(|(f, m)| (*f, m.as_slice()))
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &BTreeMap<AccessField, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field.as_str(), messages.join("; ")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn invalid_choice(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

fn exceeds(field: AccessField, bound: AccessField) -> String {
    format!(
        "{} access cannot exceed {} access",
        field.audience(),
        bound.audience()
    )
}

/// Validates access configurations against the audience hierarchy.
///
/// # Example
///
/// ```
/// use share_access::{AccessConfig, AccessField, AccessHierarchyValidator, AccessLevel};
///
/// let validator = AccessHierarchyValidator::new();
///
/// let ok = AccessConfig::new(AccessLevel::Write, AccessLevel::Write, AccessLevel::Read, AccessLevel::None);
/// assert!(validator.validate(&ok).is_empty());
///
/// let bad = AccessConfig::new(AccessLevel::Write, AccessLevel::Read, AccessLevel::Write, AccessLevel::None);
/// let errors = validator.validate(&bad);
/// assert_eq!(
///     errors.get(AccessField::Authenticated),
///     ["authenticated access cannot exceed team access"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessHierarchyValidator {
    owner_default: AccessLevel,
}

impl Default for AccessHierarchyValidator {
    fn default() -> Self {
        Self {
            owner_default: AccessLevel::Write,
        }
    }
}

impl AccessHierarchyValidator {
    /// Create a validator whose creation default for the owner is `write`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the owner level assumed on create when none is supplied.
    pub fn with_owner_default(mut self, level: AccessLevel) -> Self {
        self.owner_default = level;
        self
    }

    /// Validate a complete candidate configuration.
    ///
    /// Returns an empty collection when the configuration is acceptable.
    pub fn validate(&self, config: &AccessConfig) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.check(config, &BTreeSet::new(), &mut errors);
        errors
    }

    /// Resolve and validate a partial update.
    ///
    /// Fields missing from `patch` inherit from `current` (the persisted
    /// configuration), or from the creation defaults when `current` is
    /// `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use share_access::{AccessConfig, AccessConfigPatch, AccessField, AccessHierarchyValidator, AccessLevel};
    ///
    /// let validator = AccessHierarchyValidator::new();
    /// let patch = AccessConfigPatch::new().with(AccessField::Team, AccessLevel::Read);
    ///
    /// let created = validator.validate_patch(&patch, None).unwrap();
    /// assert_eq!(created.owner_access, AccessLevel::Write);
    /// assert_eq!(created.team_access, AccessLevel::Read);
    /// ```
    pub fn validate_patch(
        &self,
        patch: &AccessConfigPatch,
        current: Option<&AccessConfig>,
    ) -> Result<AccessConfig, ValidationErrors> {
        let candidate = patch.resolve(&self.base(current));
        let mut errors = ValidationErrors::new();
        self.check(&candidate, &BTreeSet::new(), &mut errors);
        Self::finish(candidate, errors)
    }

    /// Resolve and validate a partial update given as raw strings.
    ///
    /// Values that are not levels at all are reported as invalid choices and
    /// left out of the ordering comparisons.
    pub fn validate_raw(
        &self,
        raw: &RawAccessPatch,
        current: Option<&AccessConfig>,
    ) -> Result<AccessConfig, ValidationErrors> {
        let mut candidate = self.base(current);
        let mut errors = ValidationErrors::new();
        let mut unparsed = BTreeSet::new();

        for field in AccessField::all() {
            let Some(value) = raw.get(field) else {
                continue;
            };
            match AccessLevel::parse(value) {
                Some(level) => candidate.set_level(field, level),
                None => {
                    errors.add(field, invalid_choice(value));
                    unparsed.insert(field);
                }
            }
        }

        self.check(&candidate, &unparsed, &mut errors);
        Self::finish(candidate, errors)
    }

    fn base(&self, current: Option<&AccessConfig>) -> AccessConfig {
        match current {
            Some(config) => *config,
            None => AccessConfig {
                owner_access: self.owner_default,
                ..AccessConfig::default()
            },
        }
    }

    fn check(
        &self,
        config: &AccessConfig,
        skip: &BTreeSet<AccessField>,
        errors: &mut ValidationErrors,
    ) {
        for field in AccessField::all() {
            if skip.contains(&field) {
                continue;
            }
            let level = config.level(field);
            if !field.allows(level) {
                errors.add(field, invalid_choice(level.as_str()));
            }
            if let Some(bound) = field.bounded_by() {
                if !skip.contains(&bound) && level > config.level(bound) {
                    errors.add(field, exceeds(field, bound));
                }
            }
        }
    }

    fn finish(
        candidate: AccessConfig,
        errors: ValidationErrors,
    ) -> Result<AccessConfig, ValidationErrors> {
        if errors.is_empty() {
            debug!(config = ?candidate, "Accepted access configuration");
        } else {
            warn!(fields = ?errors.fields(), "Rejected access configuration");
        }
        errors.into_result(candidate)
    }
}
