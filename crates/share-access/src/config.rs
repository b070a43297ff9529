//! # Access Configuration
//!
//! The four access slots attached to every resource, plus the partial
//! update shapes used when only some of them change.

use serde::{Deserialize, Serialize};

use crate::levels::AccessLevel;

/// One of the four access slots on a resource.
///
/// Slots are ordered from the narrowest audience (owner) to the broadest
/// (public). Each slot may grant at most what the previous one grants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessField {
    /// Level granted to the owning account.
    #[serde(rename = "owner_access")]
    Owner,
    /// Level granted to accounts on the owner's team.
    #[serde(rename = "team_access")]
    Team,
    /// Level granted to any signed-in account.
    #[serde(rename = "authenticated_access")]
    Authenticated,
    /// Level granted to everyone, including anonymous requests.
    #[serde(rename = "public_access")]
    Public,
}

impl AccessField {
    /// Wire name of the field (e.g. `"team_access"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessField::Owner => "owner_access",
            AccessField::Team => "team_access",
            AccessField::Authenticated => "authenticated_access",
            AccessField::Public => "public_access",
        }
    }

    /// Audience name used in human-readable messages (e.g. `"team"`).
    pub fn audience(&self) -> &'static str {
        match self {
            AccessField::Owner => "owner",
            AccessField::Team => "team",
            AccessField::Authenticated => "authenticated",
            AccessField::Public => "public",
        }
    }

    /// Parse a field from its wire name.
    ///
    /// `author_access` is accepted as an alias of `owner_access`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner_access" | "author_access" => Some(AccessField::Owner),
            "team_access" => Some(AccessField::Team),
            "authenticated_access" => Some(AccessField::Authenticated),
            "public_access" => Some(AccessField::Public),
            _ => None,
        }
    }

    /// All fields, narrowest audience first.
    pub fn all() -> [Self; 4] {
        [
            AccessField::Owner,
            AccessField::Team,
            AccessField::Authenticated,
            AccessField::Public,
        ]
    }

    /// The next narrower audience this field is bounded by, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use share_access::AccessField;
    ///
    /// assert_eq!(AccessField::Team.bounded_by(), Some(AccessField::Owner));
    /// assert_eq!(AccessField::Owner.bounded_by(), None);
    /// ```
    pub fn bounded_by(&self) -> Option<Self> {
        match self {
            AccessField::Owner => None,
            AccessField::Team => Some(AccessField::Owner),
            AccessField::Authenticated => Some(AccessField::Team),
            AccessField::Public => Some(AccessField::Authenticated),
        }
    }

    /// Levels this field may hold.
    ///
    /// Owners always have write access, and public access never includes
    /// write.
    pub fn allowed_levels(&self) -> &'static [AccessLevel] {
        match self {
            AccessField::Owner => &[AccessLevel::Write],
            AccessField::Public => &[AccessLevel::None, AccessLevel::Read],
            AccessField::Team | AccessField::Authenticated => {
                &[AccessLevel::None, AccessLevel::Read, AccessLevel::Write]
            }
        }
    }

    /// Check if `level` is within this field's domain.
    pub fn allows(&self, level: AccessLevel) -> bool {
        self.allowed_levels().contains(&level)
    }
}

/// Access configuration of a single resource.
///
/// A persisted configuration satisfies `public <= authenticated <= team <=
/// owner`. That invariant is checked by
/// [`AccessHierarchyValidator`](crate::validator::AccessHierarchyValidator)
/// when a configuration is written; this type itself does not enforce it,
/// since snapshots loaded from storage are taken as given.
///
/// # Example
///
/// ```
/// use share_access::{AccessConfig, AccessLevel};
///
/// let config = AccessConfig::default();
/// assert_eq!(config.owner_access, AccessLevel::Write);
/// assert_eq!(config.team_access, AccessLevel::None);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AccessConfig {
    /// Level granted to the owner.
    #[serde(alias = "author_access")]
    pub owner_access: AccessLevel,
    /// Level granted to the owner's teammates.
    pub team_access: AccessLevel,
    /// Level granted to any authenticated account.
    pub authenticated_access: AccessLevel,
    /// Level granted to everyone.
    pub public_access: AccessLevel,
}

impl AccessConfig {
    /// Create a configuration from four levels without validating it.
    pub fn new(
        owner_access: AccessLevel,
        team_access: AccessLevel,
        authenticated_access: AccessLevel,
        public_access: AccessLevel,
    ) -> Self {
        Self {
            owner_access,
            team_access,
            authenticated_access,
            public_access,
        }
    }

    /// Owner-only configuration (the creation default).
    pub fn private() -> Self {
        Self::new(
            AccessLevel::Write,
            AccessLevel::None,
            AccessLevel::None,
            AccessLevel::None,
        )
    }

    /// Readable by everyone, writable by the owner only.
    pub fn public_read() -> Self {
        Self::new(
            AccessLevel::Write,
            AccessLevel::Read,
            AccessLevel::Read,
            AccessLevel::Read,
        )
    }

    /// Get the level held by `field`.
    pub fn level(&self, field: AccessField) -> AccessLevel {
        match field {
            AccessField::Owner => self.owner_access,
            AccessField::Team => self.team_access,
            AccessField::Authenticated => self.authenticated_access,
            AccessField::Public => self.public_access,
        }
    }

    /// Set the level held by `field`.
    pub fn set_level(&mut self, field: AccessField, level: AccessLevel) {
        match field {
            AccessField::Owner => self.owner_access = level,
            AccessField::Team => self.team_access = level,
            AccessField::Authenticated => self.authenticated_access = level,
            AccessField::Public => self.public_access = level,
        }
    }

    /// Check if this configuration would pass validation.
    pub fn is_valid(&self) -> bool {
        crate::validator::AccessHierarchyValidator::new()
            .validate(self)
            .is_empty()
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::private()
    }
}

/// Partial access update: unset fields keep their current value.
///
/// # Example
///
/// ```
/// use share_access::{AccessConfig, AccessConfigPatch, AccessLevel};
///
/// let current = AccessConfig::public_read();
/// let patch = AccessConfigPatch::new().with(share_access::AccessField::Public, AccessLevel::None);
///
/// let next = patch.resolve(&current);
/// assert_eq!(next.public_access, AccessLevel::None);
/// assert_eq!(next.team_access, AccessLevel::Read);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessConfigPatch {
    #[serde(default, alias = "author_access", skip_serializing_if = "Option::is_none")]
    pub owner_access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_access: Option<AccessLevel>,
}

impl AccessConfigPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `level` in this patch.
    pub fn with(mut self, field: AccessField, level: AccessLevel) -> Self {
        *self.slot_mut(field) = Some(level);
        self
    }

    /// Get the proposed level for `field`, if any.
    pub fn get(&self, field: AccessField) -> Option<AccessLevel> {
        match field {
            AccessField::Owner => self.owner_access,
            AccessField::Team => self.team_access,
            AccessField::Authenticated => self.authenticated_access,
            AccessField::Public => self.public_access,
        }
    }

    /// Check if the patch proposes no change.
    pub fn is_empty(&self) -> bool {
        AccessField::all().iter().all(|f| self.get(*f).is_none())
    }

    /// Apply the patch on top of `base`.
    pub fn resolve(&self, base: &AccessConfig) -> AccessConfig {
        let mut config = *base;
        for field in AccessField::all() {
            if let Some(level) = self.get(field) {
                config.set_level(field, level);
            }
        }
        config
    }

    fn slot_mut(&mut self, field: AccessField) -> &mut Option<AccessLevel> {
        match field {
            AccessField::Owner => &mut self.owner_access,
            AccessField::Team => &mut self.team_access,
            AccessField::Authenticated => &mut self.authenticated_access,
            AccessField::Public => &mut self.public_access,
        }
    }
}

impl From<AccessConfig> for AccessConfigPatch {
    fn from(config: AccessConfig) -> Self {
        Self {
            owner_access: Some(config.owner_access),
            team_access: Some(config.team_access),
            authenticated_access: Some(config.authenticated_access),
            public_access: Some(config.public_access),
        }
    }
}

/// Partial access update as received from a collaborator, before the values
/// are known to be levels at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawAccessPatch {
    #[serde(default, alias = "author_access", skip_serializing_if = "Option::is_none")]
    pub owner_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_access: Option<String>,
}

impl RawAccessPatch {
    /// Get the raw proposed value for `field`, if any.
    pub fn get(&self, field: AccessField) -> Option<&str> {
        match field {
            AccessField::Owner => self.owner_access.as_deref(),
            AccessField::Team => self.team_access.as_deref(),
            AccessField::Authenticated => self.authenticated_access.as_deref(),
            AccessField::Public => self.public_access.as_deref(),
        }
    }

    /// Set the raw value for `field`.
    pub fn with(mut self, field: AccessField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            AccessField::Owner => self.owner_access = value,
            AccessField::Team => self.team_access = value,
            AccessField::Authenticated => self.authenticated_access = value,
            AccessField::Public => self.public_access = value,
        }
        self
    }
}
