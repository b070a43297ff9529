//! Access policy configuration.
//!
//! Controls the access configuration new posts receive when the author does
//! not choose one, and whether the admin role elevates an account. Loaded
//! from environment variables with defaults matching a private-by-default
//! deployment.

use share_access::{AccessConfig, AccessField, AccessHierarchyValidator, AccessLevel, ValidationErrors};
use share_org::{Actor, UserRole};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },

    /// Configured creation defaults violate the access hierarchy.
    #[error("Invalid default access configuration: {0}")]
    InvalidDefaults(#[from] ValidationErrors),
}

/// Deployment-wide access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Configuration applied to fields a new post does not set.
    pub default_access: AccessConfig,

    /// Whether accounts with the admin role bypass per-post access.
    pub admin_role_elevates: bool,
}

impl Default for AccessPolicy {
    /// Private posts, admins elevated.
    fn default() -> Self {
        Self {
            default_access: AccessConfig::private(),
            admin_role_elevates: true,
        }
    }
}

impl AccessPolicy {
    /// Load the policy from environment variables.
    ///
    /// Environment variables:
    /// - `SHARE_DEFAULT_TEAM_ACCESS`: team level for new posts (default: none)
    /// - `SHARE_DEFAULT_AUTHENTICATED_ACCESS`: signed-in level for new posts (default: none)
    /// - `SHARE_DEFAULT_PUBLIC_ACCESS`: anonymous level for new posts (default: none)
    /// - `SHARE_ADMIN_ROLE_ELEVATES`: whether the admin role elevates (default: true)
    ///
    /// The owner level of new posts is always `write`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let mut access = default.default_access;

        for (key, field) in [
            ("SHARE_DEFAULT_TEAM_ACCESS", AccessField::Team),
            ("SHARE_DEFAULT_AUTHENTICATED_ACCESS", AccessField::Authenticated),
            ("SHARE_DEFAULT_PUBLIC_ACCESS", AccessField::Public),
        ] {
            if let Some(value) = lookup(key) {
                let level = AccessLevel::parse(value.trim()).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected one of none, read, write; got {value:?}"),
                })?;
                access.set_level(field, level);
            }
        }

        let admin_role_elevates = match lookup("SHARE_ADMIN_ROLE_ELEVATES") {
            Some(value) => parse_bool("SHARE_ADMIN_ROLE_ELEVATES", &value)?,
            None => default.admin_role_elevates,
        };

        let policy = Self::new(access, admin_role_elevates)?;
        info!(
            team = %policy.default_access.team_access,
            authenticated = %policy.default_access.authenticated_access,
            public = %policy.default_access.public_access,
            admin_role_elevates = policy.admin_role_elevates,
            "Loaded access policy"
        );
        Ok(policy)
    }

    /// Create a policy, rejecting defaults that violate the hierarchy.
    pub fn new(default_access: AccessConfig, admin_role_elevates: bool) -> Result<Self, ConfigError> {
        AccessHierarchyValidator::new()
            .validate(&default_access)
            .into_result(())?;
        Ok(Self {
            default_access,
            admin_role_elevates,
        })
    }

    /// Build the request actor for a signed-in account.
    pub fn actor_for(
        &self,
        id: Uuid,
        role: UserRole,
        is_superuser: bool,
        team_id: Option<Uuid>,
    ) -> Actor {
        let role = if self.admin_role_elevates {
            role
        } else {
            UserRole::Blogger
        };
        Actor::from_account(id, role, is_superuser, team_id)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean; got {value:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let policy = AccessPolicy::from_lookup(lookup(&[])).unwrap();
        assert_eq!(policy, AccessPolicy::default());
        assert_eq!(policy.default_access, AccessConfig::private());
    }

    #[test]
    fn test_reads_levels_and_flag() {
        let policy = AccessPolicy::from_lookup(lookup(&[
            ("SHARE_DEFAULT_TEAM_ACCESS", "write"),
            ("SHARE_DEFAULT_AUTHENTICATED_ACCESS", "read"),
            ("SHARE_DEFAULT_PUBLIC_ACCESS", " read "),
            ("SHARE_ADMIN_ROLE_ELEVATES", "false"),
        ]))
        .unwrap();

        assert_eq!(policy.default_access.team_access, AccessLevel::Write);
        assert_eq!(policy.default_access.authenticated_access, AccessLevel::Read);
        assert_eq!(policy.default_access.public_access, AccessLevel::Read);
        assert!(!policy.admin_role_elevates);
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = AccessPolicy::from_lookup(lookup(&[("SHARE_DEFAULT_TEAM_ACCESS", "admin")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "SHARE_DEFAULT_TEAM_ACCESS"));
    }

    #[test]
    fn test_rejects_bad_flag() {
        let err = AccessPolicy::from_lookup(lookup(&[("SHARE_ADMIN_ROLE_ELEVATES", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_defaults_breaking_hierarchy() {
        let err = AccessPolicy::from_lookup(lookup(&[("SHARE_DEFAULT_PUBLIC_ACCESS", "read")]))
            .unwrap_err();

        let ConfigError::InvalidDefaults(errors) = err else {
            panic!("expected hierarchy errors");
        };
        assert!(errors.contains(AccessField::Public));
    }

    #[test]
    fn test_actor_for_respects_admin_flag() {
        let id = Uuid::now_v7();

        let policy = AccessPolicy::default();
        assert!(policy.actor_for(id, UserRole::Admin, false, None).elevated);
        assert!(!policy.actor_for(id, UserRole::Blogger, false, None).elevated);

        let strict = AccessPolicy::new(AccessConfig::private(), false).unwrap();
        assert!(!strict.actor_for(id, UserRole::Admin, false, None).elevated);
        assert!(strict.actor_for(id, UserRole::Blogger, true, None).elevated);
    }
}
