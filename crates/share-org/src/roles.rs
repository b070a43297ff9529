//! Account roles
//!
//! This module defines the roles an account can hold on the platform.
//! Roles are coarse: only `admin` carries meaning for access decisions.

use serde::{Deserialize, Serialize};

/// Role held by an account.
///
/// # Permission Model
///
/// - **Blogger**: Regular author; access to posts is decided per post
/// - **Admin**: Elevated; bypasses per-post access configuration
///
/// # Examples
///
/// ```
/// use share_org::UserRole;
///
/// assert!(UserRole::Admin.is_admin());
/// assert!(!UserRole::Blogger.is_admin());
/// assert_eq!(UserRole::default(), UserRole::Blogger);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Site administrator
    Admin,

    /// Regular author
    #[default]
    Blogger,
}

impl UserRole {
    /// Check if this role has admin privileges.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(UserRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use share_org::UserRole;
    ///
    /// assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
    /// assert_eq!(UserRole::parse("BLOGGER"), Some(UserRole::Blogger));
    /// assert_eq!(UserRole::parse("editor"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "blogger" => Some(Self::Blogger),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Blogger => "blogger",
        }
    }
}
