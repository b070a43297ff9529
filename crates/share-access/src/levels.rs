//! # Access Levels
//!
//! Defines the totally ordered access levels granted on a resource.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;

/// Level of access granted on a resource.
///
/// Levels are totally ordered: `None < Read < Write`. Every comparison in
/// the engine goes through this order, so a higher level always includes
/// everything a lower level allows:
/// - **None**: Resource is invisible
/// - **Read**: Resource can be viewed and listed
/// - **Write**: Resource can also be edited and deleted
///
/// The serialized form is the lowercase name (`"none"`, `"read"`, `"write"`),
/// which is also the value exchanged with persistence and HTTP collaborators.
///
/// # Example
///
/// ```
/// use share_access::AccessLevel;
///
/// assert!(AccessLevel::Write > AccessLevel::Read);
/// assert!(AccessLevel::Read > AccessLevel::None);
/// assert_eq!("read".parse::<AccessLevel>().unwrap(), AccessLevel::Read);
/// ```
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// No access.
    #[default]
    None = 0,

    /// View access.
    Read = 1,

    /// Edit and delete access.
    Write = 2,
}

impl AccessLevel {
    /// Get the string representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Read => "read",
            AccessLevel::Write => "write",
        }
    }

    /// Parse a level from its wire value.
    ///
    /// Unlike action parsing there are no aliases: the three lowercase names
    /// are the literal contract values.
    ///
    /// # Example
    ///
    /// ```
    /// use share_access::AccessLevel;
    ///
    /// assert_eq!(AccessLevel::parse("write"), Some(AccessLevel::Write));
    /// assert_eq!(AccessLevel::parse("Write"), None);
    /// assert_eq!(AccessLevel::parse("admin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(AccessLevel::None),
            "read" => Some(AccessLevel::Read),
            "write" => Some(AccessLevel::Write),
            _ => None,
        }
    }

    /// Get all levels in ascending order.
    pub fn all() -> [Self; 3] {
        [AccessLevel::None, AccessLevel::Read, AccessLevel::Write]
    }

    /// Levels that allow viewing a resource.
    pub fn readable() -> [Self; 2] {
        [AccessLevel::Read, AccessLevel::Write]
    }

    /// Check if this level allows viewing.
    pub fn can_read(&self) -> bool {
        *self >= AccessLevel::Read
    }

    /// Check if this level allows editing and deleting.
    pub fn can_write(&self) -> bool {
        *self == AccessLevel::Write
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AccessError::InvalidLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert!(AccessLevel::None < AccessLevel::Read);
        assert!(AccessLevel::Read < AccessLevel::Write);
        assert_eq!(
            AccessLevel::all().iter().copied().max(),
            Some(AccessLevel::Write)
        );
        assert_eq!(AccessLevel::default(), AccessLevel::None);
    }

    #[test]
    fn test_level_parsing() {
        for level in AccessLevel::all() {
            assert_eq!(AccessLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(AccessLevel::parse("public"), None);
        assert!("author".parse::<AccessLevel>().is_err());
    }

    #[test]
    fn test_level_predicates() {
        assert!(!AccessLevel::None.can_read());
        assert!(AccessLevel::Read.can_read());
        assert!(AccessLevel::Write.can_read());

        assert!(!AccessLevel::Read.can_write());
        assert!(AccessLevel::Write.can_write());
    }

    #[test]
    fn test_level_serde() {
        assert_eq!(serde_json::to_string(&AccessLevel::Write).unwrap(), "\"write\"");
        let level: AccessLevel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(level, AccessLevel::None);
        assert!(serde_json::from_str::<AccessLevel>("\"team\"").is_err());
    }
}
