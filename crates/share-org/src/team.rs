//! Team domain model
//!
//! Teams group accounts inside a tenant. A post's team-level grant applies
//! to every account on the same team as the post's owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the team accounts land in when registered without one.
pub const DEFAULT_TEAM_NAME: &str = "Default Team";

/// A team of accounts.
///
/// # Examples
///
/// ```
/// use share_org::Team;
///
/// let team = Team::new("Team A");
/// assert_eq!(team.name, "Team A");
/// assert!(!team.is_default());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    /// Unique identifier for the team
    pub id: Uuid,

    /// Unique team name
    pub name: String,

    /// When the team was created
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new team with a fresh UUID v7 id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates the fallback team used for accounts registered without a team.
    ///
    /// ```
    /// use share_org::{Team, DEFAULT_TEAM_NAME};
    ///
    /// let team = Team::default_team();
    /// assert_eq!(team.name, DEFAULT_TEAM_NAME);
    /// assert!(team.is_default());
    /// ```
    pub fn default_team() -> Self {
        Self::new(DEFAULT_TEAM_NAME)
    }

    /// Check if this is the fallback team.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_TEAM_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let a = Team::new("Team A");
        let b = Team::new("Team A");

        assert_eq!(a.name, "Team A");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_team() {
        let team = Team::default_team();
        assert!(team.is_default());
        assert!(!Team::new("Team B").is_default());
    }
}
