//! Actor and owner snapshots
//!
//! This module provides the identity snapshots consumed by access decisions.
//! An [`Actor`] describes who is making a request; an [`OwnerRef`] describes
//! who owns the resource being accessed. Both are plain values resolved by
//! the caller before evaluation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::UserRole;

/// The identity making a request.
///
/// Anonymous actors have no id and are never elevated. Authenticated actors
/// always carry an id; they may belong to a team.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use share_org::Actor;
///
/// let anon = Actor::anonymous();
/// assert!(!anon.authenticated);
/// assert!(anon.id.is_none());
///
/// let user = Actor::user(Uuid::now_v7(), None);
/// assert!(user.authenticated);
/// assert!(!user.elevated);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Actor {
    /// Account id (None for anonymous requests)
    pub id: Option<Uuid>,

    /// Whether the request carries a valid identity
    pub authenticated: bool,

    /// Superuser or admin role; bypasses per-resource access configuration
    pub elevated: bool,

    /// Team the account belongs to, if any
    pub team_id: Option<Uuid>,
}

impl Actor {
    /// Creates an anonymous actor.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            authenticated: false,
            elevated: false,
            team_id: None,
        }
    }

    /// Creates an authenticated, non-elevated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The account id
    /// * `team_id` - The account's team, if any
    pub fn user(id: Uuid, team_id: Option<Uuid>) -> Self {
        Self {
            id: Some(id),
            authenticated: true,
            elevated: false,
            team_id,
        }
    }

    /// Creates an authenticated, elevated actor.
    pub fn elevated(id: Uuid, team_id: Option<Uuid>) -> Self {
        Self {
            elevated: true,
            ..Self::user(id, team_id)
        }
    }

    /// Builds an actor from resolved account attributes.
    ///
    /// The actor is elevated when the account is a superuser or holds the
    /// admin role.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use share_org::{Actor, UserRole};
    ///
    /// let blogger = Actor::from_account(Uuid::now_v7(), UserRole::Blogger, false, None);
    /// assert!(!blogger.elevated);
    ///
    /// let root = Actor::from_account(Uuid::now_v7(), UserRole::Blogger, true, None);
    /// assert!(root.elevated);
    /// ```
    pub fn from_account(id: Uuid, role: UserRole, is_superuser: bool, team_id: Option<Uuid>) -> Self {
        Self {
            elevated: is_superuser || role.is_admin(),
            ..Self::user(id, team_id)
        }
    }

    /// Check if this actor owns the resource described by `owner`.
    ///
    /// Ownership needs an authenticated identity.
    pub fn is_owner_of(&self, owner: &OwnerRef) -> bool {
        self.authenticated && self.id == Some(owner.id)
    }

    /// Check if this actor is on the same team as `owner`.
    ///
    /// Both sides must have a team; two team-less accounts are never
    /// considered teammates.
    pub fn shares_team_with(&self, owner: &OwnerRef) -> bool {
        match (self.team_id, owner.team_id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

/// Snapshot of the account owning a resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    /// Owner account id
    pub id: Uuid,

    /// Owner's team at evaluation time
    pub team_id: Option<Uuid>,
}

impl OwnerRef {
    /// Creates an owner snapshot.
    pub fn new(id: Uuid, team_id: Option<Uuid>) -> Self {
        Self { id, team_id }
    }

    /// The owner snapshot for resources created by `actor`.
    ///
    /// Returns `None` for anonymous actors, which cannot own resources.
    pub fn of(actor: &Actor) -> Option<Self> {
        actor.id.map(|id| Self::new(id, actor.team_id))
    }
}
