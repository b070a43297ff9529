//! # Permission Evaluation
//!
//! Resolves the single access level an actor holds on a resource.
//!
//! ## Precedence
//!
//! ```text
//! elevated actor           → write
//! owner                    → owner_access
//! anonymous                → public_access
//! any other signed-in user → max(public_access,
//!                                authenticated_access,
//!                                team_access if same team as owner)
//! ```
//!
//! Ownership short-circuits: the owner gets exactly `owner_access`, which the
//! hierarchy makes the ceiling of every other grant.

use share_org::Actor;
use tracing::debug;

use crate::filter::AccessFilter;
use crate::levels::AccessLevel;
use crate::resource::Resource;

/// Computes effective access levels and the predicates derived from them.
///
/// The evaluator holds no state; it can be shared freely across threads and
/// tasks.
///
/// # Example
///
/// ```
/// use share_access::{AccessConfig, AccessLevel, PermissionEvaluator, ResourceView};
/// use share_org::{Actor, OwnerRef};
/// use uuid::Uuid;
///
/// let team = Uuid::now_v7();
/// let post = ResourceView::new(
///     OwnerRef::new(Uuid::now_v7(), Some(team)),
///     AccessConfig::new(AccessLevel::Write, AccessLevel::Read, AccessLevel::Read, AccessLevel::None),
/// );
///
/// let evaluator = PermissionEvaluator::new();
/// let mate = Actor::user(Uuid::now_v7(), Some(team));
///
/// assert_eq!(evaluator.effective_level(&mate, &post), AccessLevel::Read);
/// assert!(evaluator.can_read(&mate, &post));
/// assert!(!evaluator.can_write(&mate, &post));
/// assert!(!evaluator.can_read(&Actor::anonymous(), &post));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionEvaluator;

impl PermissionEvaluator {
    /// Create an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Get the level `actor` holds on `resource`.
    pub fn effective_level<R: Resource + ?Sized>(&self, actor: &Actor, resource: &R) -> AccessLevel {
        let level = resolve(actor, resource);
        debug!(
            actor = ?actor.id,
            owner = %resource.owner().id,
            elevated = actor.elevated,
            level = %level,
            "Resolved effective access level"
        );
        level
    }

    /// Check if `actor` may view `resource`.
    pub fn can_read<R: Resource + ?Sized>(&self, actor: &Actor, resource: &R) -> bool {
        self.effective_level(actor, resource).can_read()
    }

    /// Check if `actor` may edit or delete `resource`.
    ///
    /// Deleting requires the same level as editing.
    pub fn can_write<R: Resource + ?Sized>(&self, actor: &Actor, resource: &R) -> bool {
        self.effective_level(actor, resource).can_write()
    }

    /// Build the predicate selecting every resource `actor` can read.
    ///
    /// For any resource whose configuration satisfies the hierarchy, the
    /// predicate matches exactly when [`can_read`](Self::can_read) is true.
    pub fn readable_filter(&self, actor: &Actor) -> AccessFilter {
        let filter = AccessFilter::readable_by(actor);
        debug!(actor = ?actor.id, filter = %filter, "Built readable filter");
        filter
    }
}

fn resolve<R: Resource + ?Sized>(actor: &Actor, resource: &R) -> AccessLevel {
    if actor.elevated {
        return AccessLevel::Write;
    }

    let owner = resource.owner();
    let access = resource.access();

    if actor.is_owner_of(&owner) {
        return access.owner_access;
    }

    if !actor.authenticated {
        return access.public_access;
    }

    let mut level = access.public_access.max(access.authenticated_access);
    if actor.shares_team_with(&owner) {
        level = level.max(access.team_access);
    }
    level
}
