//! # Bulk Filters
//!
//! Composable predicates over access configurations and ownership, used to
//! list every resource an actor can read without evaluating each one with
//! the pointwise evaluator.
//!
//! A filter is a small expression tree. It can be matched in memory against
//! any [`Resource`], serialized for another service, or rendered as a
//! storage-neutral query condition:
//!
//! ```text
//! public_access IN ('read', 'write')
//!   OR authenticated_access IN ('read', 'write')
//!   OR (team_access IN ('read', 'write') AND owner.team_id = '…')
//!   OR (owner_access IN ('read', 'write') AND owner.id = '…')
//! ```

use serde::{Deserialize, Serialize};
use share_org::Actor;
use std::fmt;
use uuid::Uuid;

use crate::config::AccessField;
use crate::levels::AccessLevel;
use crate::resource::Resource;

/// Predicate over resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AccessFilter {
    /// Matches every resource.
    All,

    /// Matches when `field` holds one of `levels`.
    LevelIn {
        /// Access slot to inspect.
        field: AccessField,
        /// Accepted levels.
        levels: Vec<AccessLevel>,
    },

    /// Matches resources owned by `owner_id`.
    OwnerIs {
        /// Owner account id.
        owner_id: Uuid,
    },

    /// Matches resources whose owner is on team `team_id`.
    OwnerTeamIs {
        /// Team id.
        team_id: Uuid,
    },

    /// Matches when every clause matches (an empty list matches everything).
    And {
        /// Conjuncts.
        clauses: Vec<AccessFilter>,
    },

    /// Matches when any clause matches (an empty list matches nothing).
    Or {
        /// Disjuncts.
        clauses: Vec<AccessFilter>,
    },
}

impl AccessFilter {
    /// Matches resources where `field` grants at least read access.
    pub fn grants_read(field: AccessField) -> Self {
        AccessFilter::LevelIn {
            field,
            levels: AccessLevel::readable().to_vec(),
        }
    }

    /// Matches nothing.
    pub fn none() -> Self {
        AccessFilter::Or {
            clauses: Vec::new(),
        }
    }

    /// Build the filter selecting every resource `actor` can read.
    ///
    /// # Example
    ///
    /// ```
    /// use share_access::{AccessConfig, AccessFilter};
    /// use share_org::{Actor, OwnerRef};
    /// use share_access::ResourceView;
    /// use uuid::Uuid;
    ///
    /// let owner = Actor::user(Uuid::now_v7(), None);
    /// let private = ResourceView::new(OwnerRef::of(&owner).unwrap(), AccessConfig::private());
    ///
    /// assert!(AccessFilter::readable_by(&owner).matches(&private));
    /// assert!(!AccessFilter::readable_by(&Actor::anonymous()).matches(&private));
    /// ```
    pub fn readable_by(actor: &Actor) -> Self {
        if actor.elevated {
            return AccessFilter::All;
        }

        let mut filter = Self::grants_read(AccessField::Public);
        if !actor.authenticated {
            return filter;
        }

        filter = filter.or(Self::grants_read(AccessField::Authenticated));
        if let Some(team_id) = actor.team_id {
            filter = filter.or(
                Self::grants_read(AccessField::Team).and(AccessFilter::OwnerTeamIs { team_id }),
            );
        }
        if let Some(owner_id) = actor.id {
            filter = filter.or(
                Self::grants_read(AccessField::Owner).and(AccessFilter::OwnerIs { owner_id }),
            );
        }
        filter
    }

    /// Disjunction of `self` and `other`, flattening nested ORs.
    pub fn or(self, other: AccessFilter) -> Self {
        let mut clauses = match self {
            AccessFilter::Or { clauses } => clauses,
            single => vec![single],
        };
        match other {
            AccessFilter::Or { clauses: more } => clauses.extend(more),
            single => clauses.push(single),
        }
        AccessFilter::Or { clauses }
    }

    /// Conjunction of `self` and `other`, flattening nested ANDs.
    pub fn and(self, other: AccessFilter) -> Self {
        let mut clauses = match self {
            AccessFilter::And { clauses } => clauses,
            single => vec![single],
        };
        match other {
            AccessFilter::And { clauses: more } => clauses.extend(more),
            single => clauses.push(single),
        }
        AccessFilter::And { clauses }
    }

    /// Check if `resource` satisfies this filter.
    pub fn matches<R: Resource + ?Sized>(&self, resource: &R) -> bool {
        match self {
            AccessFilter::All => true,
            AccessFilter::LevelIn { field, levels } => {
                levels.contains(&resource.access().level(*field))
            }
            AccessFilter::OwnerIs { owner_id } => resource.owner().id == *owner_id,
            AccessFilter::OwnerTeamIs { team_id } => resource.owner().team_id == Some(*team_id),
            AccessFilter::And { clauses } => clauses.iter().all(|c| c.matches(resource)),
            AccessFilter::Or { clauses } => clauses.iter().any(|c| c.matches(resource)),
        }
    }

    /// Keep only the items matching this filter.
    pub fn select<'a, I>(&'a self, items: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: Resource,
    {
        items.into_iter().filter(move |item| self.matches(item))
    }

    fn is_compound(&self) -> bool {
        matches!(
            self,
            AccessFilter::And { clauses } | AccessFilter::Or { clauses } if clauses.len() > 1
        )
    }
}

impl fmt::Display for AccessFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessFilter::All => f.write_str("TRUE"),
            AccessFilter::LevelIn { field, levels } => {
                let values = levels
                    .iter()
                    .map(|l| format!("'{}'", l.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{} IN ({})", field.as_str(), values)
            }
            AccessFilter::OwnerIs { owner_id } => write!(f, "owner.id = '{owner_id}'"),
            AccessFilter::OwnerTeamIs { team_id } => write!(f, "owner.team_id = '{team_id}'"),
            AccessFilter::And { clauses } => write_joined(f, clauses, " AND ", "TRUE"),
            AccessFilter::Or { clauses } => write_joined(f, clauses, " OR ", "FALSE"),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    clauses: &[AccessFilter],
    sep: &str,
    empty: &str,
) -> fmt::Result {
    if clauses.is_empty() {
        return f.write_str(empty);
    }
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        if clause.is_compound() {
            write!(f, "({clause})")?;
        } else {
            write!(f, "{clause}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessConfig;
    use crate::levels::AccessLevel::{None as N, Read as R, Write as W};
    use crate::resource::ResourceView;
    use share_org::OwnerRef;

    #[test]
    fn test_elevated_filter_is_universal() {
        let admin = Actor::elevated(Uuid::now_v7(), None);
        assert_eq!(AccessFilter::readable_by(&admin), AccessFilter::All);
    }

    #[test]
    fn test_anonymous_filter_is_public_only() {
        assert_eq!(
            AccessFilter::readable_by(&Actor::anonymous()),
            AccessFilter::grants_read(AccessField::Public)
        );
    }

    #[test]
    fn test_teamless_user_has_no_team_clause() {
        let id = Uuid::now_v7();
        let filter = AccessFilter::readable_by(&Actor::user(id, None));

        assert_eq!(
            filter.to_string(),
            format!(
                "public_access IN ('read', 'write') OR authenticated_access IN ('read', 'write') \
                 OR (owner_access IN ('read', 'write') AND owner.id = '{id}')"
            )
        );
    }

    #[test]
    fn test_full_filter_rendering() {
        let id = Uuid::now_v7();
        let team = Uuid::now_v7();
        let filter = AccessFilter::readable_by(&Actor::user(id, Some(team)));

        let AccessFilter::Or { clauses } = &filter else {
            panic!("expected a disjunction, got {filter:?}");
        };
        assert_eq!(clauses.len(), 4);
        assert!(filter
            .to_string()
            .contains(&format!("(team_access IN ('read', 'write') AND owner.team_id = '{team}')")));
    }

    #[test]
    fn test_matches_team_clause() {
        let team = Uuid::now_v7();
        let mate = Actor::user(Uuid::now_v7(), Some(team));
        let outsider = Actor::user(Uuid::now_v7(), Some(Uuid::now_v7()));
        let post = ResourceView::new(
            OwnerRef::new(Uuid::now_v7(), Some(team)),
            AccessConfig::new(W, R, N, N),
        );

        assert!(AccessFilter::readable_by(&mate).matches(&post));
        assert!(!AccessFilter::readable_by(&outsider).matches(&post));
    }

    #[test]
    fn test_select() {
        let owner = Actor::user(Uuid::now_v7(), None);
        let owner_ref = OwnerRef::of(&owner).unwrap();
        let posts = vec![
            ResourceView::new(owner_ref, AccessConfig::private()),
            ResourceView::new(owner_ref, AccessConfig::public_read()),
            ResourceView::new(owner_ref, AccessConfig::new(W, R, R, N)),
        ];

        let anon = AccessFilter::readable_by(&Actor::anonymous());
        assert_eq!(anon.select(&posts).count(), 1);

        let other = AccessFilter::readable_by(&Actor::user(Uuid::now_v7(), None));
        assert_eq!(other.select(&posts).count(), 2);

        let mine = AccessFilter::readable_by(&owner);
        assert_eq!(mine.select(posts.iter()).count(), 3);
    }

    #[test]
    fn test_empty_compounds() {
        let post = ResourceView::new(OwnerRef::new(Uuid::now_v7(), None), AccessConfig::private());

        assert!(!AccessFilter::none().matches(&post));
        assert!(AccessFilter::And { clauses: vec![] }.matches(&post));
        assert_eq!(AccessFilter::none().to_string(), "FALSE");
    }

    #[test]
    fn test_filter_serializes_as_tagged_tree() {
        let json = serde_json::to_value(AccessFilter::grants_read(AccessField::Team)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "op": "level_in", "field": "team_access", "levels": ["read", "write"] })
        );

        let back: AccessFilter = serde_json::from_value(json).unwrap();
        assert_eq!(back, AccessFilter::grants_read(AccessField::Team));
    }
}
