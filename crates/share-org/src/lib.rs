//! # Share Identity
//!
//! This crate provides the identity side of the Share content platform:
//! who is asking, which team they belong to, and who owns a resource.
//!
//! ## Overview
//!
//! The share-org crate handles:
//! - **Roles**: Account roles (`admin`, `blogger`)
//! - **Teams**: Tenant grouping used by team-level access grants
//! - **Actors**: Resolved snapshot of the requesting identity
//! - **Owners**: Snapshot of a resource owner's id and team
//!
//! ## Architecture
//!
//! ```text
//! Account (external)
//!   ├─ UserRole ─┐
//!   ├─ superuser ┼─→ Actor { id, authenticated, elevated, team_id }
//!   └─ Team ─────┘
//!
//! Resource owner ─→ OwnerRef { id, team_id }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use share_org::{Actor, OwnerRef, UserRole};
//! use uuid::Uuid;
//!
//! let team = Uuid::now_v7();
//! let owner = OwnerRef::new(Uuid::now_v7(), Some(team));
//!
//! let mate = Actor::user(Uuid::now_v7(), Some(team));
//! assert!(mate.shares_team_with(&owner));
//! assert!(!mate.is_owner_of(&owner));
//!
//! let admin = Actor::from_account(Uuid::now_v7(), UserRole::Admin, false, None);
//! assert!(admin.elevated);
//! ```
//!
//! All actor fields are resolved by the caller before any access decision is
//! made; nothing in this crate performs I/O.

pub mod actor;
pub mod roles;
pub mod team;

// Re-export main types for convenience
pub use actor::{Actor, OwnerRef};
pub use roles::UserRole;
pub use team::{Team, DEFAULT_TEAM_NAME};
