//! # Share Access Control
//!
//! This crate decides who may see and change a piece of content on the
//! Share platform.
//!
//! ## Overview
//!
//! Every resource (a post) carries four independent access levels:
//!
//! ```text
//! owner_access ≥ team_access ≥ authenticated_access ≥ public_access
//!      │              │                 │                    │
//!    owner     owner's team       any signed-in         everyone
//! ```
//!
//! Levels are `none < read < write`. The owner level is always `write` and
//! public access never includes `write`.
//!
//! The share-access crate handles:
//! - **Levels**: The ordered [`AccessLevel`] enumeration
//! - **Configuration**: [`AccessConfig`] and partial updates
//! - **Validation**: [`AccessHierarchyValidator`], applied on every write
//! - **Evaluation**: [`PermissionEvaluator`], the effective level of an actor
//! - **Filtering**: [`AccessFilter`], the bulk form of can-read
//!
//! ## Usage
//!
//! ```rust
//! use share_access::{
//!     AccessConfigPatch, AccessField, AccessHierarchyValidator, AccessLevel,
//!     PermissionEvaluator, ResourceView,
//! };
//! use share_org::{Actor, OwnerRef};
//! use uuid::Uuid;
//!
//! let author = Actor::user(Uuid::now_v7(), None);
//!
//! // Validate on create: unspecified fields take the defaults
//! let patch = AccessConfigPatch::new()
//!     .with(AccessField::Team, AccessLevel::Read)
//!     .with(AccessField::Authenticated, AccessLevel::Read);
//! let access = AccessHierarchyValidator::new().validate_patch(&patch, None).unwrap();
//!
//! let post = ResourceView::new(OwnerRef::of(&author).unwrap(), access);
//!
//! // Pointwise checks
//! let evaluator = PermissionEvaluator::new();
//! let reader = Actor::user(Uuid::now_v7(), None);
//! assert!(evaluator.can_read(&reader, &post));
//! assert!(!evaluator.can_write(&reader, &post));
//!
//! // Bulk listing selects the same resources
//! let filter = evaluator.readable_filter(&reader);
//! assert!(filter.matches(&post));
//! ```
//!
//! ## Consistency
//!
//! The pointwise evaluator short-circuits on ownership while the filter
//! folds the owner grant into a union. The two agree for every
//! configuration that satisfies the hierarchy, so every write path must run
//! the validator.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod levels;
pub mod resource;
pub mod validator;

// Re-export main types for convenience
pub use config::{AccessConfig, AccessConfigPatch, AccessField, RawAccessPatch};
pub use error::AccessError;
pub use evaluator::PermissionEvaluator;
pub use filter::AccessFilter;
pub use levels::AccessLevel;
pub use resource::{Resource, ResourceView};
pub use validator::{AccessHierarchyValidator, ValidationErrors};
