//! # Share Content
//!
//! Posts, comments and likes for the Share platform, each operation guarded
//! by the post's access configuration.
//!
//! ## Overview
//!
//! The share-content crate handles:
//! - **Posts**: [`Post`], creation drafts and partial updates
//! - **Comments** and **Likes** attached to posts
//! - **Guards**: [`ContentService`], which maps access decisions to request
//!   outcomes
//! - **Policy**: [`AccessPolicy`], deployment defaults loaded from the
//!   environment
//!
//! ## Usage
//!
//! ```rust
//! use share_access::{AccessField, RawAccessPatch};
//! use share_content::{AccessPolicy, ContentService, PostDraft, PostPatch};
//! use share_org::{Actor, UserRole};
//! use uuid::Uuid;
//!
//! let service = ContentService::new(AccessPolicy::default());
//! let team = Uuid::now_v7();
//! let author = service
//!     .policy()
//!     .actor_for(Uuid::now_v7(), UserRole::Blogger, false, Some(team));
//!
//! // Teammates may edit, other signed-in accounts may read
//! let access = RawAccessPatch::default()
//!     .with(AccessField::Team, "write")
//!     .with(AccessField::Authenticated, "read");
//! let mut post = service
//!     .create_post(&author, &PostDraft::new("Roadmap", "Q3 plans").with_access(access))
//!     .unwrap();
//!
//! let mate = Actor::user(Uuid::now_v7(), Some(team));
//! let patch = PostPatch { title: Some("Roadmap v2".into()), ..PostPatch::default() };
//! service.update_post(&mate, &mut post, &patch).unwrap();
//!
//! let outsider = Actor::user(Uuid::now_v7(), None);
//! assert_eq!(service.update_post(&outsider, &mut post, &patch).unwrap_err().status_code(), 403);
//! assert_eq!(service.visible_posts(&outsider, [&post]).len(), 1);
//! ```
//!
//! Storage is the caller's concern: the service takes persisted records in
//! and hands back the records to persist.

pub mod comment;
pub mod config;
pub mod error;
pub mod like;
pub mod post;
pub mod service;

// Re-export main types
pub use comment::Comment;
pub use config::{AccessPolicy, ConfigError};
pub use error::{ContentError, ContentResult};
pub use like::Like;
pub use post::{excerpt_of, Post, PostDraft, PostPatch, EXCERPT_CHARS, TITLE_MAX_CHARS};
pub use service::ContentService;
