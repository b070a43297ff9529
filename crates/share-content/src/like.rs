//! Likes on posts
//!
//! An account likes a post at most once; the pair `(user_id, post_id)` is
//! unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A like given by an account to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    /// Unique identifier
    pub id: Uuid,

    /// Liked post
    pub post_id: Uuid,

    /// Account that liked the post
    pub user_id: Uuid,

    /// When the like was given
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub(crate) fn new(post_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this like is `user_id`'s like on `post_id`.
    pub fn is_for(&self, post_id: Uuid, user_id: Uuid) -> bool {
        self.post_id == post_id && self.user_id == user_id
    }
}
