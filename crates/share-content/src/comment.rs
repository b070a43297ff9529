//! Comments on posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ContentError, ContentResult};

/// A comment left on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique identifier
    pub id: Uuid,

    /// Post the comment belongs to
    pub post_id: Uuid,

    /// Account that wrote the comment
    pub author_id: Uuid,

    /// Comment text
    pub content: String,

    /// When the comment was written
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub(crate) fn create(post_id: Uuid, author_id: Uuid, content: &str) -> ContentResult<Self> {
        if content.trim().is_empty() {
            return Err(ContentError::invalid("content", "This field may not be blank."));
        }
        Ok(Self {
            id: Uuid::now_v7(),
            post_id,
            author_id,
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Check if `account` wrote this comment.
    pub fn is_written_by(&self, account: Option<Uuid>) -> bool {
        account == Some(self.author_id)
    }
}
