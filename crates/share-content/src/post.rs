//! Post domain model
//!
//! A post is the unit of sharing: it carries its owner snapshot and an
//! [`AccessConfig`] that decides who may see and edit it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use share_access::{AccessConfig, RawAccessPatch, Resource};
use share_org::OwnerRef;
use uuid::Uuid;

use crate::error::{ContentError, ContentResult};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Length of the derived excerpt, in characters.
pub const EXCERPT_CHARS: usize = 200;

/// A shared post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique identifier
    pub id: Uuid,

    /// Author account and their team at creation
    pub owner: OwnerRef,

    /// Title, at most [`TITLE_MAX_CHARS`] characters
    pub title: String,

    /// Body text
    pub content: String,

    /// Short summary; derived from the content when not supplied
    pub excerpt: String,

    /// Per-audience access levels
    #[serde(flatten)]
    pub access: AccessConfig,

    /// When the post was created
    pub created_at: DateTime<Utc>,

    /// When the post was last updated
    pub updated_at: DateTime<Utc>,

    /// Number of likes
    pub likes_count: u64,
}

impl Post {
    /// Build a post from an already validated draft and access configuration.
    pub(crate) fn create(owner: OwnerRef, draft: &PostDraft, access: AccessConfig) -> ContentResult<Self> {
        validate_title(&draft.title)?;
        validate_content(&draft.content)?;
        let excerpt = resolve_excerpt(draft.excerpt.as_deref(), &draft.content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            owner,
            title: draft.title.clone(),
            content: draft.content.clone(),
            excerpt,
            access,
            created_at: now,
            updated_at: now,
            likes_count: 0,
        })
    }

    /// Apply the content part of `patch`; access is handled by the caller.
    ///
    /// Nothing is modified unless every supplied field is valid.
    pub(crate) fn apply(&mut self, patch: &PostPatch, access: AccessConfig) -> ContentResult<()> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(content) = &patch.content {
            validate_content(content)?;
        }
        let content = patch.content.as_deref().unwrap_or(&self.content);
        let excerpt = match patch.excerpt.as_deref() {
            Some(excerpt) => Some(resolve_excerpt(Some(excerpt), content)?),
            None => None,
        };

        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        self.access = access;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Resource for Post {
    fn owner(&self) -> OwnerRef {
        self.owner
    }

    fn access(&self) -> &AccessConfig {
        &self.access
    }
}

/// Request to create a post.
///
/// Access fields are optional; omitted ones take the policy defaults.
///
/// ```
/// use share_content::PostDraft;
///
/// let draft: PostDraft = serde_json::from_value(serde_json::json!({
///     "title": "Hello",
///     "content": "World",
///     "team_access": "read",
/// }))
/// .unwrap();
/// assert_eq!(draft.access.team_access.as_deref(), Some("read"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    /// Title
    #[serde(default)]
    pub title: String,

    /// Body text
    #[serde(default)]
    pub content: String,

    /// Explicit excerpt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Requested access levels
    #[serde(flatten)]
    pub access: RawAccessPatch,
}

impl PostDraft {
    /// Create a draft with default access.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the requested access levels.
    pub fn with_access(mut self, access: RawAccessPatch) -> Self {
        self.access = access;
        self
    }
}

/// Partial update of a post. Omitted fields keep their persisted values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostPatch {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// New excerpt; an empty string re-derives it from the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Access levels to change
    #[serde(flatten)]
    pub access: RawAccessPatch,
}

fn validate_title(title: &str) -> ContentResult<()> {
    if title.trim().is_empty() {
        return Err(ContentError::invalid("title", "This field may not be blank."));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ContentError::invalid(
            "title",
            format!("Ensure this field has no more than {TITLE_MAX_CHARS} characters."),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> ContentResult<()> {
    if content.trim().is_empty() {
        return Err(ContentError::invalid("content", "This field may not be blank."));
    }
    Ok(())
}

fn resolve_excerpt(supplied: Option<&str>, content: &str) -> ContentResult<String> {
    match supplied {
        Some(excerpt) if !excerpt.is_empty() => {
            if excerpt.chars().count() > EXCERPT_CHARS {
                return Err(ContentError::invalid(
                    "excerpt",
                    format!("Ensure this field has no more than {EXCERPT_CHARS} characters."),
                ));
            }
            Ok(excerpt.to_string())
        }
        _ => Ok(excerpt_of(content)),
    }
}

/// First [`EXCERPT_CHARS`] characters of `content`.
pub fn excerpt_of(content: &str) -> String {
    content.chars().take(EXCERPT_CHARS).collect()
}
