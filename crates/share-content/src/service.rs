//! # Guarded Content Operations
//!
//! [`ContentService`] is the request-facing layer over the access engine.
//! It owns no storage: callers load the persisted records, hand them in,
//! and persist whatever comes back. Every operation checks access first and
//! changes nothing when the check fails.
//!
//! ## Denial outcomes
//!
//! ```text
//! read a post, or anything hanging off it  → 404 "Post Not Found"
//! edit or delete a post                    → 401 when anonymous, else 403
//! delete someone else's comment            → 403
//! ```
//!
//! A denied read is indistinguishable from a missing post, so callers
//! cannot probe for the existence of posts they may not see.

use share_access::{AccessFilter, AccessHierarchyValidator, PermissionEvaluator};
use share_org::{Actor, OwnerRef};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::comment::Comment;
use crate::config::AccessPolicy;
use crate::error::{ContentError, ContentResult};
use crate::like::Like;
use crate::post::{Post, PostDraft, PostPatch};

/// Content operations guarded by per-post access levels.
///
/// # Example
///
/// ```
/// use share_access::{AccessField, RawAccessPatch};
/// use share_content::{ContentService, PostDraft};
/// use share_org::Actor;
/// use uuid::Uuid;
///
/// let service = ContentService::default();
/// let author = Actor::user(Uuid::now_v7(), None);
///
/// let draft = PostDraft::new("Hello", "World")
///     .with_access(
///         RawAccessPatch::default()
///             .with(AccessField::Team, "read")
///             .with(AccessField::Authenticated, "read"),
///     );
/// let post = service.create_post(&author, &draft).unwrap();
///
/// let reader = Actor::user(Uuid::now_v7(), None);
/// assert!(service.require_readable(&reader, &post).is_ok());
/// assert_eq!(service.require_readable(&Actor::anonymous(), &post).unwrap_err().status_code(), 404);
/// assert_eq!(service.require_writable(&reader, &post).unwrap_err().status_code(), 403);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentService {
    evaluator: PermissionEvaluator,
    validator: AccessHierarchyValidator,
    policy: AccessPolicy,
}

impl ContentService {
    /// Create a service applying `policy`.
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            evaluator: PermissionEvaluator::new(),
            validator: AccessHierarchyValidator::new(),
            policy,
        }
    }

    /// Active access policy.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Underlying evaluator.
    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    // ------------------------------------------------------------------
    // Guards
    // ------------------------------------------------------------------

    /// Ensure `actor` may view `post`.
    pub fn require_readable(&self, actor: &Actor, post: &Post) -> ContentResult<()> {
        if self.evaluator.can_read(actor, post) {
            return Ok(());
        }
        warn!(actor = ?actor.id, post = %post.id, "Read denied");
        Err(ContentError::post_not_found())
    }

    /// Ensure `actor` may edit `post`.
    pub fn require_writable(&self, actor: &Actor, post: &Post) -> ContentResult<()> {
        self.require_write(actor, post, "You do not have permission to edit this post")
    }

    /// Ensure `actor` may delete `post`. Deleting requires write access.
    pub fn require_deletable(&self, actor: &Actor, post: &Post) -> ContentResult<()> {
        self.require_write(actor, post, "You don't have permission to delete this post")
    }

    fn require_write(&self, actor: &Actor, post: &Post, denial: &str) -> ContentResult<()> {
        if self.evaluator.can_write(actor, post) {
            return Ok(());
        }
        warn!(actor = ?actor.id, post = %post.id, "Write denied");
        if !actor.authenticated {
            return Err(ContentError::Unauthenticated);
        }
        Err(ContentError::Forbidden(denial.to_string()))
    }

    fn require_account(&self, actor: &Actor) -> ContentResult<Uuid> {
        match actor.id {
            Some(id) if actor.authenticated => Ok(id),
            _ => Err(ContentError::Unauthenticated),
        }
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// Create a post owned by `actor`.
    ///
    /// Access fields the draft leaves out take the policy defaults. The
    /// resulting configuration is validated before the post is built.
    pub fn create_post(&self, actor: &Actor, draft: &PostDraft) -> ContentResult<Post> {
        let owner = OwnerRef::of(actor)
            .filter(|_| actor.authenticated)
            .ok_or(ContentError::Unauthenticated)?;
        let access = self
            .validator
            .validate_raw(&draft.access, Some(&self.policy.default_access))?;
        let post = Post::create(owner, draft, access)?;

        info!(post = %post.id, owner = %owner.id, "Post created");
        Ok(post)
    }

    /// Apply `patch` to `post` on behalf of `actor`.
    ///
    /// Access fields the patch leaves out keep their persisted values; the
    /// merged configuration must satisfy the hierarchy. On error `post` is
    /// left untouched.
    pub fn update_post(&self, actor: &Actor, post: &mut Post, patch: &PostPatch) -> ContentResult<()> {
        self.require_writable(actor, post)?;
        let access = self.validator.validate_raw(&patch.access, Some(&post.access))?;
        post.apply(patch, access)?;

        info!(post = %post.id, actor = ?actor.id, "Post updated");
        Ok(())
    }

    /// Ensure `actor` may delete `post`; the caller removes it from storage.
    pub fn delete_post(&self, actor: &Actor, post: &Post) -> ContentResult<()> {
        self.require_deletable(actor, post)?;
        info!(post = %post.id, actor = ?actor.id, "Post deletion authorized");
        Ok(())
    }

    /// Filter selecting every post `actor` can read, for a storage query.
    pub fn readable_filter(&self, actor: &Actor) -> AccessFilter {
        self.evaluator.readable_filter(actor)
    }

    /// Posts from `posts` that `actor` can read, newest first.
    pub fn visible_posts<'a, I>(&self, actor: &Actor, posts: I) -> Vec<&'a Post>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let filter = self.readable_filter(actor);
        let mut visible: Vec<&Post> = filter.select(posts).collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(actor = ?actor.id, count = visible.len(), "Listed visible posts");
        visible
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// Comment on `post` as `actor`.
    pub fn add_comment(&self, actor: &Actor, post: &Post, content: &str) -> ContentResult<Comment> {
        let author = self.require_account(actor)?;
        self.require_readable(actor, post)?;
        let comment = Comment::create(post.id, author, content)?;

        debug!(post = %post.id, comment = %comment.id, "Comment added");
        Ok(comment)
    }

    /// Comments on `post`, optionally only those by `author`, newest first.
    pub fn list_comments<'a, I>(
        &self,
        actor: &Actor,
        post: &Post,
        comments: I,
        author: Option<Uuid>,
    ) -> ContentResult<Vec<&'a Comment>>
    where
        I: IntoIterator<Item = &'a Comment>,
    {
        self.require_readable(actor, post)?;
        let mut listed: Vec<&Comment> = comments
            .into_iter()
            .filter(|c| c.post_id == post.id)
            .filter(|c| author.map_or(true, |a| c.author_id == a))
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    /// Ensure `actor` may delete `comment`: only its author or an elevated
    /// actor may.
    pub fn delete_comment(&self, actor: &Actor, comment: &Comment) -> ContentResult<()> {
        self.require_account(actor)?;
        if !comment.is_written_by(actor.id) && !actor.elevated {
            warn!(actor = ?actor.id, comment = %comment.id, "Comment deletion denied");
            return Err(ContentError::Forbidden(
                "Only author or admin can delete this comment.".to_string(),
            ));
        }
        debug!(comment = %comment.id, "Comment deletion authorized");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    /// Like `post` as `actor`.
    ///
    /// `existing` is the actor's persisted like on this post, if any.
    pub fn add_like(&self, actor: &Actor, post: &mut Post, existing: Option<&Like>) -> ContentResult<Like> {
        let user = self.require_account(actor)?;
        self.require_readable(actor, post)?;
        if existing.is_some_and(|like| like.is_for(post.id, user)) {
            return Err(ContentError::Conflict("You have already liked this post".to_string()));
        }

        let like = Like::new(post.id, user);
        post.likes_count += 1;
        debug!(post = %post.id, likes = post.likes_count, "Like added");
        Ok(like)
    }

    /// Withdraw `actor`'s like from `post`.
    ///
    /// Returns the id of the like the caller should delete.
    pub fn remove_like(&self, actor: &Actor, post: &mut Post, existing: Option<&Like>) -> ContentResult<Uuid> {
        let user = self.require_account(actor)?;
        self.require_readable(actor, post)?;
        let like = existing
            .filter(|like| like.is_for(post.id, user))
            .ok_or_else(|| ContentError::Conflict("You have not liked this post.".to_string()))?;

        post.likes_count = post.likes_count.saturating_sub(1);
        debug!(post = %post.id, likes = post.likes_count, "Like removed");
        Ok(like.id)
    }

    /// Likes on `post`, optionally only `user`'s, newest first.
    pub fn list_likes<'a, I>(
        &self,
        actor: &Actor,
        post: &Post,
        likes: I,
        user: Option<Uuid>,
    ) -> ContentResult<Vec<&'a Like>>
    where
        I: IntoIterator<Item = &'a Like>,
    {
        self.require_readable(actor, post)?;
        let mut listed: Vec<&Like> = likes
            .into_iter()
            .filter(|l| l.post_id == post.id)
            .filter(|l| user.map_or(true, |u| l.user_id == u))
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}
