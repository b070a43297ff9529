//! End-to-end request flows: accounts on two teams, an admin, and anonymous
//! visitors creating, reading, editing and reacting to posts.

use share_access::{AccessField, AccessLevel, RawAccessPatch};
use share_content::{AccessPolicy, ContentError, ContentService, Post, PostDraft, PostPatch};
use share_org::{Actor, Team, UserRole};
use uuid::Uuid;

struct Blog {
    service: ContentService,
    author: Actor,
    teammate: Actor,
    other_team: Actor,
    admin: Actor,
}

impl Blog {
    fn new() -> Self {
        let service = ContentService::new(AccessPolicy::default());
        let team_a = Team::new("Team A");
        let team_b = Team::new("Team B");
        let policy = *service.policy();

        Self {
            author: policy.actor_for(Uuid::now_v7(), UserRole::Blogger, false, Some(team_a.id)),
            teammate: policy.actor_for(Uuid::now_v7(), UserRole::Blogger, false, Some(team_a.id)),
            other_team: policy.actor_for(Uuid::now_v7(), UserRole::Blogger, false, Some(team_b.id)),
            admin: policy.actor_for(Uuid::now_v7(), UserRole::Admin, false, Some(team_b.id)),
            service,
        }
    }

    fn post(&self, title: &str, access: [&str; 3]) -> Post {
        let raw = RawAccessPatch::default()
            .with(AccessField::Team, access[0])
            .with(AccessField::Authenticated, access[1])
            .with(AccessField::Public, access[2]);
        self.service
            .create_post(&self.author, &PostDraft::new(title, "Body").with_access(raw))
            .unwrap()
    }
}

fn retitle(title: &str) -> PostPatch {
    PostPatch {
        title: Some(title.to_string()),
        ..PostPatch::default()
    }
}

#[test]
fn test_public_post_visible_to_everyone() {
    let blog = Blog::new();
    let post = blog.post("Public", ["read", "read", "read"]);

    for actor in [Actor::anonymous(), blog.teammate, blog.other_team, blog.admin] {
        assert!(blog.service.require_readable(&actor, &post).is_ok());
    }
}

#[test]
fn test_private_post_is_not_found_for_others() {
    let blog = Blog::new();
    let post = blog.post("Private", ["none", "none", "none"]);

    let err = blog.service.require_readable(&blog.teammate, &post).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Post Not Found");

    assert!(blog.service.require_readable(&blog.author, &post).is_ok());
    assert!(blog.service.require_readable(&blog.admin, &post).is_ok());
}

#[test]
fn test_team_post_visible_to_team_only() {
    let blog = Blog::new();
    let post = blog.post("Team", ["read", "none", "none"]);

    assert!(blog.service.require_readable(&blog.teammate, &post).is_ok());
    assert!(blog.service.require_readable(&blog.other_team, &post).is_err());
    assert!(blog.service.require_readable(&Actor::anonymous(), &post).is_err());
}

#[test]
fn test_edit_outcomes() {
    let blog = Blog::new();
    let mut post = blog.post("Draft", ["write", "read", "none"]);

    blog.service
        .update_post(&blog.teammate, &mut post, &retitle("By teammate"))
        .unwrap();
    assert_eq!(post.title, "By teammate");

    let err = blog
        .service
        .update_post(&blog.other_team, &mut post, &retitle("Nope"))
        .unwrap_err();
    assert!(matches!(err, ContentError::Forbidden(_)));

    let err = blog
        .service
        .update_post(&Actor::anonymous(), &mut post, &retitle("Nope"))
        .unwrap_err();
    assert_eq!(err.status_code(), 401);

    blog.service
        .update_post(&blog.admin, &mut post, &retitle("By admin"))
        .unwrap();
    assert_eq!(post.title, "By admin");
}

#[test]
fn test_delete_outcomes() {
    let blog = Blog::new();
    let post = blog.post("Doomed", ["read", "read", "read"]);

    assert!(blog.service.delete_post(&blog.author, &post).is_ok());
    assert!(blog.service.delete_post(&blog.admin, &post).is_ok());

    let err = blog.service.delete_post(&blog.teammate, &post).unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You don't have permission to delete this post");
}

#[test]
fn test_admin_role_without_elevation() {
    let policy = AccessPolicy::new(Default::default(), false).unwrap();
    let service = ContentService::new(policy);
    let author = Actor::user(Uuid::now_v7(), None);
    let post = service.create_post(&author, &PostDraft::new("Mine", "Body")).unwrap();

    let admin = policy.actor_for(Uuid::now_v7(), UserRole::Admin, false, None);
    assert!(service.require_readable(&admin, &post).is_err());

    let superuser = policy.actor_for(Uuid::now_v7(), UserRole::Blogger, true, None);
    assert!(service.require_writable(&superuser, &post).is_ok());
}

#[test]
fn test_listing_matches_pointwise_reads() {
    let blog = Blog::new();
    let posts = vec![
        blog.post("Public", ["read", "read", "read"]),
        blog.post("Members", ["read", "read", "none"]),
        blog.post("Team", ["write", "none", "none"]),
        blog.post("Private", ["none", "none", "none"]),
    ];

    let expectations = [
        (Actor::anonymous(), 1),
        (blog.other_team, 2),
        (blog.teammate, 3),
        (blog.author, 4),
        (blog.admin, 4),
    ];
    for (actor, expected) in expectations {
        let visible = blog.service.visible_posts(&actor, &posts);
        assert_eq!(visible.len(), expected, "actor {actor:?}");
        for post in &visible {
            assert!(blog.service.require_readable(&actor, post).is_ok());
        }
        assert!(visible.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}

#[test]
fn test_access_update_is_validated_against_persisted_values() {
    let blog = Blog::new();
    let mut post = blog.post("Members", ["read", "read", "none"]);

    // Lowering team below the persisted authenticated level breaks the chain.
    let patch = PostPatch {
        access: RawAccessPatch::default().with(AccessField::Team, "none"),
        ..PostPatch::default()
    };
    let err = blog.service.update_post(&blog.author, &mut post, &patch).unwrap_err();
    let body = err.body();
    assert_eq!(
        body["authenticated_access"][0],
        "authenticated access cannot exceed team access"
    );
    assert_eq!(post.access.team_access, AccessLevel::Read);
}

#[test]
fn test_owner_cannot_drop_below_write() {
    let blog = Blog::new();
    let mut post = blog.post("Mine", ["none", "none", "none"]);

    let patch = PostPatch {
        access: RawAccessPatch::default().with(AccessField::Owner, "read"),
        ..PostPatch::default()
    };
    let err = blog.service.update_post(&blog.author, &mut post, &patch).unwrap_err();
    assert!(err.body().get("owner_access").is_some());
    assert_eq!(post.access.owner_access, AccessLevel::Write);
}

#[test]
fn test_comments_follow_post_visibility() {
    let blog = Blog::new();
    let post = blog.post("Team", ["read", "none", "none"]);

    let first = blog.service.add_comment(&blog.author, &post, "First").unwrap();
    let second = blog.service.add_comment(&blog.teammate, &post, "Second").unwrap();
    let comments = vec![first.clone(), second.clone()];

    let err = blog
        .service
        .add_comment(&blog.other_team, &post, "Let me in")
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        blog.service
            .add_comment(&Actor::anonymous(), &post, "Hi")
            .unwrap_err()
            .status_code(),
        401
    );

    let listed = blog
        .service
        .list_comments(&blog.teammate, &post, &comments, None)
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].created_at >= listed[1].created_at);

    let mine = blog
        .service
        .list_comments(&blog.teammate, &post, &comments, blog.author.id)
        .unwrap();
    assert_eq!(mine, vec![&first]);

    assert!(blog.service.delete_comment(&blog.teammate, &first).is_err());
    assert!(blog.service.delete_comment(&blog.teammate, &second).is_ok());
    assert!(blog.service.delete_comment(&blog.admin, &first).is_ok());
}

#[test]
fn test_likes_follow_post_visibility() {
    let blog = Blog::new();
    let mut post = blog.post("Members", ["read", "read", "none"]);

    let like = blog.service.add_like(&blog.other_team, &mut post, None).unwrap();
    let likes = vec![like.clone()];

    let listed = blog
        .service
        .list_likes(&blog.teammate, &post, &likes, None)
        .unwrap();
    assert_eq!(listed, vec![&like]);

    let filtered = blog
        .service
        .list_likes(&blog.teammate, &post, &likes, blog.teammate.id)
        .unwrap();
    assert!(filtered.is_empty());

    assert_eq!(
        blog.service
            .list_likes(&Actor::anonymous(), &post, &likes, None)
            .unwrap_err()
            .status_code(),
        404
    );
    assert_eq!(post.likes_count, 1);
}
