//! Error types for content operations
//!
//! This module defines every caller-visible outcome of a guarded content
//! operation. Access denials are deliberately split by request path: a
//! denied read looks like a missing post, a denied write is forbidden.

use serde_json::{json, Value};
use share_access::ValidationErrors;
use thiserror::Error;

/// Content operation error types.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Resource does not exist, or the actor may not see it
    #[error("{0}")]
    NotFound(String),

    /// Actor is signed in but lacks the required access
    #[error("{0}")]
    Forbidden(String),

    /// Operation requires a signed-in actor
    #[error("Authentication credentials were not provided.")]
    Unauthenticated,

    /// Operation conflicts with existing state (e.g. a duplicate like)
    #[error("{0}")]
    Conflict(String),

    /// Access configuration was rejected by the hierarchy validator
    #[error("Invalid access configuration: {0}")]
    Validation(#[from] ValidationErrors),

    /// A content field is missing or malformed
    #[error("{field}: {message}")]
    InvalidInput {
        /// Field name.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

impl ContentError {
    /// Standard not-found error for posts the actor cannot see.
    pub fn post_not_found() -> Self {
        ContentError::NotFound("Post Not Found".to_string())
    }

    /// Create an invalid-input error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ContentError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Check if this error is a denied access outcome (401, 403 or 404).
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            ContentError::NotFound(_) | ContentError::Forbidden(_) | ContentError::Unauthenticated
        )
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ContentError::NotFound(_) => 404,
            ContentError::Forbidden(_) => 403,
            ContentError::Unauthenticated => 401,
            ContentError::Conflict(_)
            | ContentError::Validation(_)
            | ContentError::InvalidInput { .. } => 400,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::NotFound(_) => "NOT_FOUND",
            ContentError::Forbidden(_) => "FORBIDDEN",
            ContentError::Unauthenticated => "UNAUTHENTICATED",
            ContentError::Conflict(_) => "CONFLICT",
            ContentError::Validation(_) => "INVALID_ACCESS_CONFIG",
            ContentError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }

    /// Response body for this error.
    ///
    /// Field errors are keyed by field name so clients can attach them to
    /// form inputs; everything else is a single `detail` message.
    pub fn body(&self) -> Value {
        match self {
            ContentError::Validation(errors) => json!(errors),
            ContentError::InvalidInput { field, message } => json!({ *field: [message] }),
            other => json!({ "detail": other.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use share_access::AccessField;

    #[test]
    fn test_status_codes() {
        assert_eq!(ContentError::post_not_found().status_code(), 404);
        assert_eq!(ContentError::Forbidden("no".into()).status_code(), 403);
        assert_eq!(ContentError::Unauthenticated.status_code(), 401);
        assert_eq!(ContentError::Conflict("dup".into()).status_code(), 400);
        assert_eq!(ContentError::invalid("title", "required").status_code(), 400);
    }

    #[test]
    fn test_access_denied_classification() {
        assert!(ContentError::post_not_found().is_access_denied());
        assert!(ContentError::Unauthenticated.is_access_denied());
        assert!(!ContentError::Conflict("dup".into()).is_access_denied());
    }

    #[test]
    fn test_validation_body_is_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add(AccessField::Team, "team access cannot exceed owner access");

        let body = ContentError::from(errors).body();
        assert_eq!(
            body,
            json!({ "team_access": ["team access cannot exceed owner access"] })
        );
    }

    #[test]
    fn test_detail_body() {
        assert_eq!(
            ContentError::post_not_found().body(),
            json!({ "detail": "Post Not Found" })
        );
        assert_eq!(
            ContentError::invalid("title", "This field may not be blank.").body(),
            json!({ "title": ["This field may not be blank."] })
        );
    }
}
