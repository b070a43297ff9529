//! Error types for access level parsing

use thiserror::Error;

/// Access engine error types.
///
/// Evaluation itself never fails, and rejected configuration writes are
/// reported through [`ValidationErrors`](crate::validator::ValidationErrors).
/// What remains is parsing raw level values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A value is not one of `none`, `read`, `write`
    #[error("Invalid access level: {0}")]
    InvalidLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::AccessLevel;

    #[test]
    fn test_unknown_level_is_reported_verbatim() {
        let err = "admin".parse::<AccessLevel>().unwrap_err();
        assert_eq!(err, AccessError::InvalidLevel("admin".to_string()));
        assert_eq!(err.to_string(), "Invalid access level: admin");
    }
}
