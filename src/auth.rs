use crate::errors::ApiError;
use std::{fmt, sync::Arc};

/// Shared secret that gates `GET /health`.
///
/// Read once at startup and never mutated. Clones share one allocation, so
/// every request can hold a copy without locking.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(Arc<str>);

impl AuthToken {
    /// Returns `None` for an empty or whitespace-only value, which leaves
    /// the gate disabled.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(Arc::from(value)))
    }

    /// Exact equality, no trimming or case folding.
    pub fn matches(&self, supplied: &str) -> bool {
        &*self.0 == supplied
    }
}

// Keep the secret out of logs
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Checks a caller-supplied token against the configured one.
///
/// With no token configured every request passes. Otherwise the supplied
/// token must be present and equal.
pub fn validate_token(
    expected: Option<&AuthToken>,
    supplied: Option<&str>,
) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    match supplied {
        Some(token) if expected.matches(token) => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_do_not_configure_a_token() {
        assert!(AuthToken::new("").is_none());
        assert!(AuthToken::new("   ").is_none());
        assert!(AuthToken::new("1234567890").is_some());
    }

    #[test]
    fn matching_is_exact() {
        let token = AuthToken::new("1234567890").unwrap();
        assert!(token.matches("1234567890"));
        assert!(!token.matches("1234567890 "));
        assert!(!token.matches("123456789"));
        assert!(!token.matches(""));
    }

    #[test]
    fn open_gate_accepts_anything() {
        assert_eq!(validate_token(None, None), Ok(()));
        assert_eq!(validate_token(None, Some("whatever")), Ok(()));
    }

    #[test]
    fn configured_gate_requires_equal_token() {
        let token = AuthToken::new("1234567890").unwrap();
        assert_eq!(validate_token(Some(&token), Some("1234567890")), Ok(()));
        assert_eq!(
            validate_token(Some(&token), Some("wrong")),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(validate_token(Some(&token), None), Err(ApiError::Unauthorized));
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = AuthToken::new("super-secret").unwrap();
        let printed = format!("{:?}", token);
        assert_eq!(printed, "AuthToken(***)");
        assert!(!printed.contains("super-secret"));
    }
}
