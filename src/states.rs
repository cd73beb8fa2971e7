use crate::{auth::AuthToken, config::Config};

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every request by axum's `State` extractor.
///
/// The token is fixed at construction and only ever read afterwards, so the
/// handlers never look at the process environment themselves.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth_token: Option<AuthToken>,
}

impl AppState {
    pub fn new(auth_token: Option<AuthToken>) -> Self {
        Self { auth_token }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auth_token.clone())
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth_token.is_some()
    }
}
