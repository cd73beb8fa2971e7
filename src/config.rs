use crate::auth::AuthToken;
use thiserror::Error;
use tracing::warn;

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const AUTH_TOKEN_VAR: &str = "AUTH_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected a port number between 0 and 65535")]
    InvalidPort { var: &'static str, value: String },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Expected `/health` token; `None` leaves the endpoint open
    pub auth_token: Option<AuthToken>,
}

impl Config {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    return Err(ConfigError::InvalidPort {
                        var: PORT_VAR,
                        value: raw,
                    });
                }
            },
            None => Self::DEFAULT_PORT,
        };

        let auth_token = lookup(AUTH_TOKEN_VAR).and_then(|raw| {
            let token = AuthToken::new(&raw);
            if token.is_none() {
                warn!("{} is set but blank, /health will not require a token", AUTH_TOKEN_VAR);
            }
            token
        });

        Ok(Self {
            host,
            port,
            auth_token,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
