pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod server;
pub mod states;

// Re-export key types
pub use auth::AuthToken;
pub use config::Config;
pub use errors::ApiError;
pub use routes::build_router;
pub use states::AppState;
