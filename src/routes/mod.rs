mod health;
mod time;

pub use health::health_check;
pub use time::current_time;

use crate::{AppState, errors::ApiError};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the request-handling service without binding a socket.
///
/// `server::serve` puts this behind a listener; tests drive it directly
/// with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/time", get(current_time))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
