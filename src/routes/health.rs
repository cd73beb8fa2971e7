use crate::{
    AppState,
    auth::validate_token,
    dto::{HealthQuery, HealthResponse},
    errors::ApiError,
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{debug, warn};

/// GET /health?token=<token>
/// Response: 200 `{"status":"ok"}`
/// Response: 401 `{"status":"error","message":"Unauthorized"}` when a token is
/// configured and the supplied one is missing or different
pub async fn health_check(
    State(state): State<AppState>,
    query: Result<Query<HealthQuery>, QueryRejection>,
) -> Result<Json<HealthResponse>, ApiError> {
    // A query string we cannot parse carries no usable token
    let supplied = match query {
        Ok(Query(params)) => params.token,
        Err(rejection) => {
            debug!("Ignoring malformed health query: {}", rejection);
            None
        }
    };

    validate_token(state.auth_token.as_ref(), supplied.as_deref()).inspect_err(|_| {
        let reason = if supplied.is_some() {
            "token mismatch"
        } else {
            "token missing"
        };
        warn!("Rejected health check: {}", reason);
    })?;

    Ok(Json(HealthResponse::ok()))
}
