use crate::dto::TimeResponse;
use axum::Json;

/// GET /time
/// Response: 200 `{"time":"2024-01-01T00:00:00.000Z"}` (current instant, UTC)
pub async fn current_time() -> Json<TimeResponse> {
    Json(TimeResponse::now())
}
