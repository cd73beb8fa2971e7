use serde::Deserialize;

/// Query string of `GET /health`
#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    pub token: Option<String>,
}
