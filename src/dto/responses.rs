use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Body of `GET /health`, also used as the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            message: Some(message.into()),
        }
    }
}

/// Renders an instant as RFC 3339 in UTC with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body of `GET /time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    pub time: String,
}

impl TimeResponse {
    pub fn now() -> Self {
        Utc::now().into()
    }
}

impl From<DateTime<Utc>> for TimeResponse {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            time: format_timestamp(instant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn ok_body_has_no_message() {
        let body = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn error_body_carries_message() {
        let body = serde_json::to_string(&HealthResponse::error("Unauthorized")).unwrap();
        assert_eq!(body, r#"{"status":"error","message":"Unauthorized"}"#);
    }

    #[test]
    fn time_uses_millis_and_z_suffix() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let body = serde_json::to_string(&TimeResponse::from(instant)).unwrap();
        assert_eq!(body, r#"{"time":"2024-01-01T00:00:00.000Z"}"#);
    }

    #[test]
    fn sub_millisecond_precision_is_truncated() {
        let instant = Utc
            .with_ymd_and_hms(2024, 6, 30, 23, 59, 59)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let formatted = format_timestamp(instant);
        assert_eq!(formatted, "2024-06-30T23:59:59.123Z");

        let reparsed = DateTime::parse_from_rfc3339(&formatted)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(reparsed), formatted);
    }
}
