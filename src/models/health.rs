use chrono::{DateTime, ParseResult, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status reported by every health check.
pub const HEALTHY_STATUS: &str = "healthy";

/// Version reported by every health check.
pub const SERVICE_VERSION: &str = "1.0.0";

/// # Health Status Record
///
/// Fixed-shape record describing the state of the system at the moment it
/// was built. A fresh value is produced for every check.
///
/// ## Fields
/// - `status`: always `"healthy"`
/// - `timestamp`: ISO 8601 UTC timestamp with millisecond precision
/// - `version`: always `"1.0.0"`
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00.000Z",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthStatus {
    /// Builds a healthy record stamped with the current wall-clock time.
    pub fn healthy() -> Self {
        Self::at(Utc::now())
    }

    /// Builds a healthy record stamped with `instant`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: SERVICE_VERSION.to_string(),
        }
    }

    pub fn parsed_timestamp(&self) -> ParseResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp).map(|dt| dt.with_timezone(&Utc))
    }
}
