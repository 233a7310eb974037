use crate::models::health::HealthStatus;
use tracing::debug;

/// # Health Check
///
/// Reports the current health of the system.
///
/// ## Returns
///
/// A fresh [`HealthStatus`] containing:
///   - `status`: always `"healthy"`
///   - `timestamp`: ISO 8601 UTC time of the check, millisecond precision
///   - `version`: always `"1.0.0"`
///
/// ## Example
/// ```
/// use ai_system_ready::handlers::health::health_check;
///
/// let report = health_check();
/// assert_eq!(report.status, "healthy");
/// assert_eq!(report.version, "1.0.0");
/// ```
///
/// [`HealthStatus`]: crate::models::health::HealthStatus
pub fn health_check() -> HealthStatus {
    let report = HealthStatus::healthy();
    debug!(timestamp = %report.timestamp, version = %report.version, "health check");
    report
}
