/// # Health Status Record
///
/// Value type returned by the health check, with the `status` and `version`
/// constants it always carries.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00.000Z",
///   "version": "1.0.0"
/// }
/// ```
pub mod health;

pub use health::{HEALTHY_STATUS, HealthStatus, SERVICE_VERSION};
