/// # Health Check
///
/// Reports whether the system is up, with the time of the check and the
/// version string.
///
/// ## Example
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00.000Z",
///   "version": "1.0.0"
/// }
/// ```
pub mod health;

/// Message formatting with an empty-input fallback
pub mod message;
