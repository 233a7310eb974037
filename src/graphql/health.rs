use crate::handlers::health::health_check;
use crate::models::health::HealthStatus;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of the health status record
///
/// # Fields
/// - `status`: always "healthy"
/// - `timestamp`: ISO-8601 UTC timestamp of the check
/// - `version`: always "1.0.0"
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl From<HealthStatus> for Health {
    fn from(report: HealthStatus) -> Self {
        Self {
            status: report.status,
            timestamp: report.timestamp,
            version: report.version,
        }
    }
}

#[Object]
impl Health {
    /// Current status indicator, always "healthy"
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO-8601 timestamp of the check, millisecond precision, UTC
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Version string, always "1.0.0"
    async fn version(&self) -> &str {
        &self.version
    }
}

/// Root query for health reporting
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Reports the current health status
    ///
    /// # Errors
    /// Never fails; the `Result` is what the resolver signature expects.
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(health_check()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::DateTime;

    fn health_schema() -> Schema<HealthQuery, EmptyMutation, EmptySubscription> {
        Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish()
    }

    #[test]
    fn test_health_from_health_status() {
        let report = HealthStatus::healthy();
        let timestamp = report.timestamp.clone();

        let health = Health::from(report);

        assert_eq!(health.status, "healthy");
        assert_eq!(health.timestamp, timestamp);
        assert_eq!(health.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let query = r#"
            query {
                health {
                    status
                    timestamp
                    version
                }
            }
        "#;

        let result = health_schema().execute(query).await;

        assert!(result.errors.is_empty());
        let data = result.data.into_json().unwrap();

        assert_eq!(data["health"]["status"], "healthy");
        assert_eq!(data["health"]["version"], "1.0.0");

        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_query_single_field() {
        let result = health_schema().execute("{ health { version } }").await;

        assert!(result.errors.is_empty());
        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["version"], "1.0.0");
        assert!(data["health"].get("status").is_none());
    }
}
