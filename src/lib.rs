pub mod graphql;
pub mod handlers;
pub mod models;

pub use handlers::health::health_check;
pub use handlers::message::{NO_MESSAGE_FALLBACK, READY_PREFIX, process_message};
pub use models::health::{HEALTHY_STATUS, HealthStatus, SERVICE_VERSION};
