use super::health::HealthQuery;
use super::message::MessageQuery;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining the health and message queries
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, MessageQuery);

/// Main GraphQL Schema Definition
///
/// # Type Parameters
/// - `QueryRoot`: Root query type containing all available query operations
/// - `EmptyMutation`: No mutations are exposed
/// - `EmptySubscription`: No subscriptions are exposed
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema.
///
/// The schema is executed in-process; no transport is attached.
///
/// # Example
///
/// ```rust,no_run
/// use ai_system_ready::graphql::schema::create_schema;
///
/// # async fn example() {
/// let schema = create_schema();
/// let response = schema.execute("{ health { status } }").await;
/// assert!(response.errors.is_empty());
/// # }
/// ```
pub fn create_schema() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .finish()
}
