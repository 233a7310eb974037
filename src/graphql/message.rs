use crate::handlers::message::process_message;
use async_graphql::{Context, Object, Result};

/// Root query for message formatting
#[derive(Default)]
pub struct MessageQuery;

#[Object]
impl MessageQuery {
    /// Formats `message` as a readiness announcement
    ///
    /// An omitted argument, `null` and `""` all return "No message provided".
    async fn process_message(
        &self,
        _ctx: &Context<'_>,
        message: Option<String>,
    ) -> Result<String> {
        Ok(process_message(message.as_deref()))
    }
}
