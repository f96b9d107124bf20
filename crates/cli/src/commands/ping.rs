//! `stockroom ping` command handler.

use stockroom_client::ApiClient;
use stockroom_core::messages;

use crate::error::CliError;
use crate::output::{MessageReport, OutputWriter};

/// Hit the API root and print its greeting.
pub async fn execute(api: ApiClient, writer: &OutputWriter) -> Result<(), CliError> {
    match api.server_message().await {
        Ok(message) => writer.render(&MessageReport { message }),
        Err(err) => {
            tracing::debug!(%err, "ping failed");
            Err(CliError::Command(messages::SERVER_MESSAGE_FAILED.to_string()))
        }
    }
}
