//! Agent reached over HTTP

use reqwest::blocking::Client;
use tracing::{debug, instrument, warn};

use super::protocol::{MoveReply, MoveRequest, MoveResponse};
use super::MoveAgent;
use crate::error::AgentError;

/// Posts the board to `<base_url>/make_move` and reads back one coordinate.
///
/// Requests are not timed out; the controller waits for the answer.
#[derive(Debug, Clone)]
pub struct HttpAgent {
    endpoint: String,
    client: Client,
}

impl HttpAgent {
    pub fn new(base_url: &str) -> Result<Self, AgentError> {
        let client = Client::builder().timeout(None).build()?;
        Ok(Self {
            endpoint: format!("{}/make_move", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MoveAgent for HttpAgent {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    fn request_move(&self, request: &MoveRequest) -> Result<MoveReply, AgentError> {
        debug!("Sending agent move request");
        let response = self.client.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Agent returned error status");
            return Err(AgentError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let reply = MoveResponse::parse(&body)?;
        debug!(row = reply.row, col = reply.col, "Agent replied");
        Ok(reply)
    }
}
