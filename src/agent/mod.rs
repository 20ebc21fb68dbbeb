//! Move-selection agents
//!
//! The controller only sees [`MoveAgent`]: it hands over a board snapshot and
//! gets back one coordinate, which it validates before applying. Two agents
//! ship with the crate:
//! - [`HttpAgent`]: posts the board to a remote `/make_move` endpoint
//! - [`MinimaxAgent`]: searches locally, used when no endpoint is configured

pub mod http;
pub mod minimax;
pub mod protocol;

use std::sync::Arc;

use tracing::info;

pub use http::HttpAgent;
pub use minimax::{MinimaxAgent, SearchConfig};
pub use protocol::{MoveReply, MoveRequest, MoveResponse};

use crate::config::Settings;
use crate::error::AgentError;

/// Something that picks a move for the non-human side.
///
/// Called from a worker thread, one request at a time.
pub trait MoveAgent: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &str;

    /// Choose a move for the given board. The reply is not trusted.
    fn request_move(&self, request: &MoveRequest) -> Result<MoveReply, AgentError>;
}

/// Build the agent selected by the settings
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn MoveAgent>, AgentError> {
    match &settings.agent_url {
        Some(url) => {
            let agent = HttpAgent::new(url)?;
            info!(endpoint = agent.endpoint(), "Using remote agent");
            Ok(Arc::new(agent))
        }
        None => {
            let config = settings.search_config();
            info!(depth = config.depth, time_limit_ms = config.time_limit.as_millis() as u64, "Using local minimax agent");
            Ok(Arc::new(MinimaxAgent::new(config)))
        }
    }
}
