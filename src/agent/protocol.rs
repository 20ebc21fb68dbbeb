//! JSON bodies exchanged with a move-selection agent
//!
//! Request: `{"board": [[0, 1, 2, ...], ...], "player": "ai"}`
//! Response: `{"row": 4, "col": 5}` or `{"error": "..."}`

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::AgentError;

/// Player tag the agent server expects for its own moves
pub const AGENT_PLAYER_TAG: &str = "ai";

/// Board snapshot sent to the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Rows of cell codes: 0 empty, 1 black, 2 white
    pub board: Vec<Vec<u8>>,
    pub player: String,
}

impl MoveRequest {
    pub fn new(board: &Board) -> Self {
        Self {
            board: board.grid(),
            player: AGENT_PLAYER_TAG.to_string(),
        }
    }
}

/// Coordinates chosen by the agent. Signed: the engine validates them, not the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReply {
    pub row: i64,
    pub col: i64,
}

/// Either shape the agent may answer with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MoveResponse {
    Move(MoveReply),
    Error { error: String },
}

impl MoveResponse {
    pub fn into_reply(self) -> Result<MoveReply, AgentError> {
        match self {
            MoveResponse::Move(reply) => Ok(reply),
            MoveResponse::Error { error } => Err(AgentError::Rejected(error)),
        }
    }

    /// Parse a raw response body
    pub fn parse(body: &str) -> Result<MoveReply, AgentError> {
        serde_json::from_str::<MoveResponse>(body)
            .map_err(|e| AgentError::Malformed(e.to_string()))?
            .into_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_request_body_shape() {
        let mut board = Board::new();
        board.place_stone(0, 1, Stone::Black).unwrap();
        board.place_stone(1, 0, Stone::White).unwrap();

        let json = serde_json::to_value(MoveRequest::new(&board)).unwrap();
        assert_eq!(json["player"], "ai");
        assert_eq!(json["board"][0][1], 1);
        assert_eq!(json["board"][1][0], 2);
        assert_eq!(json["board"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(MoveResponse::parse(r#"{"row": 3, "col": 7}"#).unwrap(), MoveReply { row: 3, col: 7 });
    }

    #[test]
    fn test_parse_negative_coordinates_passes_through() {
        let reply = MoveResponse::parse(r#"{"row": -1, "col": 12}"#).unwrap();
        assert_eq!(reply, MoveReply { row: -1, col: 12 });
    }

    #[test]
    fn test_parse_error_body() {
        let err = MoveResponse::parse(r#"{"error": "Invalid player"}"#).unwrap_err();
        assert!(matches!(err, AgentError::Rejected(msg) if msg == "Invalid player"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(MoveResponse::parse("<html>"), Err(AgentError::Malformed(_))));
        assert!(matches!(MoveResponse::parse(r#"{"row": 3}"#), Err(AgentError::Malformed(_))));
    }
}
