//! Game lifecycle and move dispatch
//!
//! `NotStarted -> Active -> Ended`, with `reset` returning to `NotStarted`
//! from anywhere. Every command runs to completion before the next one; the
//! only asynchronous step is the agent request, which runs on a worker thread
//! and is collected with [`GameController::poll_agent`] or
//! [`GameController::wait_for_agent`].

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::session::{GameMode, GameSession, GameStatus, PlayerNames};
use crate::agent::{MoveAgent, MoveReply, MoveRequest};
use crate::board::{Move, Stone};
use crate::error::{AgentError, GameError, MoveRejection, PlacementError};
use crate::rules::{find_winning_line, WinningLine};

/// Result of a successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on with `next_turn` to move
    Continue { placed: Move, next_turn: Stone },
    /// `placed` completed a line
    Won { placed: Move, line: WinningLine },
    /// `placed` filled the board without a line
    Draw { placed: Move },
}

impl MoveOutcome {
    pub fn placed(&self) -> Move {
        match self {
            MoveOutcome::Continue { placed, .. } | MoveOutcome::Won { placed, .. } | MoveOutcome::Draw { placed } => {
                *placed
            }
        }
    }
}

type AgentResult = Result<MoveReply, AgentError>;

/// Agent request state
enum AgentState {
    Idle,
    Thinking {
        receiver: Receiver<AgentResult>,
        start_time: Instant,
    },
}

/// Owns the session and drives it through user and agent commands
pub struct GameController {
    session: GameSession,
    agent: Arc<dyn MoveAgent>,
    agent_state: AgentState,
    /// Pause between the agent's answer and the stone appearing
    agent_delay: Duration,
    /// Transient status shown to the user, cleared by the next placement
    message: Option<String>,
}

impl GameController {
    pub fn new(agent: Arc<dyn MoveAgent>) -> Self {
        Self {
            session: GameSession::new(),
            agent,
            agent_state: AgentState::Idle,
            agent_delay: Duration::ZERO,
            message: None,
        }
    }

    pub fn with_agent_delay(mut self, delay: Duration) -> Self {
        self.agent_delay = delay;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    /// Begin a new game. Only allowed when no game is in progress.
    pub fn start(&mut self, mode: GameMode, players: PlayerNames) -> Result<(), GameError> {
        if self.session.status == GameStatus::Active {
            warn!(?mode, "Ignoring start while a game is active");
            return Err(GameError::AlreadyActive);
        }

        info!(?mode, black = %players.black, white = %players.white, "Starting game");
        self.session = GameSession::begin(mode, players);
        self.agent_state = AgentState::Idle;
        self.message = None;
        Ok(())
    }

    /// Abandon whatever is going on and wait for a new mode.
    ///
    /// An outstanding agent answer is dropped unread.
    pub fn reset(&mut self) {
        info!(status = ?self.session.status, moves = self.session.move_count(), "Resetting game");
        self.session = GameSession::new();
        self.agent_state = AgentState::Idle;
        self.message = None;
    }

    /// Place a stone for the human whose turn it is.
    ///
    /// A rejection changes nothing; callers treat it like a click on a
    /// disabled cell.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveRejection> {
        if self.session.status != GameStatus::Active {
            return Err(MoveRejection::NotActive);
        }
        if self.is_agent_thinking() {
            return Err(MoveRejection::AgentThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveRejection::NotYourTurn);
        }

        self.execute_move(row, col).map_err(|e| {
            debug!(row, col, error = %e, "Placement rejected");
            MoveRejection::Placement(e)
        })
    }

    /// Check whether the agent has answered; never blocks.
    ///
    /// `None` while no answer is available.
    pub fn poll_agent(&mut self) -> Option<Result<MoveOutcome, AgentError>> {
        let (result, elapsed) = match &self.agent_state {
            AgentState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => (Err(AgentError::Disconnected), start_time.elapsed()),
            },
            AgentState::Idle => return None,
        };

        self.agent_state = AgentState::Idle;
        Some(self.apply_agent_result(result, elapsed))
    }

    /// Block until the outstanding agent request finishes.
    ///
    /// `None` if no request is outstanding.
    pub fn wait_for_agent(&mut self) -> Option<Result<MoveOutcome, AgentError>> {
        let (result, elapsed) = match &self.agent_state {
            AgentState::Thinking { receiver, start_time } => {
                let result = receiver.recv().unwrap_or(Err(AgentError::Disconnected));
                (result, start_time.elapsed())
            }
            AgentState::Idle => return None,
        };

        self.agent_state = AgentState::Idle;
        Some(self.apply_agent_result(result, elapsed))
    }

    /// Ask the agent again after a failed request.
    ///
    /// Returns false when the agent is not stuck on its turn.
    pub fn retry_agent(&mut self) -> bool {
        if !self.agent_stalled() {
            return false;
        }
        info!(agent = self.agent.name(), "Retrying agent move");
        self.message = None;
        self.start_agent_thinking();
        true
    }

    /// Check if a human may place the next stone
    pub fn is_human_turn(&self) -> bool {
        self.session.status == GameStatus::Active && !self.session.is_agent_turn()
    }

    /// Check if an agent request is outstanding
    pub fn is_agent_thinking(&self) -> bool {
        matches!(self.agent_state, AgentState::Thinking { .. })
    }

    /// The agent is to move but no request is outstanding (last one failed)
    pub fn agent_stalled(&self) -> bool {
        self.session.is_agent_turn() && !self.is_agent_thinking()
    }

    /// Get agent thinking elapsed time
    pub fn agent_thinking_elapsed(&self) -> Option<Duration> {
        match &self.agent_state {
            AgentState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AgentState::Idle => None,
        }
    }

    /// One-line status for the current state
    pub fn status_text(&self) -> String {
        match self.session.status {
            GameStatus::NotStarted => "Select game mode to start".to_string(),
            GameStatus::Active if self.is_agent_thinking() => "AI is thinking...".to_string(),
            GameStatus::Active => {
                let turn = self.session.current_turn;
                format!(
                    "Current Turn: {} ({})",
                    self.session.players.name_of(turn),
                    turn.color_name()
                )
            }
            GameStatus::Ended => self.result_text().unwrap_or_default(),
        }
    }

    /// Announcement for a finished game
    pub fn result_text(&self) -> Option<String> {
        if self.session.status != GameStatus::Ended {
            return None;
        }
        let text = match (self.session.winner, self.session.mode) {
            (None, _) => "It's a draw!".to_string(),
            (Some(Stone::Black), Some(GameMode::LocalVsAgent)) => "You win!".to_string(),
            (Some(_), Some(GameMode::LocalVsAgent)) => "AI wins!".to_string(),
            (Some(winner), _) => format!("{} wins!", self.session.players.name_of(winner)),
        };
        Some(text)
    }

    /// Place a stone for the side to move and advance the game.
    ///
    /// Shared by human and agent moves.
    fn execute_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, PlacementError> {
        let color = self.session.current_turn;
        let pos = self.session.board.place_stone(row, col, color)?;
        let placed = Move::new(pos, color);

        self.session.last_move = Some(pos);
        self.message = None;
        debug!(%pos, ?color, moves = self.session.move_count(), "Stone placed");

        if let Some(line) = find_winning_line(&self.session.board, pos) {
            info!(
                winner = ?color,
                axis = ?line.axis,
                moves = self.session.move_count(),
                "Game won"
            );
            self.session.finish(Some(color), Some(line.clone()));
            return Ok(MoveOutcome::Won { placed, line });
        }

        if self.session.board.is_full() {
            info!(moves = self.session.move_count(), "Board full, game drawn");
            self.session.finish(None, None);
            return Ok(MoveOutcome::Draw { placed });
        }

        let next_turn = color.opponent();
        self.session.current_turn = next_turn;
        if self.session.is_agent_turn() {
            self.start_agent_thinking();
        }

        Ok(MoveOutcome::Continue { placed, next_turn })
    }

    /// Hand the board to the agent on a worker thread
    fn start_agent_thinking(&mut self) {
        if self.is_agent_thinking() || !self.session.is_agent_turn() {
            return;
        }

        let request = MoveRequest::new(&self.session.board);
        let agent = Arc::clone(&self.agent);
        let delay = self.agent_delay;
        let (tx, rx) = channel();

        debug!(agent = agent.name(), moves = self.session.move_count(), "Requesting agent move");
        thread::spawn(move || {
            let result = agent.request_move(&request);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            // Receiver is gone if the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.agent_state = AgentState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Validate and apply an agent answer. Failures leave the board and the
    /// turn as they were.
    fn apply_agent_result(&mut self, result: AgentResult, elapsed: Duration) -> Result<MoveOutcome, AgentError> {
        let outcome = result.and_then(|reply| {
            debug!(row = reply.row, col = reply.col, elapsed_ms = elapsed.as_millis() as u64, "Agent answered");
            let (row, col) = reply_coords(reply).map_err(AgentError::InvalidMove)?;
            self.execute_move(row, col).map_err(AgentError::InvalidMove)
        });

        if let Err(e) = &outcome {
            warn!(agent = self.agent.name(), error = %e, "Agent move failed");
            self.message = Some(format!("Error occurred during AI move: {e}"));
        }
        outcome
    }
}

fn reply_coords(reply: MoveReply) -> Result<(usize, usize), PlacementError> {
    match (usize::try_from(reply.row), usize::try_from(reply.col)) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err(PlacementError::OutOfRange {
            row: reply.row,
            col: reply.col,
        }),
    }
}
