//! Per-game state owned by the controller

use std::time::{Duration, Instant};

use crate::board::{Board, Pos, Stone};
use crate::rules::WinningLine;

/// Who controls White
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the board
    LocalTwoPlayer,
    /// Human plays Black, the agent plays White
    LocalVsAgent,
}

impl GameMode {
    /// Color the agent plays in this mode, if any
    pub fn agent_color(self) -> Option<Stone> {
        match self {
            GameMode::LocalTwoPlayer => None,
            GameMode::LocalVsAgent => Some(Stone::White),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Active,
    Ended,
}

/// Display names for Black and White
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub black: String,
    pub white: String,
}

impl PlayerNames {
    /// Names as typed by the players: only letters, digits and spaces are
    /// kept, and blank entries fall back to "Player 1" / "Player 2".
    pub fn sanitized(black: &str, white: &str) -> Self {
        Self {
            black: clean_name(black).unwrap_or_else(|| "Player 1".to_string()),
            white: clean_name(white).unwrap_or_else(|| "Player 2".to_string()),
        }
    }

    /// Fixed names for a game against the agent
    pub fn versus_agent() -> Self {
        Self {
            black: "You".to_string(),
            white: "AI".to_string(),
        }
    }

    pub fn name_of(&self, stone: Stone) -> &str {
        match stone {
            Stone::White => &self.white,
            _ => &self.black,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::sanitized("", "")
    }
}

fn clean_name(raw: &str) -> Option<String> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let trimmed = kept.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Everything about the game in progress (or the one that just ended)
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_turn: Stone,
    pub(crate) mode: Option<GameMode>,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Stone>,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) players: PlayerNames,
    pub(crate) last_move: Option<Pos>,
    pub(crate) clock: GameClock,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session waiting for a mode to be picked
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            mode: None,
            status: GameStatus::NotStarted,
            winner: None,
            winning_line: None,
            players: PlayerNames::default(),
            last_move: None,
            clock: GameClock::default(),
        }
    }

    /// A fresh, active game with Black to move
    pub(crate) fn begin(mode: GameMode, players: PlayerNames) -> Self {
        let mut clock = GameClock::default();
        clock.start();
        Self {
            mode: Some(mode),
            status: GameStatus::Active,
            players,
            clock,
            ..Self::new()
        }
    }

    pub(crate) fn finish(&mut self, winner: Option<Stone>, line: Option<WinningLine>) {
        self.status = GameStatus::Ended;
        self.winner = winner;
        self.winning_line = line;
        self.clock.stop();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn players(&self) -> &PlayerNames {
        &self.players
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Ended on a full board without a line
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Ended && self.winner.is_none()
    }

    /// Whether the side to move is driven by the agent
    pub fn is_agent_turn(&self) -> bool {
        self.status == GameStatus::Active
            && self.mode.and_then(GameMode::agent_color) == Some(self.current_turn)
    }

    /// Time spent in the game; frozen once it ends
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}

/// Wall-clock time of one game
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GameClock {
    started: Option<Instant>,
    frozen: Option<Duration>,
}

impl GameClock {
    fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = None;
    }

    fn stop(&mut self) {
        self.frozen = Some(self.elapsed());
        self.started = None;
    }

    fn elapsed(&self) -> Duration {
        self.frozen
            .or_else(|| self.started.map(|t| t.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}

/// `m:ss`, as shown next to the board
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
