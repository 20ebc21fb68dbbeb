//! In-process move selection: fixed-depth minimax with alpha-beta pruning
//!
//! Used when no remote agent is configured. The agent plays White against
//! Black and scores positions by counting open five-cell windows.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::agent::{MinimaxAgent, MoveAgent, MoveRequest, SearchConfig};
//! use gomoku::{Board, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(5, 5, Stone::Black).unwrap();
//!
//! let agent = MinimaxAgent::new(SearchConfig { depth: 1, time_limit: Duration::from_millis(500) });
//! let reply = agent.request_move(&MoveRequest::new(&board)).unwrap();
//! assert_eq!(board.cell_at(reply.row as usize, reply.col as usize), Stone::Empty);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use super::protocol::{MoveReply, MoveRequest};
use super::MoveAgent;
use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::AgentError;
use crate::rules::has_five_in_row;

/// Terminal score for a completed five
const WIN_SCORE: i64 = 10_000;

/// Candidate count above which the board counts as "mostly empty"
const OPENING_THRESHOLD: usize = 80;

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root candidate
    pub depth: u8,
    /// Wall-clock budget for one move
    pub time_limit: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            time_limit: Duration::from_secs(5),
        }
    }
}

/// Minimax agent playing White
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl MoveAgent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn request_move(&self, request: &MoveRequest) -> Result<MoveReply, AgentError> {
        let mut board = Board::from_grid(&request.board).map_err(|e| AgentError::Malformed(e.to_string()))?;
        let mut search = Search::new(Stone::White, self.config);
        let pos = search.best_move(&mut board).ok_or(AgentError::NoMove)?;
        debug!(
            row = pos.row,
            col = pos.col,
            nodes = search.nodes,
            time_ms = search.start.elapsed().as_millis() as u64,
            "Minimax search finished"
        );
        Ok(MoveReply {
            row: pos.row as i64,
            col: pos.col as i64,
        })
    }
}

/// State for one move decision
struct Search {
    me: Stone,
    config: SearchConfig,
    start: Instant,
    nodes: u64,
}

impl Search {
    fn new(me: Stone, config: SearchConfig) -> Self {
        Self {
            me,
            config,
            start: Instant::now(),
            nodes: 0,
        }
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.start.elapsed() > self.config.time_limit
    }

    fn best_move(&mut self, board: &mut Board) -> Option<Pos> {
        let moves = candidate_moves(board);
        let first = *moves.first()?;

        // Mostly empty board: take the center if it is free
        if moves.len() > OPENING_THRESHOLD {
            let center = Pos::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8);
            if moves.contains(&center) {
                return Some(center);
            }
        }

        let mut best: Option<(Pos, i64)> = None;
        let mut alpha = i64::MIN;
        let beta = i64::MAX;

        for &mv in &moves {
            if self.out_of_time() {
                break;
            }
            board.set_stone(mv, self.me);
            let score = self.minimax(board, self.config.depth, false, alpha, beta);
            board.remove_stone(mv);

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        Some(best.map_or(first, |(pos, _)| pos))
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool, mut alpha: i64, mut beta: i64) -> i64 {
        self.nodes += 1;

        if self.out_of_time() || depth == 0 {
            return evaluate(board, self.me);
        }
        if has_five_in_row(board, self.me) {
            return WIN_SCORE;
        }
        if has_five_in_row(board, self.me.opponent()) {
            return -WIN_SCORE;
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            return 0;
        }

        let (to_move, mut best) = if maximizing {
            (self.me, i64::MIN)
        } else {
            (self.me.opponent(), i64::MAX)
        };

        for mv in moves {
            board.set_stone(mv, to_move);
            let score = self.minimax(board, depth - 1, !maximizing, alpha, beta);
            board.remove_stone(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Empty cells touching at least one stone, or every empty cell when none do.
/// Row-major order.
fn candidate_moves(board: &Board) -> Vec<Pos> {
    let occupied = board.occupied();
    let empties = (0..TOTAL_CELLS).map(Pos::from_index).filter(|&p| !occupied.get(p));

    let near: Vec<Pos> = empties
        .clone()
        .filter(|&p| {
            (-1..=1).any(|dr| {
                (-1..=1).any(|dc| (dr, dc) != (0, 0) && p.offset(dr, dc, 1).is_some_and(|n| occupied.get(n)))
            })
        })
        .collect();

    if near.is_empty() {
        empties.collect()
    } else {
        near
    }
}

/// Sum of window scores over every five-cell window on the board
fn evaluate(board: &Board, me: Stone) -> i64 {
    let last = BOARD_SIZE - 5;
    let mut score = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let origin = Pos::new(row as u8, col as u8);
            if col <= last {
                score += window_score(board, me, |k| Pos::new(origin.row, origin.col + k));
            }
            if row <= last {
                score += window_score(board, me, |k| Pos::new(origin.row + k, origin.col));
            }
            if row <= last && col <= last {
                score += window_score(board, me, |k| Pos::new(origin.row + k, origin.col + k));
                score += window_score(board, me, |k| Pos::new(origin.row + k, origin.col + 4 - k));
            }
        }
    }
    score
}

/// +10^n for n own stones alone in the window, -10^n for n opponent stones alone
fn window_score(board: &Board, me: Stone, cell: impl Fn(u8) -> Pos) -> i64 {
    let mut mine = 0u32;
    let mut theirs = 0u32;
    for k in 0..5 {
        match board.get(cell(k)) {
            Stone::Empty => {}
            s if s == me => mine += 1,
            _ => theirs += 1,
        }
    }

    match (mine, theirs) {
        (0, 0) => 0,
        (n, 0) => 10i64.pow(n),
        (0, n) => -10i64.pow(n),
        _ => 0,
    }
}
