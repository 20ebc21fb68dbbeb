//! Five-in-a-row detection
//!
//! A move wins when it completes a line of five or more same-colored stones
//! on any of the four axes through it. Overlines count.

use std::collections::VecDeque;

use crate::board::{Board, Pos, Stone};

/// The four line axes, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step `(dr, dc)` along the axis
    #[inline]
    pub fn step(self) -> (i64, i64) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Contiguous stones that ended the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub axis: Axis,
    /// Ordered from the back end of the axis step to the front end
    pub cells: Vec<Pos>,
}

impl WinningLine {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Contiguous run of `color` through `pos` along one axis.
///
/// `pos` itself is always part of the run. Walks stop at the board edge or
/// the first cell of another color.
fn run_through(board: &Board, pos: Pos, color: Stone, axis: Axis) -> Vec<Pos> {
    let (dr, dc) = axis.step();
    let mut line = VecDeque::from([pos]);

    // Negative direction, kept in board order by prepending
    let mut n = 1;
    while let Some(p) = pos.offset(-dr, -dc, n) {
        if board.get(p) != color {
            break;
        }
        line.push_front(p);
        n += 1;
    }

    // Positive direction
    let mut n = 1;
    while let Some(p) = pos.offset(dr, dc, n) {
        if board.get(p) != color {
            break;
        }
        line.push_back(p);
        n += 1;
    }

    line.into()
}

/// Find the line completed by the stone at `pos`, if any.
///
/// Axes are checked horizontal, vertical, diagonal, anti-diagonal and the
/// first one holding five or more wins. An empty cell never wins.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<WinningLine> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    Axis::ALL.into_iter().find_map(|axis| {
        let cells = run_through(board, pos, color, axis);
        (cells.len() >= 5).then_some(WinningLine { axis, cells })
    })
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    stones.iter_ones().any(|pos| {
        Axis::ALL.into_iter().any(|axis| {
            let (dr, dc) = axis.step();
            (1..5).all(|n| pos.offset(dr, dc, n).is_some_and(|p| board.get(p) == stone))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn place(board: &mut Board, cells: &[(usize, usize)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(r, c, stone).unwrap();
        }
    }

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_top_row_five_reports_line_in_order() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Stone::Black);

        let line = find_winning_line(&board, p(0, 4)).unwrap();
        assert_eq!(line.axis, Axis::Horizontal);
        assert_eq!(line.cells, vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4)]);
    }

    #[test]
    fn test_blocked_four_not_win() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], Stone::Black);
        place(&mut board, &[(5, 4)], Stone::White);

        assert!(find_winning_line(&board, p(5, 3)).is_none());
        assert!(find_winning_line(&board, p(5, 0)).is_none());
    }

    #[test]
    fn test_open_four_not_win() {
        let mut board = Board::new();
        place(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], Stone::White);
        assert!(find_winning_line(&board, p(3, 6)).is_none());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place(&mut board, &[(1, 9), (2, 9), (3, 9), (4, 9), (5, 9)], Stone::White);

        let line = find_winning_line(&board, p(3, 9)).unwrap();
        assert_eq!(line.axis, Axis::Vertical);
        assert_eq!(line.cells, vec![p(1, 9), p(2, 9), p(3, 9), p(4, 9), p(5, 9)]);
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::Black);

        let line = find_winning_line(&board, p(2, 2)).unwrap();
        assert_eq!(line.axis, Axis::Diagonal);
        assert_eq!(line.cells.first(), Some(&p(0, 0)));
        assert_eq!(line.cells.last(), Some(&p(4, 4)));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let mut board = Board::new();
        // (2, 8) down-left to (6, 4)
        place(&mut board, &[(2, 8), (3, 7), (4, 6), (5, 5), (6, 4)], Stone::White);

        let line = find_winning_line(&board, p(6, 4)).unwrap();
        assert_eq!(line.axis, Axis::AntiDiagonal);
        assert_eq!(line.cells, vec![p(2, 8), p(3, 7), p(4, 6), p(5, 5), p(6, 4)]);
    }

    #[test]
    fn test_overline_reports_every_stone() {
        let mut board = Board::new();
        place(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 4), (9, 5), (9, 6)], Stone::Black);
        assert!(find_winning_line(&board, p(9, 2)).is_none());

        place(&mut board, &[(9, 3)], Stone::Black);
        let line = find_winning_line(&board, p(9, 3)).unwrap();
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn test_horizontal_checked_before_vertical() {
        let mut board = Board::new();
        place(&mut board, &[(4, 0), (4, 1), (4, 3), (4, 4)], Stone::Black);
        place(&mut board, &[(0, 2), (1, 2), (2, 2), (3, 2)], Stone::Black);
        place(&mut board, &[(4, 2)], Stone::Black);

        let line = find_winning_line(&board, p(4, 2)).unwrap();
        assert_eq!(line.axis, Axis::Horizontal);
        assert!(!line.contains(p(0, 2)));
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        let mut board = Board::new();
        place(&mut board, &[(7, 0), (7, 1), (7, 3), (7, 4)], Stone::Black);
        place(&mut board, &[(7, 2)], Stone::White);
        assert!(find_winning_line(&board, p(7, 2)).is_none());
        assert!(find_winning_line(&board, p(7, 4)).is_none());
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(find_winning_line(&board, p(5, 5)).is_none());
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        let cells: Vec<(usize, usize)> = (5..BOARD_SIZE).map(|i| (i, i)).collect();
        place(&mut board, &cells, Stone::White);
        assert!(find_winning_line(&board, p(9, 9)).is_some());
        assert!(has_five_in_row(&board, Stone::White));
        assert!(!has_five_in_row(&board, Stone::Black));
    }

    #[test]
    fn test_global_scan() {
        let mut board = Board::new();
        place(&mut board, &[(0, 9), (1, 8), (2, 7), (3, 6)], Stone::Black);
        assert!(!has_five_in_row(&board, Stone::Black));
        place(&mut board, &[(4, 5)], Stone::Black);
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::Empty));
    }
}
