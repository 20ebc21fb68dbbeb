use super::*;
use crate::error::{BoardError, PlacementError};
use proptest::prelude::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    assert_eq!(Stone::Empty.code(), 0);
    assert_eq!(Stone::Black.code(), 1);
    assert_eq!(Stone::White.code(), 2);
    assert_eq!(Stone::from_code(2), Some(Stone::White));
    assert_eq!(Stone::from_code(3), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(5, 5);
    assert_eq!(pos.to_index(), 55);
    assert_eq!(Pos::from_index(55), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(10, 0));
    assert!(!Pos::is_valid(0, 10));
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_new(3, 10), None);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 9);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 7)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 10);
    assert_eq!(TOTAL_CELLS, 100);
}

#[test]
fn test_place_and_read_back() {
    let mut board = Board::new();
    assert_eq!(board.place_stone(2, 3, Stone::Black), Ok(Pos::new(2, 3)));
    assert_eq!(board.cell_at(2, 3), Stone::Black);
    assert_eq!(board.cell_at(3, 2), Stone::Empty);
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_occupied_rejected() {
    let mut board = Board::new();
    board.place_stone(4, 4, Stone::Black).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place_stone(4, 4, Stone::White),
        Err(PlacementError::Occupied { row: 4, col: 4 })
    );
    assert_eq!(board, before);
    assert_eq!(board.move_count(), 1);
    assert_eq!(board.cell_at(4, 4), Stone::Black);
}

#[test]
fn test_out_of_range_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_stone(10, 0, Stone::Black),
        Err(PlacementError::OutOfRange { row: 10, col: 0 })
    );
    assert!(board.place_stone(0, 42, Stone::White).is_err());
    assert!(board.is_board_empty());
}

#[test]
fn test_empty_stone_rejected() {
    let mut board = Board::new();
    assert_eq!(board.place_stone(1, 1, Stone::Empty), Err(PlacementError::NoStone));
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(idx / BOARD_SIZE, idx % BOARD_SIZE, stone).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.move_count(), TOTAL_CELLS);
}

#[test]
fn test_grid_round_trip() {
    let mut board = Board::new();
    board.place_stone(0, 0, Stone::Black).unwrap();
    board.place_stone(9, 8, Stone::White).unwrap();

    let grid = board.grid();
    assert_eq!(grid.len(), BOARD_SIZE);
    assert_eq!(grid[0][0], 1);
    assert_eq!(grid[9][8], 2);
    assert_eq!(grid[5][5], 0);
    assert_eq!(Board::from_grid(&grid), Ok(board));
}

#[test]
fn test_from_grid_rejects_bad_shapes() {
    assert_eq!(Board::from_grid(&[]), Err(BoardError::RowCount(0)));

    let mut grid = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    grid[3].pop();
    assert_eq!(Board::from_grid(&grid), Err(BoardError::ColumnCount { row: 3, len: 9 }));

    let mut grid = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    grid[1][2] = 7;
    assert_eq!(
        Board::from_grid(&grid),
        Err(BoardError::UnknownCode { row: 1, col: 2, code: 7 })
    );
}

#[test]
fn test_bitboard_iteration_order() {
    let mut bits = Bitboard::new();
    bits.set(Pos::new(9, 9));
    bits.set(Pos::new(0, 3));
    bits.set(Pos::new(4, 0));
    let cells: Vec<Pos> = bits.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 3), Pos::new(4, 0), Pos::new(9, 9)]);
    bits.clear(Pos::new(4, 0));
    assert_eq!(bits.count(), 2);
}

fn any_stone() -> impl Strategy<Value = Stone> {
    prop_oneof![Just(Stone::Black), Just(Stone::White)]
}

proptest! {
    #[test]
    fn prop_empty_cell_placement_succeeds(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        stone in any_stone(),
        prefill in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..30),
    ) {
        let mut board = Board::new();
        for (r, c) in prefill {
            if (r, c) != (row, col) {
                let _ = board.place_stone(r, c, Stone::Black);
            }
        }
        let count = board.move_count();

        prop_assert!(board.place_stone(row, col, stone).is_ok());
        prop_assert_eq!(board.cell_at(row, col), stone);
        prop_assert_eq!(board.move_count(), count + 1);
    }

    #[test]
    fn prop_occupied_placement_is_idempotent(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        first in any_stone(),
        second in any_stone(),
    ) {
        let mut board = Board::new();
        board.place_stone(row, col, first).unwrap();
        let before = board.clone();

        prop_assert!(board.place_stone(row, col, second).is_err());
        prop_assert_eq!(&board, &before);
        prop_assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn prop_out_of_range_never_mutates(row in 0usize..40, col in 0usize..40, stone in any_stone()) {
        prop_assume!(row >= BOARD_SIZE || col >= BOARD_SIZE);
        let mut board = Board::new();
        prop_assert!(board.place_stone(row, col, stone).is_err());
        prop_assert!(board.is_board_empty());
    }
}
