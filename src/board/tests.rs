use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Human.opponent(), Mark::Computer);
    assert_eq!(Mark::Computer.opponent(), Mark::Human);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.col, 2);
    assert_eq!(pos.row, 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 1 * 3 + 1);
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.col, 1);
    assert_eq!(pos2.row, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(Pos::is_valid(1, 1));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    // Bottom-left
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    // Top-right
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    // Bottom-right
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_scan_order_is_column_major() {
    let order: Vec<Pos> = Pos::all().collect();
    assert_eq!(order.len(), TOTAL_CELLS);
    assert_eq!(order[0], Pos::new(0, 0));
    assert_eq!(order[1], Pos::new(0, 1));
    assert_eq!(order[2], Pos::new(0, 2));
    assert_eq!(order[3], Pos::new(1, 0));
    assert_eq!(order[8], Pos::new(2, 2));
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new();
    let pos = Pos::new(1, 2);

    assert!(board.is_empty(pos));
    board.place_mark(pos, Mark::Human);
    assert_eq!(board.get(pos), Mark::Human);
    assert!(!board.is_empty(pos));

    board.clear_mark(pos);
    assert_eq!(board.get(pos), Mark::Empty);
}

#[test]
fn test_empty_cells_skips_occupied() {
    let mut board = Board::new();
    board.place_mark(Pos::new(0, 0), Mark::Human);
    board.place_mark(Pos::new(1, 1), Mark::Computer);

    let empties: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(empties.len(), 7);
    assert!(!empties.contains(&Pos::new(0, 0)));
    assert!(!empties.contains(&Pos::new(1, 1)));
    // Scan order preserved
    assert_eq!(empties[0], Pos::new(0, 1));
}

#[test]
fn test_counts() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_mark(Pos::new(0, 0), Mark::Human);
    board.place_mark(Pos::new(2, 2), Mark::Human);
    board.place_mark(Pos::new(1, 1), Mark::Computer);

    assert_eq!(board.mark_count(Mark::Human), 2);
    assert_eq!(board.mark_count(Mark::Computer), 1);
    assert_eq!(board.count(), 3);
    assert!(!board.is_board_empty());
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        let mark = if i % 2 == 0 { Mark::Human } else { Mark::Computer };
        board.place_mark(pos, mark);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    board.place_mark(Pos::new(0, 0), Mark::Human);
    board.place_mark(Pos::new(1, 0), Mark::Computer);

    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board, Board::new());
}
