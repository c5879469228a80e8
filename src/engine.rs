//! Move selection facade
//!
//! Wraps the exhaustive minimax searcher behind a small engine API and
//! reports timing and node statistics alongside the chosen move. There is
//! no opening book, no threat ladder and no cache: the full game-tree
//! search is the entire strategy, and it completes well under any
//! perceptible-latency bound on a 3x3 board.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Engine, Mark, Pos};
//!
//! let mut engine = Engine::new();
//! let mut board = Board::new();
//! board.place_mark(Pos::new(1, 1), Mark::Human);
//!
//! if let Some(pos) = engine.get_move(&board, Mark::Computer) {
//!     board.place_mark(pos, Mark::Computer);
//! }
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::search::Searcher;

/// Result of a move search with timing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax weight of the chosen move
    pub weight: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of placements explored
    pub nodes: u64,
}

/// Move-selection engine for the computer opponent.
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper around [`Engine::get_move_with_stats`] that
    /// returns only the move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// Runs the exhaustive search synchronously and returns the chosen
    /// move, its weight, the node count and the elapsed time.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();

        match self.searcher.best_move(board, mark) {
            Some(result) => {
                let time_ms = start.elapsed().as_millis() as u64;
                debug!(
                    col = result.best_move.col,
                    row = result.best_move.row,
                    weight = result.weight,
                    nodes = result.nodes,
                    time_ms,
                    "search complete"
                );
                MoveResult {
                    best_move: Some(result.best_move),
                    weight: result.weight,
                    time_ms,
                    nodes: result.nodes,
                }
            }
            None => MoveResult {
                best_move: None,
                weight: 0,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        // Computer two-in-a-row on the middle row, human on the top row
        board.place_mark(Pos::new(0, 1), Mark::Computer);
        board.place_mark(Pos::new(1, 1), Mark::Computer);
        board.place_mark(Pos::new(0, 0), Mark::Human);
        board.place_mark(Pos::new(1, 0), Mark::Human);
        board.place_mark(Pos::new(2, 2), Mark::Human);

        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board, Mark::Computer);

        assert_eq!(result.best_move, Some(Pos::new(2, 1)));
        assert_eq!(result.weight, 10);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        // Human threatens the top row at (2, 0)
        board.place_mark(Pos::new(0, 0), Mark::Human);
        board.place_mark(Pos::new(1, 0), Mark::Human);
        board.place_mark(Pos::new(1, 1), Mark::Computer);

        let mut engine = Engine::new();
        let result = engine.get_move(&board, Mark::Computer);

        assert_eq!(result, Some(Pos::new(2, 0)));
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new();
        let mut engine = Engine::new();

        let result = engine.get_move_with_stats(&board, Mark::Computer);
        let pos = result.best_move.unwrap();
        assert!(board.is_empty(pos));
        assert!(result.nodes >= 9);
    }

    #[test]
    fn test_engine_full_board_no_move() {
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            let mark = if i % 2 == 0 { Mark::Human } else { Mark::Computer };
            board.place_mark(pos, mark);
        }

        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board, Mark::Computer);
        assert!(result.best_move.is_none());
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = Engine::new();
        let board = Board::new();

        let result1 = engine.get_move(&board, Mark::Computer);
        let result2 = engine.get_move(&board, Mark::Computer);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_engine_alternating_marks() {
        let mut engine = Engine::new();
        let mut board = Board::new();

        let human_move = engine.get_move(&board, Mark::Human);
        assert!(human_move.is_some());
        board.place_mark(human_move.unwrap(), Mark::Human);

        let computer_move = engine.get_move(&board, Mark::Computer);
        assert!(computer_move.is_some());
        board.place_mark(computer_move.unwrap(), Mark::Computer);

        assert_eq!(board.count(), 2);
    }
}
