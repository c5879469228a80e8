//! Game state management for the tic-tac-toe GUI
//!
//! The controller owns the board and the turn state machine. It exposes
//! pure state-transition operations and pushes [`GameEvent`]s for the
//! presentation layer to drain, keeping rendering out of the game logic.

use derive_more::{Display, Error};
use tracing::{debug, info, warn};

use crate::board::{Board, Mark, Pos};
use crate::engine::{Engine, MoveResult};
use crate::rules::{self, Outcome};

/// Turn state machine.
///
/// Transitions: a valid human move leaves `AwaitingHuman`; the computer's
/// reply leaves `AwaitingComputer`; terminal boards land in `GameOver`
/// until a new game is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(Outcome),
}

/// Why a human move was rejected.
///
/// Rejections are silent no-ops in the UI; the variants exist for logging
/// and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("cell is already occupied")]
    Occupied,
    #[display("not awaiting a human move")]
    NotHumanTurn,
}

/// Notifications pushed by the controller, drained by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The board changed; carries a snapshot for subscribers.
    BoardChanged(Board),
    /// The game reached a terminal state.
    GameOver(Outcome),
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    /// Statistics of the engine's most recent search
    pub last_result: Option<MoveResult>,

    engine: Engine,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            last_move: None,
            move_history: Vec::new(),
            last_result: None,
            engine: Engine::new(),
            events: Vec::new(),
        }
    }

    /// Reset to an empty board with the human to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::AwaitingHuman;
        self.last_move = None;
        self.move_history.clear();
        self.last_result = None;
        self.events.push(GameEvent::BoardChanged(self.board));
        info!("new game");
    }

    /// Check if it's the human's turn
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.phase == Phase::AwaitingHuman
    }

    /// Check if the computer's reply is pending
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.phase == Phase::AwaitingComputer
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Terminal outcome, if the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Winning line for the game-over highlight, if the game ended in a win.
    #[must_use]
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        match self.phase {
            Phase::GameOver(Outcome::HumanWin) => rules::winning_line(&self.board, Mark::Human),
            Phase::GameOver(Outcome::ComputerWin) => {
                rules::winning_line(&self.board, Mark::Computer)
            }
            _ => None,
        }
    }

    /// Place the human's mark at `pos`.
    ///
    /// Only valid while awaiting a human move and only on an empty cell;
    /// anything else is rejected without changing state.
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.phase != Phase::AwaitingHuman {
            return Err(MoveError::NotHumanTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        self.apply_move(pos, Mark::Human);
        if !self.is_game_over() {
            self.phase = Phase::AwaitingComputer;
        }
        Ok(())
    }

    /// Compute and apply the computer's reply.
    ///
    /// Runs the full search synchronously, so the whole turn (human move
    /// plus computer move) completes before control returns to the input
    /// surface. No-op outside the `AwaitingComputer` phase.
    pub fn step_computer(&mut self) {
        if self.phase != Phase::AwaitingComputer {
            return;
        }

        let result = self.engine.get_move_with_stats(&self.board, Mark::Computer);
        self.last_result = Some(result);

        let Some(pos) = result.best_move else {
            // Unreachable from alternating play: a full board is terminal
            // before the computer's turn comes around.
            warn!("no move available for the computer");
            return;
        };

        self.apply_move(pos, Mark::Computer);
        if !self.is_game_over() {
            self.phase = Phase::AwaitingHuman;
        }
    }

    fn apply_move(&mut self, pos: Pos, mark: Mark) {
        self.board.place_mark(pos, mark);
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        debug!(col = pos.col, row = pos.row, ?mark, "mark placed");
        self.events.push(GameEvent::BoardChanged(self.board));

        let outcome = rules::evaluate(&self.board);
        if outcome.is_terminal() {
            self.phase = Phase::GameOver(outcome);
            self.events.push(GameEvent::GameOver(outcome));
            info!(?outcome, moves = self.move_history.len(), "game over");
        }
    }

    /// Drain pending notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
