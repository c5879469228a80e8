//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 160.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Occupied cells are still reported on click; the controller decides
    /// what is a legal move. `accept_input` suppresses hover and clicks
    /// while the computer is moving or the game is over.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board fitted to the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos);
                    }
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two vertical and two horizontal grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            match board.get(pos) {
                Mark::Human => self.draw_x(painter, pos),
                Mark::Computer => self.draw_o(painter, pos),
                Mark::Empty => {}
            }
        }
    }

    /// Draw the human's X as two crossing segments
    fn draw_x(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(MARK_STROKE_WIDTH, HUMAN_MARK);

        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.left_bottom(), rect.right_top()], stroke);
    }

    /// Draw the computer's O as a circle stroke
    fn draw_o(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * (0.5 - MARK_INSET_RATIO);

        painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, COMPUTER_MARK));
    }

    /// Draw a small marker in the corner of the most recent move's cell
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let marker = Pos2::new(rect.max.x - 12.0, rect.min.y + 12.0);
        painter.circle_filled(marker, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a stroke through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[2]);
        painter.line_segment([start, end], stroke);
    }

    /// Draw a faint X preview on the hovered empty cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(MARK_STROKE_WIDTH, hover_preview());

        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.left_bottom(), rect.right_top()], stroke);
    }

    /// Convert screen coordinates to a cell, if inside the grid
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(col, row) {
            Some(Pos::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Screen center of a cell
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
