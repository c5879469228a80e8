//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2,
    ViewportCommand,
};
use tracing::debug;

use crate::rules::Outcome;

use super::board_view::BoardView;
use super::game_state::{GameEvent, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You play X");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, ctx, outcome);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✕◯").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("an unbeatable opponent")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (symbol, symbol_color, title, status) = if self.state.is_game_over() {
                let outcome = self.state.outcome();
                let (symbol, color) = match outcome {
                    Some(Outcome::HumanWin) => ("X", HUMAN_MARK),
                    Some(Outcome::ComputerWin) => ("O", COMPUTER_MARK),
                    _ => ("=", TEXT_SECONDARY),
                };
                (symbol, color, "GAME OVER", ("Finished", STATUS_OVER))
            } else if self.state.is_human_turn() {
                ("X", HUMAN_MARK, "YOUR TURN", ("Click a cell", STATUS_ACTIVE))
            } else {
                ("O", COMPUTER_MARK, "COMPUTER", ("Thinking...", STATUS_OVER))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, BOARD_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(28.0),
                    symbol_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(title).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("New Game").size(12.0).color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last search's statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("weight {}", result.weight))
                                .size(11.0)
                                .strong()
                                .color(STATUS_ACTIVE),
                        );
                        ui.label(
                            RichText::new(format!("{} nodes", result.nodes))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.label(
                            RichText::new(format!("{}ms", result.time_ms))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'a' + pos.col) as char;
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("→ {}{}", col, pos.row + 1))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(
                    RichText::new("No search yet")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render the end-of-game prompt
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, ctx: &Context, outcome: Outcome) {
        let headline = match outcome {
            Outcome::HumanWin => "You won!",
            Outcome::ComputerWin => "The computer won!",
            _ => "Nobody won!",
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(GAME_OVER_ACCENT));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(headline)
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 80.0);

                        Frame::new()
                            .fill(NEW_GAME_BG)
                            .corner_radius(CornerRadius::same(6))
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                if ui
                                    .add(
                                        egui::Label::new(
                                            RichText::new("New Game")
                                                .size(13.0)
                                                .strong()
                                                .color(TEXT_PRIMARY),
                                        )
                                        .sense(egui::Sense::click()),
                                    )
                                    .clicked()
                                {
                                    self.state.reset();
                                }
                            });

                        ui.add_space(8.0);

                        Frame::new()
                            .fill(QUIT_BG)
                            .corner_radius(CornerRadius::same(6))
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                if ui
                                    .add(
                                        egui::Label::new(
                                            RichText::new("Quit")
                                                .size(13.0)
                                                .strong()
                                                .color(TEXT_PRIMARY),
                                        )
                                        .sense(egui::Sense::click()),
                                    )
                                    .clicked()
                                {
                                    ctx.send_viewport_cmd(ViewportCommand::Close);
                                }
                            });
                    });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = PANEL_BG;

            let winning_line = self.state.winning_line();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                self.state.is_human_turn(),
            );

            if let Some(pos) = clicked {
                // Invalid clicks are silent no-ops; keep a trace for diagnosis.
                if let Err(err) = self.state.try_place_mark(pos) {
                    debug!(%err, col = pos.col, row = pos.row, "click ignored");
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }

    /// Drain controller notifications
    fn drain_events(&mut self, ctx: &Context) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::BoardChanged(_) | GameEvent::GameOver(_) => ctx.request_repaint(),
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The computer's phase has no external trigger: the full search
        // runs synchronously here, before any further input is read.
        if self.state.is_computer_turn() {
            self.state.step_computer();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        self.drain_events(ctx);
    }
}
