//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - light paper tones
pub const BOARD_BG: Color32 = Color32::from_rgb(240, 237, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(62, 58, 52);

// Mark colors
pub const HUMAN_MARK: Color32 = Color32::from_rgb(40, 44, 52);
pub const COMPUTER_MARK: Color32 = Color32::from_rgb(188, 68, 58);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 160, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 190, 95);

// Hover preview for the pending human mark
pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 44, 52, 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_OVER: Color32 = Color32::from_rgb(255, 180, 50);

// Game over card
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const GAME_OVER_ACCENT: Color32 = Color32::from_rgb(180, 255, 180);
pub const NEW_GAME_BG: Color32 = Color32::from_rgb(60, 100, 70);
pub const QUIT_BG: Color32 = Color32::from_rgb(100, 60, 55);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 7.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
