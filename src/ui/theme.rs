//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - light wood
pub const BOARD_BG: Color32 = Color32::from_rgb(232, 196, 156); // #e8c49c
pub const GRID_LINE: Color32 = Color32::from_rgb(51, 51, 51); // #333
pub const STAR_POINT: Color32 = Color32::from_rgb(51, 51, 51);

// Stone colors: centre and rim of the shading
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const BLACK_STONE_RIM: Color32 = Color32::from_rgb(102, 102, 102); // #666
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(204, 204, 204); // #ccc
pub const STONE_OUTLINE: Color32 = Color32::from_rgb(51, 51, 51);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 240, 240, 80)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const WINNER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes in points
pub const STONE_INSET: f32 = 2.0; // radius = pitch / 2 - inset
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (11, 3), (11, 11), (7, 7)];
