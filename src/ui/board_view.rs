//! Board rendering and pointer-to-cell translation for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::config::BoardConfig;
use crate::game::GameState;
use crate::{Cell, Player, Pos, BOARD_SIZE};

/// Nearest grid intersection to a point given relative to the board's
/// top-left corner.
///
/// The result is not clamped: clicks in the margin map to coordinates
/// outside `0..BOARD_SIZE`, which the controller rejects.
pub fn nearest_cell(offset: Vec2, padding: f32, pitch: f32) -> (i32, i32) {
    let col = ((offset.x - padding) / pitch).round() as i32;
    let row = ((offset.y - padding) / pitch).round() as i32;
    (row, col)
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    config: BoardConfig,
    /// Pitch and padding after fitting the board into the panel
    cell_size: f32,
    margin: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl BoardView {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            config: config.clone(),
            cell_size: config.cell_pitch,
            margin: config.padding,
            board_rect: Rect::NOTHING,
        }
    }

    /// Natural edge length of the board in points
    fn natural_size(&self) -> f32 {
        2.0 * self.config.padding + (BOARD_SIZE as f32 - 1.0) * self.config.cell_pitch
    }

    /// Render the board and return the raw grid coordinate of a click, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<(i32, i32)> {
        let available_size = ui.available_size();
        let natural = self.natural_size();

        // Shrink uniformly to fit, never enlarge past the configured size
        let scale = ((available_size.x.min(available_size.y) - 20.0) / natural).clamp(0.1, 1.0);
        self.cell_size = self.config.cell_pitch * scale;
        self.margin = self.config.padding * scale;
        let board_size = natural * scale;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        if self.config.show_coordinates {
            self.draw_coordinates(&painter);
        }
        self.draw_stones(&painter, state);

        if self.config.highlight_last_move {
            if let Some(pos) = state.last_move() {
                self.draw_last_move_marker(&painter, pos);
            }
        }

        if self.config.highlight_winning_line {
            if let Some(line) = state.winning_line() {
                self.draw_winning_line(&painter, line);
            }
        }

        if state.status().is_over() {
            return None;
        }

        if let Some(pointer_pos) = response.hover_pos() {
            let (row, col) = self.screen_to_grid(pointer_pos);
            if let Some(pos) = Pos::checked(row, col).filter(|&pos| state.board().is_empty(pos)) {
                self.draw_hover_preview(&painter, pos, state.active_player());
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .map(|pointer_pos| self.screen_to_grid(pointer_pos));
        }

        None
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = self.margin + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, self.margin);
            let end = self.board_rect.min + Vec2::new(offset, self.margin + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(self.margin, offset);
            let end = self.board_rect.min + Vec2::new(self.margin + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 15-1)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let gap = self.margin * 0.5;

        for i in 0..BOARD_SIZE {
            let along = self.margin + i as f32 * self.cell_size;
            let letter = (b'A' + i as u8) as char;
            let number = format!("{}", BOARD_SIZE - i);

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + gap);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + gap, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, number, font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, state: &GameState) {
        for (pos, player) in state.board().occupied() {
            self.draw_stone(painter, pos, player);
        }
    }

    fn stone_radius(&self) -> f32 {
        (self.cell_size / 2.0 - STONE_INSET).max(1.0)
    }

    /// Draw a single stone, shaded from an off-centre light spot to the rim
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();
        let (inner, rim) = match player {
            Player::Black => (BLACK_STONE, BLACK_STONE_RIM),
            Player::White => (WHITE_STONE, WHITE_STONE_RIM),
        };

        painter.circle_filled(center, radius, rim);
        // Concentric steps towards the light spot up-left of centre
        let light = Vec2::new(-radius * 0.15, -radius * 0.15);
        const STEPS: usize = 4;
        for step in 1..=STEPS {
            let t = step as f32 / STEPS as f32;
            let color = lerp_color(rim, inner, t);
            painter.circle_filled(center + light * t, radius * (1.0 - 0.2 * t), color);
        }
        painter.circle_stroke(center, radius, Stroke::new(1.0, STONE_OUTLINE));
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.stone_radius() + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player) {
        let color = match turn {
            Player::Black => hover_black(),
            Player::White => hover_white(),
        };
        painter.circle_filled(self.board_to_screen(pos), self.stone_radius(), color);
    }

    /// Convert screen coordinates to a (possibly off-board) grid coordinate
    fn screen_to_grid(&self, screen_pos: Pos2) -> (i32, i32) {
        nearest_cell(screen_pos - self.board_rect.min, self.margin, self.cell_size)
    }

    /// Convert board position to screen coordinates
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + self.margin + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + self.margin + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Cell contents as a single glyph, used by the side panel
pub fn cell_glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "·",
        Cell::Black => "●",
        Cell::White => "○",
    }
}
