//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{cell_glyph, BoardView};
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{DisplayUpdate, Event, GameController};
use crate::{Cell, Player};

/// Hotseat Gomoku window.
///
/// Owns the controller and only ever talks to it through [`Event`]s; the
/// status panel is driven by the last [`DisplayUpdate`] received.
pub struct GomokuApp {
    controller: GameController,
    board_view: BoardView,
    display: DisplayUpdate,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let controller = GameController::new();
        let display = controller.display();
        Self {
            controller,
            board_view: BoardView::new(&config.board),
            display,
        }
    }

    /// Feed one event to the controller and keep the resulting update
    fn dispatch(&mut self, event: Event) {
        // Rejected selections leave the game as it was; the controller logs them
        if let Ok(update) = self.controller.handle(event) {
            self.display = update;
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.dispatch(Event::Reset);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Hotseat - Black moves first");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if self.display.game_over {
                    self.render_winner_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row on 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let player = self.display.active_player;
        Self::card_frame().show(ui, |ui| {
            let (accent, glyph_color) = match player {
                Player::Black => (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    cell_glyph(Cell::from(player)),
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.display.game_over {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render the result card
    fn render_winner_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(WINNER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(&self.display.status_message).size(20.0).strong().color(WIN_HIGHLIGHT));
                });
            });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        let moves = self.controller.state().stone_count();
        let mut restart = false;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Restart Game").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    restart = ui.add(label).clicked();
                });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{moves}")).size(11.0).color(TEXT_SECONDARY));
        });

        if restart {
            self.dispatch(Event::Reset);
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let selected = self.board_view.show(ui, self.controller.state());
            if let Some((row, col)) = selected {
                self.dispatch(Event::CellSelected { row, col });
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.dispatch(Event::Reset);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
