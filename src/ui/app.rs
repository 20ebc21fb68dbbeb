//! Main application for the Gomoku GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{format_clock, GameController, GameMode, GameStatus, PlayerNames};

/// Name entry for a two-player game
#[derive(Default)]
struct NamesDraft {
    black: String,
    white: String,
}

/// Main Gomoku application
pub struct GomokuApp {
    controller: GameController,
    board_view: BoardView,
    names_draft: Option<NamesDraft>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: GameController) -> Self {
        Self {
            controller,
            board_view: BoardView::default(),
            names_draft: None,
        }
    }

    fn start_versus_agent(&mut self) {
        self.controller.reset();
        self.names_draft = None;
        // Cannot fail right after a reset
        let _ = self.controller.start(GameMode::LocalVsAgent, PlayerNames::versus_agent());
    }

    fn ask_for_names(&mut self) {
        self.controller.reset();
        self.names_draft = Some(NamesDraft::default());
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.names_draft = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Vs Human...").clicked() {
                        self.ask_for_names();
                        ui.close_menu();
                    }
                    if ui.button("Vs AI").clicked() {
                        self.start_versus_agent();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset (Esc)").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.controller.session().mode() {
                        Some(GameMode::LocalVsAgent) => format!("Vs AI ({})", self.controller.agent_name()),
                        Some(GameMode::LocalTwoPlayer) => "Two players".to_string(),
                        None => "No game".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the name entry window
    fn render_names_window(&mut self, ctx: &Context) {
        let Some(draft) = self.names_draft.as_mut() else {
            return;
        };

        let mut start = false;
        egui::Window::new("Player Names")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Black (moves first)");
                ui.text_edit_singleline(&mut draft.black);
                ui.add_space(6.0);
                ui.label("White");
                ui.text_edit_singleline(&mut draft.white);
                ui.add_space(10.0);
                start = ui.button("Start Game").clicked();
            });

        if start {
            let players = PlayerNames::sanitized(&draft.black, &draft.white);
            self.names_draft = None;
            let _ = self.controller.start(GameMode::LocalTwoPlayer, players);
        }
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_stats_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(result) = self.controller.result_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = self.controller.message().map(str::to_owned) {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 10 x 10").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let session = self.controller.session();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match session.status() {
                GameStatus::Active if self.controller.is_agent_thinking() => STATUS_WAIT,
                GameStatus::Active => STATUS_OK,
                GameStatus::Ended => WIN_HIGHLIGHT,
                GameStatus::NotStarted => TEXT_SECONDARY,
            };
            ui.label(RichText::new(self.controller.status_text()).size(15.0).strong().color(color));

            if let Some(elapsed) = self.controller.agent_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Move count and game clock
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        let session = self.controller.session();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Moves: {}", session.move_count())).size(14.0).color(TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format_clock(session.elapsed()))
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        let btn_frame = Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0);

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Reset").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.reset();
                    }
                });

                if self.controller.agent_stalled() {
                    ui.add_space(4.0);
                    btn_frame.show(ui, |ui| {
                        let label = egui::Label::new(RichText::new("Retry AI").size(12.0).color(STATUS_WAIT));
                        if ui.add(label.sense(egui::Sense::click())).clicked() {
                            self.controller.retry_agent();
                        }
                    });
                }
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &str) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(result).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("Play Again").size(14.0).strong()).clicked() {
                        self.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = self.controller.session();
            let clicked = self.board_view.show(
                ui,
                session.board(),
                session.current_turn(),
                session.last_move(),
                session.winning_line(),
                self.controller.is_human_turn() && !self.controller.is_agent_thinking(),
            );

            if let Some(pos) = clicked {
                if let Err(reason) = self.controller.submit_move(pos.row as usize, pos.col as usize) {
                    debug!(%pos, %reason, "Click ignored");
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Errors are already surfaced through the controller message
        let _ = self.controller.poll_agent();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_names_window(ctx);
        self.render_board(ctx);

        if self.controller.is_agent_thinking() {
            ctx.request_repaint();
        } else if self.controller.session().status() == GameStatus::Active {
            // Keep the game clock ticking
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

