use std::{thread, time::Duration};

use client_core::{GameClient, InputController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::RichText;
use shared::protocol::SolutionList;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{FailedRequest, UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const HEX_BUTTON_SIZE: f32 = 56.0;

/// Desktop shell: renders the hive and routes every gesture through the
/// backend command queue. All game state the UI shows lives in the
/// `InputController`; this struct only adds transport/status plumbing.
pub struct GameApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: Option<InputController>,
    revealed: Option<SolutionList>,
    status: String,
    focus_input: bool,
}

impl GameApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: None,
            revealed: None,
            status: "Loading board...".to_string(),
            focus_input: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::GameLoaded(snapshot) => match InputController::from_snapshot(&snapshot) {
                    Ok(controller) => {
                        self.controller = Some(controller);
                        self.revealed = None;
                        self.status = "Board ready".to_string();
                        self.focus_input = true;
                    }
                    Err(err) => {
                        self.status = format!("Malformed board from server: {err}");
                    }
                },
                UiEvent::Verdict(outcome) => {
                    if let Some(controller) = self.controller.as_mut() {
                        controller.apply_verdict(&outcome);
                    }
                    self.focus_input = true;
                }
                UiEvent::SubmitFailed(err) => {
                    if let Some(controller) = self.controller.as_mut() {
                        controller.apply_transport_failure();
                    }
                    self.status = err.status_line();
                    self.focus_input = true;
                }
                UiEvent::SolutionsRevealed(solutions) => {
                    self.revealed = Some(solutions);
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    self.status = err.status_line();
                }
            }
        }
    }

    fn submit_current_word(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let Some(word) = controller.take_submission() else {
            return;
        };
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitWord { word },
            &mut self.status,
        );
        self.focus_input = true;
    }
}

fn hex_button(ui: &mut egui::Ui, glyph: &str, center: bool) -> egui::Response {
    let text = RichText::new(glyph).size(24.0);
    let button = if center {
        egui::Button::new(text.strong()).fill(ui.visuals().selection.bg_fill)
    } else {
        egui::Button::new(text)
    };
    ui.add_sized(egui::vec2(HEX_BUTTON_SIZE, HEX_BUTTON_SIZE), button)
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut submit_requested = false;
        let mut shuffle_requested = false;
        let mut new_game_requested = false;
        let mut reveal_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Hexbee");
            ui.add_space(8.0);

            if let Some(controller) = self.controller.as_mut() {
                ui.label(RichText::new(controller.message()).strong());
                ui.horizontal(|ui| {
                    ui.label(format!("Score: {}", controller.score_text()));
                    ui.separator();
                    ui.label(format!("Rating: {}", controller.rating_text()));
                });
                ui.add_space(12.0);

                let outer_letters = *controller.board().outer();
                let outer_glyphs = controller.board().outer_glyphs();
                let center_letter = controller.board().center();
                let center_glyph = controller.board().center_glyph();
                let mut clicked_letter = None;

                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.add_space(HEX_BUTTON_SIZE);
                        for i in [0, 1] {
                            if hex_button(ui, &outer_glyphs[i], false).clicked() {
                                clicked_letter = Some(outer_letters[i]);
                            }
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.add_space(HEX_BUTTON_SIZE / 2.0);
                        if hex_button(ui, &outer_glyphs[2], false).clicked() {
                            clicked_letter = Some(outer_letters[2]);
                        }
                        if hex_button(ui, &center_glyph, true).clicked() {
                            clicked_letter = Some(center_letter);
                        }
                        if hex_button(ui, &outer_glyphs[3], false).clicked() {
                            clicked_letter = Some(outer_letters[3]);
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.add_space(HEX_BUTTON_SIZE);
                        for i in [4, 5] {
                            if hex_button(ui, &outer_glyphs[i], false).clicked() {
                                clicked_letter = Some(outer_letters[i]);
                            }
                        }
                    });
                });

                if let Some(letter) = clicked_letter {
                    controller.push_letter(letter);
                    self.focus_input = true;
                }

                ui.add_space(12.0);
                let input_response = ui.add(
                    egui::TextEdit::singleline(controller.buffer_mut())
                        .hint_text("Type a word")
                        .desired_width(260.0),
                );
                if input_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit_requested = true;
                }
                if self.focus_input {
                    input_response.request_focus();
                    self.focus_input = false;
                }

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        controller.delete_last();
                        self.focus_input = true;
                    }
                    if ui.button("Shuffle").clicked() {
                        shuffle_requested = true;
                    }
                    if ui.button("Enter").clicked() {
                        submit_requested = true;
                    }
                });

                ui.add_space(12.0);
                ui.label(RichText::new(format!("Found ({})", controller.found().len())).strong());
                egui::ScrollArea::vertical()
                    .id_salt("found_words")
                    .max_height(140.0)
                    .show(ui, |ui| {
                        for entry in controller.found() {
                            ui.label(entry.display());
                        }
                    });

                if let Some(solutions) = &self.revealed {
                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("Solutions ({})", solutions.total)).strong());
                    egui::ScrollArea::vertical()
                        .id_salt("solutions")
                        .max_height(100.0)
                        .show(ui, |ui| {
                            ui.label(solutions.words.join(", "));
                        });
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("New game").clicked() {
                        new_game_requested = true;
                    }
                    if ui.button("Reveal solutions").clicked() {
                        reveal_requested = true;
                    }
                });
            } else {
                ui.label("Loading board...");
            }

            ui.separator();
            ui.label(&self.status);
        });

        if shuffle_requested {
            if let Some(controller) = self.controller.as_mut() {
                controller.shuffle(&mut rand::thread_rng());
            }
        }
        if submit_requested {
            self.submit_current_word();
        }
        if new_game_requested {
            dispatch_backend_command(&self.cmd_tx, BackendCommand::NewGame, &mut self.status);
        }
        if reveal_requested {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::RevealSolutions,
                &mut self.status,
            );
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub fn start_backend_bridge(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    server_url: String,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    FailedRequest::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = GameClient::new(server_url);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchGame => match client.fetch_game().await {
                        Ok(snapshot) => {
                            let _ = ui_tx.try_send(UiEvent::GameLoaded(snapshot));
                        }
                        Err(err) => {
                            tracing::error!(%err, "failed to fetch game");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                                FailedRequest::FetchGame,
                                err.to_string(),
                            )));
                        }
                    },
                    BackendCommand::SubmitWord { word } => match client.submit(&word).await {
                        Ok(outcome) => {
                            let _ = ui_tx.try_send(UiEvent::Verdict(outcome));
                        }
                        Err(err) => {
                            tracing::error!(%err, "failed to submit word");
                            let _ = ui_tx.try_send(UiEvent::SubmitFailed(UiError::new(
                                FailedRequest::Submit,
                                err.to_string(),
                            )));
                        }
                    },
                    BackendCommand::NewGame => match client.new_game().await {
                        Ok(snapshot) => {
                            let _ = ui_tx.try_send(UiEvent::GameLoaded(snapshot));
                        }
                        Err(err) => {
                            tracing::error!(%err, "failed to start new game");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                                FailedRequest::NewGame,
                                err.to_string(),
                            )));
                        }
                    },
                    BackendCommand::RevealSolutions => match client.reveal().await {
                        Ok(solutions) => {
                            let _ = ui_tx.try_send(UiEvent::SolutionsRevealed(solutions));
                        }
                        Err(err) => {
                            tracing::error!(%err, "failed to reveal solutions");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                                FailedRequest::Reveal,
                                err.to_string(),
                            )));
                        }
                    },
                }
            }
        });
    });
}
