// ChatScribe - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and manages file intake (drag-and-drop, file
// picker, CLI) via the `pending_file` queue on AppState.

use crate::app::state::AppState;
use crate::core;
use crate::platform::config::AppConfig;
use crate::ui;
use crate::util::constants;
use crate::util::error::{ChatScribeError, LoadError};
use std::time::Instant;

/// The ChatScribe application.
pub struct ChatScribeApp {
    pub state: AppState,
}

impl ChatScribeApp {
    /// Create the application, applying theme and font-size configuration
    /// to the egui context once at startup.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, config: &AppConfig) -> Self {
        if config.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let mut style = (*cc.egui_ctx.style()).clone();
        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(config.font_size));
        style
            .text_styles
            .insert(egui::TextStyle::Monospace, egui::FontId::monospace(config.font_size));
        cc.egui_ctx.set_style(style);

        Self { state }
    }

    /// Load a queued file and update state. A rejected or failed load
    /// surfaces an inline error and leaves the current transcript untouched.
    fn consume_pending_file(&mut self) {
        let Some(path) = self.state.pending_file.take() else {
            return;
        };

        match crate::app::load::load_log_file(&path) {
            Ok(loaded) => {
                self.state.set_transcript(loaded);
                self.state.save_session();
            }
            Err(ChatScribeError::Load(LoadError::UnsupportedFileType { .. })) => {
                self.state
                    .set_error(constants::MSG_UNSUPPORTED_FILE.to_string());
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Load failed");
                self.state.set_error(format!("Could not load file: {e}"));
            }
        }
    }

    fn save_transcript_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .set_file_name("chat_transcript.txt");
        if let Some(ref dir) = self.state.last_open_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(dest) = dialog.save_file() else {
            return;
        };

        match std::fs::File::create(&dest) {
            Ok(file) => {
                match core::export::export_transcript(&self.state.transcript, file, &dest) {
                    Ok(bytes) => {
                        self.state.status_message =
                            format!("Saved transcript ({bytes} bytes) to {}.", dest.display());
                    }
                    Err(e) => {
                        self.state.status_message = format!("Save failed: {e}");
                    }
                }
            }
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

impl eframe::App for ChatScribeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // OS drag-and-drop intake: the first dropped file replaces any
        // still-queued one (one file processed at a time).
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .next()
        });
        if let Some(path) = dropped {
            self.state.pending_file = Some(path);
        }

        self.consume_pending_file();

        // Schedule a repaint at the exact instant the Copy confirmation
        // reverts, so the button label flips back without user input.
        if let Some(remaining) = self.state.copy_feedback.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Log File\u{2026}").clicked() {
                        ui::panels::drop_zone::browse_for_log(&mut self.state);
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_text = !self.state.transcript.is_empty();
                    ui.add_enabled_ui(has_text, |ui| {
                        if ui.button("Save Transcript\u{2026}").clicked() {
                            self.save_transcript_dialog();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_summary = self.state.summary.is_some();
                    ui.add_enabled_ui(has_summary, |ui| {
                        if ui.button("Extraction Summary").clicked() {
                            self.state.show_summary = true;
                            ui.close_menu();
                        }
                    });
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.has_transcript() {
                        ui.label(format!("{} chat line(s)", self.state.entries.len()));
                    }
                });
            });
        });

        // Central panel: error alert, then drop zone or transcript.
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.state.error_message.clone() {
                ui::theme::alert_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new("Error")
                            .strong()
                            .color(ui::theme::ERROR_TEXT),
                    );
                    ui.label(egui::RichText::new(message).color(ui::theme::ERROR_TEXT));
                });
                ui.add_space(8.0);
            }

            if self.state.has_transcript() {
                ui::panels::transcript::render(ui, &mut self.state);
            } else {
                ui::panels::drop_zone::render(ui, &mut self.state);
            }
        });

        // Modal dialogs
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the session so the next launch reopens the file dialog in the
    /// same place.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
