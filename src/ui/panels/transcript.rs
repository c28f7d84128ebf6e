// ChatScribe - ui/panels/transcript.rs
//
// The loaded-transcript view: heading, Copy button with transient
// confirmation, and the read-only (but selectable) transcript text.

use crate::app::state::AppState;
use crate::ui::theme;
use std::time::Instant;

/// Render the transcript panel (central panel, loaded state).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Chat History").color(theme::ACCENT));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let now = Instant::now();
            let copied = state.copy_feedback.is_active(now);
            let label = if copied {
                egui::RichText::new("\u{2714} Copied!").color(theme::COPIED)
            } else {
                egui::RichText::new("Copy")
            };
            if ui.button(label).clicked() {
                // Copy exactly what is displayed, byte for byte.
                ui.ctx().copy_text(state.transcript.clone());
                state.copy_feedback.mark(Instant::now());
            }
        });
    });

    if let (Some(source), Some(summary)) = (&state.source_path, &state.summary) {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        ui.label(
            egui::RichText::new(format!(
                "{name} \u{00b7} {} chat line(s)",
                summary.entries_extracted
            ))
            .color(theme::HINT),
        );
    }

    ui.separator();

    if state.transcript.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No chat lines found in this log.").color(theme::HINT),
            );
        });
    } else {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                // An immutable &str buffer makes the TextEdit read-only
                // while keeping the text selectable.
                let mut view: &str = state.transcript.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut view)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}
