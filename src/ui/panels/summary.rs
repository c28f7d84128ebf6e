// ChatScribe - ui/panels/summary.rs
//
// Extraction summary dialog: statistics for the most recent load.
// Rendered as a centred, non-resizable modal window.

use crate::app::state::AppState;

/// Render the extraction summary dialog (if `state.show_summary` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Extraction Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(summary) = &state.summary else {
                ui.label("No log file loaded yet.");
                return;
            };

            egui::Grid::new("summary_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    if let Some(ref source) = state.source_path {
                        ui.label("Source file:");
                        ui.label(source.display().to_string());
                        ui.end_row();
                    }

                    ui.label("Lines scanned:");
                    ui.label(summary.lines_processed.to_string());
                    ui.end_row();

                    ui.label("Chat lines extracted:");
                    ui.label(summary.entries_extracted.to_string());
                    ui.end_row();

                    ui.label("Malformed lines skipped:");
                    ui.label(summary.malformed_lines.to_string());
                    ui.end_row();

                    ui.label("Extraction time:");
                    ui.label(format!(
                        "{:.1} ms",
                        summary.duration.as_secs_f64() * 1_000.0
                    ));
                    ui.end_row();
                });
        });

    if !open {
        state.show_summary = false;
    }
}
