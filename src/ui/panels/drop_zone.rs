// ChatScribe - ui/panels/drop_zone.rs
//
// The file drop target shown while no log is loaded: a bordered area that
// accepts OS drag-and-drop and opens the native file picker on click.
// Actual file intake happens in the frame loop, which consumes
// `state.pending_file`.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::GAME_LOG_DIR_HINT;

/// Render the drop zone (central panel, empty state).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Highlight the border while a file is being dragged over the window.
    let hovering_file = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let stroke_colour = if hovering_file {
        theme::ACCENT
    } else {
        theme::BORDER
    };

    let frame = egui::Frame::default()
        .stroke(egui::Stroke::new(theme::DROP_ZONE_STROKE_WIDTH, stroke_colour))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(32));

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(theme::DROP_ZONE_MIN_HEIGHT);
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new("\u{2b06}")
                        .size(44.0)
                        .color(theme::ACCENT),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Drop r3dlog.txt here or click to browse").size(18.0));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(format!("File location: {GAME_LOG_DIR_HINT}"))
                        .color(theme::HINT),
                );
            });
        })
        .response;

    // The whole zone is one click target.
    let clicked = ui
        .interact(
            response.rect,
            egui::Id::new("drop_zone_click"),
            egui::Sense::click(),
        )
        .clicked();
    if clicked {
        browse_for_log(state);
    }
}

/// Open the native file picker (filtered to .txt) and queue the chosen
/// file for loading. Also used by the File menu.
pub fn browse_for_log(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().add_filter("Text files", &["txt"]);
    if let Some(ref dir) = state.last_open_dir {
        dialog = dialog.set_directory(dir);
    }
    if let Some(path) = dialog.pick_file() {
        state.pending_file = Some(path);
    }
}
