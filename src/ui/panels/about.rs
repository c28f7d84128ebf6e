// ChatScribe - ui/panels/about.rs
//
// About dialog. Rendered as a centred, non-resizable, non-collapsible
// modal window.

use crate::app::state::AppState;
use crate::util::constants::APP_VERSION;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About ChatScribe")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("\u{1f4ac}  ChatScribe")
                        .size(26.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{APP_VERSION}"))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Dive into your game conversations:");
                ui.label("drop a League of Legends game log, copy the chat.");
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License").small());
            });

            ui.add_space(6.0);
        });

    if !open {
        state.show_about = false;
    }
}
