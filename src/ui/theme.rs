// ChatScribe - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for headings and the active drop-zone border.
pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250); // Blue 400

/// Idle drop-zone border.
pub const BORDER: Color32 = Color32::from_rgb(75, 85, 99); // Gray 600

/// Muted hint text.
pub const HINT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Copy-confirmation colour.
pub const COPIED: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Error alert text.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(252, 165, 165); // Red 300

/// Error alert background.
pub const ERROR_BG: Color32 = Color32::from_rgb(69, 10, 10); // Red 950

/// Error alert border.
pub const ERROR_BORDER: Color32 = Color32::from_rgb(185, 28, 28); // Red 700

/// Layout constants.
pub const DROP_ZONE_MIN_HEIGHT: f32 = 220.0;
pub const DROP_ZONE_STROKE_WIDTH: f32 = 2.0;

/// Frame for the inline error alert.
pub fn alert_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(ERROR_BG)
        .stroke(egui::Stroke::new(1.0, ERROR_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
}
