use crate::interfaces::design_system::DesignSystem;
use egui::{Color32, Frame, RichText, Stroke, Ui};

fn banner(ui: &mut Ui, color: Color32, text: &str) {
    Frame::NONE
        .fill(color.linear_multiply(0.12))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(DesignSystem::SPACING_MEDIUM as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(color).strong());
        });
}

/// Green banner for a completed prediction.
pub fn success(ui: &mut Ui, text: &str) {
    banner(ui, DesignSystem::SUCCESS, text);
}

/// Red banner for a failed submission.
pub fn error(ui: &mut Ui, text: &str) {
    banner(ui, DesignSystem::DANGER, text);
}

/// Blue banner for derived display values.
pub fn info(ui: &mut Ui, text: &str) {
    banner(ui, DesignSystem::INFO, text);
}
