//! Summary card widgets for the dashboard

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::gui::theme::{BG_SECONDARY, TEXT_DIM};

/// Card with a caption and a sentence
pub fn text_card(ui: &mut egui::Ui, label: &str, text: &str, accent: Color32) {
    card_frame(accent).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(label).small().color(TEXT_DIM));
        ui.add_space(6.0);
        ui.label(RichText::new(text).size(17.0));
    });
}

/// Card with a caption and a big number
pub fn number_card(ui: &mut egui::Ui, label: &str, value: u32, accent: Color32) {
    card_frame(accent).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(label).small().color(TEXT_DIM));
        ui.add_space(6.0);
        ui.label(RichText::new(value.to_string()).size(30.0).strong());
    });
}

fn card_frame(accent: Color32) -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.6)))
        .corner_radius(24.0)
        .inner_margin(20.0)
}
