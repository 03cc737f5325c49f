//! Page header: greeting, motivation line, streak and level badges

use eframe::egui::{self, Color32, RichText};

use super::app::FitBuddyApp;
use super::theme::{ACCENT_BLUE, ACCENT_GREEN, ACCENT_ORANGE, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};

impl FitBuddyApp {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) {
        let progress = self.progress.progress();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Olá,").size(34.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("{}!", self.config.profile.name))
                            .size(34.0)
                            .strong()
                            .color(ACCENT_GREEN),
                    );
                });
                ui.label(
                    RichText::new(format!("\"{}\"", self.motivation.greeting()))
                        .italics()
                        .color(TEXT_DIM),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, "⭐", &format!("Nível {}", progress.level), ACCENT_BLUE);
                ui.add_space(8.0);
                badge(ui, "🔥", &format!("{} dias de sequência", progress.streak), ACCENT_ORANGE);
            });
        });
    }
}

fn badge(ui: &mut egui::Ui, icon: &str, text: &str, icon_color: Color32) {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(16.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).color(icon_color));
                ui.label(RichText::new(text).strong());
            });
        });
}
