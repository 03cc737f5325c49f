//! Avatar card: the user's avatar and the XP bar

use eframe::egui::{self, RichText, Vec2};

use crate::gui::app::FitBuddyApp;
use crate::gui::avatar_painter;
use crate::gui::theme::{ACCENT_GREEN, BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM};
use crate::progress::XP_BAR_PROGRESS;

const AVATAR_SIZE: f32 = 250.0;
const XP_BAR_HEIGHT: f32 = 12.0;

impl FitBuddyApp {
    pub(super) fn render_avatar_card(&self, ui: &mut egui::Ui) {
        let progress = self.progress.progress();

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(24.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Seu Bonequinho").size(20.0).strong());
                ui.add_space(12.0);

                ui.vertical_centered(|ui| {
                    avatar_painter::avatar(ui, &progress.avatar_config, AVATAR_SIZE, progress.level)
                        .on_hover_text(format!(
                            "{} / {}",
                            progress.avatar_config.accessory.label(),
                            progress.avatar_config.expression
                        ));
                });

                ui.add_space(24.0);
                render_xp_bar(ui);
            });
    }
}

/// XP bar. The fill is a fixed placeholder and ignores `experience`.
fn render_xp_bar(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Progresso XP").small().color(TEXT_DIM));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{:.0}%", XP_BAR_PROGRESS * 100.0))
                    .strong()
                    .color(ACCENT_GREEN),
            );
        });
    });

    let (rect, _response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), XP_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, XP_BAR_HEIGHT / 2.0, BG_HIGHLIGHT);

    let fill_rect = egui::Rect::from_min_size(rect.min, Vec2::new(rect.width() * XP_BAR_PROGRESS, XP_BAR_HEIGHT));
    ui.painter().rect_filled(fill_rect, XP_BAR_HEIGHT / 2.0, ACCENT_GREEN);
}
