//! Friends leaderboard

use eframe::egui::{self, RichText, Stroke};

use super::app::FitBuddyApp;
use super::avatar_painter;
use super::theme::{ACCENT_GREEN, BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM};
use crate::domain::Friend;
use crate::sample_data::FRIENDS;

const FRIEND_AVATAR_SIZE: f32 = 100.0;

impl FitBuddyApp {
    pub(crate) fn render_social(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Ranking de Amigos").size(24.0).strong());
        ui.add_space(16.0);

        ui.columns(FRIENDS.len().max(1), |columns| {
            for (column, friend) in columns.iter_mut().zip(FRIENDS.iter()) {
                friend_card(column, friend);
            }
        });

        ui.add_space(24.0);
        render_invite_card(ui);
    }
}

fn friend_card(ui: &mut egui::Ui, friend: &Friend) {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(24.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                avatar_painter::avatar(ui, &friend.avatar_config, FRIEND_AVATAR_SIZE, friend.level);
                ui.add_space(12.0);
                ui.label(RichText::new(&friend.name).size(20.0).strong());
                ui.label(
                    RichText::new(format!("Nível {}", friend.level))
                        .small()
                        .strong()
                        .color(ACCENT_GREEN),
                );
                ui.label(
                    RichText::new(format!("Último: {}", friend.last_workout))
                        .small()
                        .italics()
                        .color(TEXT_DIM),
                );
                ui.add_space(16.0);
                // Profiles are not implemented
                ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new("Ver Perfil").fill(BG_HIGHLIGHT).corner_radius(12.0),
                );
            });
        });
}

fn render_invite_card(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .stroke(Stroke::new(2.0, BG_HIGHLIGHT))
        .corner_radius(24.0)
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Que tal chamar mais gente pro grupo?").color(TEXT_DIM));
                ui.add_space(12.0);
                // Invites are not implemented
                ui.add(
                    egui::Button::new(RichText::new("Convidar Amigos").strong().color(BG_SECONDARY))
                        .fill(egui::Color32::WHITE)
                        .corner_radius(12.0),
                );
            });
        });
}
