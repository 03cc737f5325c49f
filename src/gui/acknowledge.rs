//! Blocking acknowledgment dialog shown after a workout is logged

use eframe::egui::{self, Align2, Color32, Id, LayerId, Order, RichText};

use super::app::FitBuddyApp;
use super::theme::{ACCENT_GREEN, TEXT_PRIMARY};

impl FitBuddyApp {
    /// Render the dialog over a dimmed window until the user dismisses it
    pub(crate) fn render_acknowledgment(&mut self, ctx: &egui::Context) {
        let Some(message) = self.pending_ack.clone() else {
            return;
        };

        ctx.layer_painter(LayerId::new(Order::Middle, Id::new("ack_dim")))
            .rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(160));

        let mut dismissed = false;
        egui::Window::new("Treino registrado")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .order(Order::Foreground)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(message).size(16.0).color(TEXT_PRIMARY));
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    let ok = ui.add(
                        egui::Button::new(RichText::new("OK").strong().color(Color32::WHITE))
                            .fill(ACCENT_GREEN)
                            .min_size([96.0, 32.0].into()),
                    );
                    if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss_ack();
        }
    }
}
