//! Toast notifications for progress events
//!
//! Level-ups and accessory unlocks show as temporary notifications after the
//! acknowledgment dialog is dismissed.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use crate::domain::Accessory;
use crate::gui::app::FitBuddyApp;
use crate::gui::theme::{ACCENT_GREEN, ACCENT_PURPLE, ACCENT_YELLOW, BG_SECONDARY};
use crate::progress::{LevelUp, ProgressEvent};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

impl FitBuddyApp {
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        // Wait until the acknowledgment is out of the way
        if self.current_toast.is_none() && self.pending_ack.is_none() {
            if let Some(event) = self.progress_events.pop_front() {
                self.current_toast = Some((event, Instant::now()));
            }
        }

        let Some((event, start_time)) = &self.current_toast else {
            return;
        };

        let elapsed = start_time.elapsed();
        if elapsed > TOAST_DURATION {
            self.current_toast = None;
            ctx.request_repaint();
            return;
        }

        let progress = elapsed.as_secs_f32();
        let alpha = if progress < FADE_DURATION {
            progress / FADE_DURATION
        } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
            (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
        } else {
            1.0
        };
        let animated_alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);

        let event = event.clone();

        egui::Area::new(Id::new("progress_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(BG_SECONDARY.gamma_multiply(animated_alpha))
                    .corner_radius(12.0)
                    .inner_margin(16.0)
                    .shadow(egui::Shadow {
                        spread: 4,
                        blur: 8,
                        color: Color32::from_black_alpha((animated_alpha * 100.0) as u8),
                        offset: [0, 2],
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(260.0);
                        match &event {
                            ProgressEvent::LevelUp(level_up) => render_level_up_toast(ui, level_up, animated_alpha),
                            ProgressEvent::AccessoryUnlocked(accessory) => {
                                render_accessory_toast(ui, *accessory, animated_alpha)
                            }
                        }
                    });
            });

        ctx.request_repaint();
    }
}

fn render_level_up_toast(ui: &mut egui::Ui, level_up: &LevelUp, alpha: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🎉").size(32.0));
        ui.vertical(|ui| {
            ui.label(
                RichText::new("SUBIU DE NÍVEL!")
                    .color(ACCENT_PURPLE.gamma_multiply(alpha))
                    .strong()
                    .size(14.0),
            );
            ui.label(
                RichText::new(format!("Nível {} → {}", level_up.old_level, level_up.new_level))
                    .color(Color32::WHITE.gamma_multiply(alpha))
                    .size(18.0)
                    .strong(),
            );
        });
    });
}

fn render_accessory_toast(ui: &mut egui::Ui, accessory: Accessory, alpha: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🏋").size(32.0));
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Novo acessório!")
                    .color(ACCENT_YELLOW.gamma_multiply(alpha))
                    .size(12.0),
            );
            ui.label(
                RichText::new(accessory.label())
                    .color(ACCENT_GREEN.gamma_multiply(alpha))
                    .strong()
                    .size(18.0),
            );
        });
    });
}
