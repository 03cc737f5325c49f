//! Navigation sidebar

use eframe::egui::{self, Color32, RichText, Vec2};

use super::app_types::Tab;
use super::theme::{ACCENT_GREEN, BG_SECONDARY, TEXT_DIM};

const NAV_WIDTH: f32 = 80.0;
const BUTTON_SIZE: f32 = 52.0;

/// Render the left sidebar with one button per tab
pub fn render_nav(ctx: &egui::Context, active_tab: &mut Tab, enabled: bool) {
    egui::SidePanel::left("nav")
        .exact_width(NAV_WIDTH)
        .resizable(false)
        .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(14.0))
        .show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() / 2.0 - 1.5 * (BUTTON_SIZE + 32.0)).max(0.0));
                    for tab in Tab::ALL {
                        let selected = *active_tab == tab;
                        let (fill, color) = if selected {
                            (ACCENT_GREEN, Color32::WHITE)
                        } else {
                            (Color32::TRANSPARENT, TEXT_DIM)
                        };

                        let button = egui::Button::new(RichText::new(tab.icon()).size(22.0).color(color))
                            .fill(fill)
                            .corner_radius(12.0)
                            .min_size(Vec2::splat(BUTTON_SIZE));

                        if ui.add(button).on_hover_text(tab.label()).clicked() {
                            *active_tab = tab;
                        }
                        ui.add_space(32.0);
                    }
                });
            });
        });
}
