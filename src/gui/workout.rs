//! Workout logging form

use eframe::egui::{self, Key, RichText};

use super::app::FitBuddyApp;
use super::theme::{ACCENT_GREEN, BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM, TEXT_MUTED};

const FORM_MAX_WIDTH: f32 = 640.0;
const MAX_DURATION_MINUTES: u32 = 600;

pub(crate) const WORKOUT_TYPE_FIELD: &str = "workout_type";

impl FitBuddyApp {
    pub(crate) fn render_workout_form(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width().min(FORM_MAX_WIDTH);

        ui.vertical_centered(|ui| {
            ui.set_max_width(width);

            egui::Frame::NONE
                .fill(BG_SECONDARY)
                .corner_radius(24.0)
                .inner_margin(32.0)
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.label(RichText::new("Registrar Novo Treino").size(24.0).strong());
                        ui.add_space(20.0);

                        ui.label(RichText::new("Tipo de Exercício").color(TEXT_DIM));
                        let type_response = ui.add(
                            egui::TextEdit::singleline(&mut self.workout_input.kind)
                                .id(egui::Id::new(WORKOUT_TYPE_FIELD))
                                .hint_text("Ex: Musculação, Corrida, Natação...")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(16.0);

                        ui.label(RichText::new("Duração (minutos)").color(TEXT_DIM));
                        let mut duration = self.workout_input.effective_duration();
                        ui.add(egui::DragValue::new(&mut duration).range(0..=MAX_DURATION_MINUTES).suffix(" min"));
                        self.workout_input.duration = Some(duration);
                        ui.add_space(24.0);

                        let submit = ui.add_sized(
                            [ui.available_width(), 48.0],
                            egui::Button::new(RichText::new("Finalizar e Ganhar XP").strong().color(egui::Color32::WHITE))
                                .fill(ACCENT_GREEN)
                                .corner_radius(12.0),
                        );

                        // Consume Enter so the acknowledgment opened below does not see it this frame
                        let entered = type_response.lost_focus()
                            && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, Key::Enter));
                        if submit.clicked() || entered {
                            self.submit_workout(chrono::Local::now().date_naive());
                        }
                    });
                });

            ui.add_space(24.0);
            self.render_session_log(ui);
        });
    }

    fn render_session_log(&self, ui: &mut egui::Ui) {
        let log = self.progress.session_log();
        if log.is_empty() {
            return;
        }

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(24.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.label(RichText::new("Treinos desta sessão").size(17.0).strong());
                    ui.add_space(8.0);
                    for workout in log.iter().rev() {
                        egui::Frame::NONE
                            .fill(BG_HIGHLIGHT)
                            .corner_radius(12.0)
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&workout.kind).strong());
                                    ui.label(
                                        RichText::new(format!(
                                            "{} min · {} · ~{} kcal",
                                            workout.duration,
                                            workout.intensity.label(),
                                            workout.calories
                                        ))
                                        .color(TEXT_DIM),
                                    );
                                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                        ui.label(
                                            RichText::new(workout.date.format("%d/%m").to_string())
                                                .small()
                                                .color(TEXT_MUTED),
                                        );
                                    });
                                });
                            });
                        ui.add_space(6.0);
                    }
                });
            });
    }
}
