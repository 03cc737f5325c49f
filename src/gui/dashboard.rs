//! Dashboard view rendering for FitBuddyApp
//!
//! Avatar card on the left; calorie chart and summary cards on the right.

use eframe::egui;

use super::app::FitBuddyApp;

mod cards;
mod charts;
mod profile;

impl FitBuddyApp {
    pub(crate) fn render_dashboard(&self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            self.render_avatar_card(&mut columns[0]);
            self.render_stats_column(&mut columns[1]);
        });
    }

    fn render_stats_column(&self, ui: &mut egui::Ui) {
        charts::calorie_chart(ui, &crate::sample_data::CALORIE_HISTORY, 220.0);
        ui.add_space(24.0);

        let suggestion = self
            .motivation
            .suggestion()
            .unwrap_or(crate::motivation::SUGGESTION_PLACEHOLDER);
        let total = self.progress.progress().total_workouts;

        ui.columns(2, |columns| {
            cards::text_card(&mut columns[0], "Dica do Coach AI", suggestion, super::theme::ACCENT_GREEN);
            cards::number_card(&mut columns[1], "Total de Treinos", total, super::theme::ACCENT_BLUE);
        });
    }
}
