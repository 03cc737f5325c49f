//! eframe::App implementation for FitBuddyApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use eframe::egui::{self, ScrollArea};

use super::app::FitBuddyApp;
use super::app_types::Tab;
use super::theme::BG_PRIMARY;

impl eframe::App for FitBuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

impl FitBuddyApp {
    /// Draw one frame
    pub(crate) fn render_frame(&mut self, ctx: &egui::Context) {
        // Pick up motivation lines as they arrive
        if self.motivation.poll() {
            ctx.request_repaint();
        }

        self.apply_theme(ctx);

        // Everything behind the acknowledgment dialog is inert until it is dismissed
        let blocked = self.pending_ack.is_some();

        // Sidebar first so the central panel accounts for its width
        super::nav::render_nav(ctx, &mut self.active_tab, !blocked);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            self.render_header(ui);
                            ui.add_space(24.0);
                            match self.active_tab {
                                Tab::Dashboard => self.render_dashboard(ui),
                                Tab::Workout => self.render_workout_form(ui),
                                Tab::Social => self.render_social(ui),
                            }
                        });
                });
            });

        self.render_acknowledgment(ctx);
        self.render_toast(ctx);

        // Keep polling until both startup requests are in
        if !self.motivation.is_complete() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use eframe::egui::{Event, Key, Modifiers, Pos2, RawInput, Rect, Vec2};
    use tokio::runtime::Handle;

    use super::*;
    use crate::config::Config;
    use crate::gui::workout::WORKOUT_TYPE_FIELD;
    use crate::motivation::MotivationClient;
    use crate::motivation::tests::ScriptedGenerator;

    fn enter() -> Event {
        Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn frame(ctx: &egui::Context, app: &mut FitBuddyApp, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.render_frame(ctx));
    }

    fn app() -> FitBuddyApp {
        let client = MotivationClient::new(Arc::new(ScriptedGenerator::replying("Vai!")), "m");
        FitBuddyApp::new(Config::default(), &Handle::current(), client)
    }

    #[tokio::test]
    async fn test_every_tab_renders_without_touching_progress() {
        let mut app = app();
        let before = app.progress().progress().clone();
        let ctx = egui::Context::default();

        for tab in Tab::ALL {
            app.select_tab(tab);
            frame(&ctx, &mut app, vec![]);
            assert_eq!(app.active_tab(), tab);
        }
        assert_eq!(app.progress().progress(), &before);
        assert_eq!(app.pending_ack(), None);
    }

    #[tokio::test]
    async fn test_enter_submit_keeps_acknowledgment_open() {
        let mut app = app();
        app.select_tab(Tab::Workout);
        let ctx = egui::Context::default();

        frame(&ctx, &mut app, vec![]);
        ctx.memory_mut(|m| m.request_focus(egui::Id::new(WORKOUT_TYPE_FIELD)));
        frame(&ctx, &mut app, vec![Event::Text("Corrida".to_string())]);
        assert_eq!(app.workout_input.kind, "Corrida");

        frame(&ctx, &mut app, vec![enter()]);
        assert_eq!(app.progress().progress().total_workouts, 13);
        assert!(app.pending_ack().is_some());

        // stays up until the user acts on it
        frame(&ctx, &mut app, vec![]);
        assert!(app.pending_ack().is_some());

        frame(&ctx, &mut app, vec![enter()]);
        assert_eq!(app.pending_ack(), None);
        assert_eq!(app.progress().progress().total_workouts, 13);
    }
}
