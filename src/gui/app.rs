//! Main GUI application state

use std::collections::VecDeque;
use std::time::Instant;

use chrono::NaiveDate;
use tokio::runtime::Handle;
use tracing::info;

use super::app_types::Tab;
use crate::config::Config;
use crate::motivation::{MotivationClient, MotivationFetcher, MotivationRequest};
use crate::progress::{ProgressEvent, ProgressState, WorkoutInput};
use crate::sample_data;

/// Text of the dialog shown after a workout is logged
pub const WORKOUT_LOGGED_MESSAGE: &str = "Treino registrado! Seu bonequinho ganhou XP!";

/// Main application state
pub struct FitBuddyApp {
    pub(crate) config: Config,
    pub(crate) progress: ProgressState,
    /// Startup motivation; requested once, never refreshed
    pub(crate) motivation: MotivationFetcher,
    pub(crate) active_tab: Tab,
    /// Workout form contents
    pub(crate) workout_input: WorkoutInput,
    /// Blocking acknowledgment waiting to be dismissed
    pub(crate) pending_ack: Option<String>,
    /// Progress events waiting for a toast
    pub(crate) progress_events: VecDeque<ProgressEvent>,
    pub(crate) current_toast: Option<(ProgressEvent, Instant)>,
}

impl FitBuddyApp {
    /// Create the app and start the one-time motivation fetch on `runtime`
    pub fn new(config: Config, runtime: &Handle, client: MotivationClient) -> Self {
        let progress = ProgressState::new(sample_data::initial_progress());

        let request = MotivationRequest {
            name: config.profile.name.clone(),
            level: progress.progress().level,
            last_workout_type: config.profile.last_workout_type.clone(),
            history: config.profile.workout_history.clone(),
        };
        let motivation = MotivationFetcher::spawn(runtime, client, request);

        Self {
            config,
            progress,
            motivation,
            active_tab: Tab::default(),
            workout_input: WorkoutInput::default(),
            pending_ack: None,
            progress_events: VecDeque::new(),
            current_toast: None,
        }
    }

    /// Switch views. No other side effects.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn workout_input_mut(&mut self) -> &mut WorkoutInput {
        &mut self.workout_input
    }

    pub fn pending_ack(&self) -> Option<&str> {
        self.pending_ack.as_deref()
    }

    pub fn dismiss_ack(&mut self) {
        self.pending_ack = None;
    }

    /// Submit the workout form. A blank type is silently ignored.
    pub fn submit_workout(&mut self, today: NaiveDate) {
        let Some(outcome) = self.progress.log_workout(&self.workout_input, today) else {
            return;
        };

        self.workout_input = WorkoutInput::default();
        for event in outcome.events {
            info!("[fitbuddy] {:?}", event);
            self.progress_events.push_back(event);
        }
        self.pending_ack = Some(WORKOUT_LOGGED_MESSAGE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Accessory;
    use crate::motivation::tests::ScriptedGenerator;
    use crate::progress::LevelUp;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 7).expect("valid date")
    }

    fn app() -> FitBuddyApp {
        let client = MotivationClient::new(Arc::new(ScriptedGenerator::replying("Vai!")), "m");
        FitBuddyApp::new(Config::default(), &Handle::current(), client)
    }

    #[tokio::test]
    async fn test_starts_on_dashboard_with_sample_progress() {
        let app = app();
        assert_eq!(app.active_tab(), Tab::Dashboard);
        assert_eq!(app.progress().progress().total_workouts, 12);
        assert_eq!(app.progress().progress().level, 5);
        assert_eq!(app.pending_ack(), None);
    }

    #[tokio::test]
    async fn test_tab_switch_leaves_state_alone() {
        let mut app = app();
        let before = app.progress().progress().clone();
        for tab in Tab::ALL {
            app.select_tab(tab);
            assert_eq!(app.active_tab(), tab);
        }
        assert_eq!(app.progress().progress(), &before);
    }

    #[tokio::test]
    async fn test_blank_submit_is_declined() {
        let mut app = app();
        app.workout_input_mut().duration = Some(90);
        app.submit_workout(today());

        assert_eq!(app.pending_ack(), None);
        assert_eq!(app.progress().progress().total_workouts, 12);
        // form keeps what the user typed
        assert_eq!(app.workout_input.duration, Some(90));
    }

    #[tokio::test]
    async fn test_submit_resets_form_and_asks_for_ack() {
        let mut app = app();
        *app.workout_input_mut() = WorkoutInput::new("Corrida", 50);
        app.submit_workout(today());

        assert_eq!(app.pending_ack(), Some(WORKOUT_LOGGED_MESSAGE));
        assert_eq!(app.workout_input, WorkoutInput::default());
        assert_eq!(app.progress().progress().total_workouts, 13);

        app.dismiss_ack();
        assert_eq!(app.pending_ack(), None);
    }

    #[tokio::test]
    async fn test_level_up_is_queued_for_toast() {
        let mut app = app();
        for _ in 0..3 {
            *app.workout_input_mut() = WorkoutInput::new("Yoga", 20);
            app.submit_workout(today());
        }
        assert_eq!(app.progress().progress().level, 6);
        assert_eq!(
            app.progress_events.back(),
            Some(&ProgressEvent::LevelUp(LevelUp {
                old_level: 5,
                new_level: 6
            }))
        );
        assert_ne!(app.progress().progress().avatar_config.accessory, Accessory::Dumbbells);
    }
}
