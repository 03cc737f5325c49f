//! Progress state and the "log workout" transition
//!
//! [`ProgressState`] owns the user's [`UserProgress`] for the session. The only
//! way to change it is [`ProgressState::log_workout`].

mod leveling;

pub use leveling::{
    accessory_after, expression_for_duration, level_for_workouts, DEFAULT_DURATION_MINUTES,
    DUMBBELLS_UNLOCK_LEVEL, EXHAUSTION_THRESHOLD_MINUTES, WORKOUTS_PER_LEVEL, XP_BAR_PROGRESS,
};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{Accessory, UserProgress, Workout};

/// Workout form contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutInput {
    /// Exercise type, e.g. "Corrida"
    pub kind: String,
    /// Minutes; `None` means the default of 30
    pub duration: Option<u32>,
}

impl Default for WorkoutInput {
    fn default() -> Self {
        Self {
            kind: String::new(),
            duration: Some(DEFAULT_DURATION_MINUTES),
        }
    }
}

impl WorkoutInput {
    pub fn new(kind: impl Into<String>, duration: u32) -> Self {
        Self {
            kind: kind.into(),
            duration: Some(duration),
        }
    }

    pub fn effective_duration(&self) -> u32 {
        self.duration.unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// A log is accepted with any non-empty type, whitespace included
    pub fn is_submittable(&self) -> bool {
        !self.kind.is_empty()
    }
}

/// A level up caused by a logged workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Side effects of a logged workout worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    LevelUp(LevelUp),
    AccessoryUnlocked(Accessory),
}

/// Result of an accepted log
#[derive(Debug, Clone, PartialEq)]
pub struct LogOutcome {
    pub workout: Workout,
    pub events: Vec<ProgressEvent>,
}

/// Compute the progress after one more workout of `duration` minutes.
///
/// Pure; `experience` is carried over untouched.
pub fn apply_workout(progress: &UserProgress, duration: u32) -> UserProgress {
    let total_workouts = progress.total_workouts + 1;
    let level = level_for_workouts(total_workouts);
    let avatar = &progress.avatar_config;

    UserProgress {
        level,
        experience: progress.experience,
        streak: progress.streak + 1,
        total_workouts,
        avatar_config: avatar
            .with_expression(expression_for_duration(duration))
            .with_accessory(accessory_after(avatar.accessory, level)),
    }
}

/// Session-scoped progress owner
#[derive(Debug, Clone)]
pub struct ProgressState {
    progress: UserProgress,
    session_log: Vec<Workout>,
}

impl ProgressState {
    pub fn new(progress: UserProgress) -> Self {
        Self {
            progress,
            session_log: Vec::new(),
        }
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Workouts logged since startup, oldest first
    pub fn session_log(&self) -> &[Workout] {
        &self.session_log
    }

    /// Log a workout finished on `today`.
    ///
    /// Returns `None` (and changes nothing) when the type is blank.
    pub fn log_workout(&mut self, input: &WorkoutInput, today: NaiveDate) -> Option<LogOutcome> {
        if !input.is_submittable() {
            debug!("Ignoring workout log with empty type");
            return None;
        }

        let duration = input.effective_duration();
        let previous = &self.progress;
        let next = apply_workout(previous, duration);

        let mut events = Vec::new();
        if next.level != previous.level {
            events.push(ProgressEvent::LevelUp(LevelUp {
                old_level: previous.level,
                new_level: next.level,
            }));
        }
        if next.avatar_config.accessory != previous.avatar_config.accessory {
            events.push(ProgressEvent::AccessoryUnlocked(next.avatar_config.accessory));
        }

        let workout = Workout::new(input.kind.as_str(), duration, today);
        info!(
            "Logged workout '{}' ({} min): total={} level={} streak={}",
            workout.kind, duration, next.total_workouts, next.level, next.streak
        );

        self.progress = next;
        self.session_log.push(workout.clone());

        Some(LogOutcome { workout, events })
    }
}
