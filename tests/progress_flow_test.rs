//! Integration tests for the workout logging flow

use chrono::NaiveDate;

use fitbuddy::progress::{level_for_workouts, ProgressEvent, ProgressState, WorkoutInput};
use fitbuddy::sample_data;
use fitbuddy::{Accessory, Expression};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 7).expect("valid date")
}

fn log(state: &mut ProgressState, kind: &str, duration: u32) {
    state
        .log_workout(&WorkoutInput::new(kind, duration), today())
        .expect("workout accepted");
}

#[test]
fn test_level_follows_workout_count_from_sample_start() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    assert_eq!(state.progress().total_workouts, 12);
    assert_eq!(state.progress().level, 5);

    log(&mut state, "Musculação", 30);
    assert_eq!(state.progress().total_workouts, 13);
    assert_eq!(state.progress().level, 5);

    log(&mut state, "Musculação", 30);
    log(&mut state, "Musculação", 30);
    assert_eq!(state.progress().total_workouts, 15);
    assert_eq!(state.progress().level, 6);
}

#[test]
fn test_level_invariant_holds_for_every_log() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    for i in 0..60 {
        log(&mut state, "Corrida", 20 + i);
        let p = state.progress();
        assert_eq!(p.level, level_for_workouts(p.total_workouts));
        assert_eq!(p.level, p.total_workouts / 3 + 1);
    }
}

#[test]
fn test_expression_tracks_last_duration() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    for (duration, expected) in [
        (46, Expression::Exhausted),
        (45, Expression::Determined),
        (90, Expression::Exhausted),
        (10, Expression::Determined),
    ] {
        log(&mut state, "Natação", duration);
        assert_eq!(state.progress().avatar_config.expression, expected, "duration {}", duration);
    }
}

#[test]
fn test_streak_only_grows() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    let start = state.progress().streak;
    for n in 1..=5 {
        log(&mut state, "Yoga", 30);
        assert_eq!(state.progress().streak, start + n);
    }
}

#[test]
fn test_dumbbells_stay_after_level_ten() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    let mut unlocks = 0;

    while state.progress().level <= 10 {
        let outcome = state
            .log_workout(&WorkoutInput::new("Supino", 30), today())
            .expect("accepted");
        unlocks += outcome
            .events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::AccessoryUnlocked(_)))
            .count();
        if state.progress().level <= 10 {
            assert_eq!(state.progress().avatar_config.accessory, Accessory::None);
        }
    }
    assert_eq!(state.progress().total_workouts, 30);
    assert_eq!(unlocks, 1);

    for duration in [10, 60, 45, 120] {
        log(&mut state, "Supino", duration);
        assert_eq!(state.progress().avatar_config.accessory, Accessory::Dumbbells);
    }
}

#[test]
fn test_empty_type_changes_nothing() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    log(&mut state, "Corrida", 50);
    let before = state.progress().clone();

    let input = WorkoutInput {
        kind: String::new(),
        duration: Some(120),
    };
    assert!(state.log_workout(&input, today()).is_none());
    assert_eq!(state.progress(), &before);
    assert_eq!(state.session_log().len(), 1);
}

#[test]
fn test_experience_is_never_touched() {
    let mut state = ProgressState::new(sample_data::initial_progress());
    for _ in 0..10 {
        log(&mut state, "Corrida", 30);
    }
    assert_eq!(state.progress().experience, sample_data::initial_progress().experience);
}
