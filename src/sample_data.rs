//! Built-in data shown at startup
//!
//! There is no backend: the starting progress, the friends leaderboard, and the
//! calorie history are fixed values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::domain::{Accessory, AvatarConfig, CaloriePoint, Expression, Friend, UserProgress};

/// The user's avatar before any workout is logged
pub fn initial_avatar() -> AvatarConfig {
    AvatarConfig::new("#10b981", Accessory::None, Expression::Happy)
}

/// Starting progress: 12 workouts, level 5
pub fn initial_progress() -> UserProgress {
    UserProgress {
        level: 5,
        experience: 450,
        streak: 3,
        total_workouts: 12,
        avatar_config: initial_avatar(),
    }
}

/// Friends leaderboard, in display order
pub static FRIENDS: Lazy<Vec<Friend>> = Lazy::new(|| {
    vec![
        friend("1", "Lucas", 12, "Peito e Tríceps", "#3b82f6", Accessory::Headband, Expression::Determined),
        friend("2", "Ana", 8, "Yoga", "#ec4899", Accessory::Cape, Expression::Happy),
        friend("3", "Pedro", 15, "Corrida 10km", "#f59e0b", Accessory::Dumbbells, Expression::Determined),
    ]
});

/// Calories burned over the last days, oldest first
pub static CALORIE_HISTORY: Lazy<Vec<CaloriePoint>> = Lazy::new(|| {
    [(1, 300), (2, 450), (3, 200), (4, 600), (5, 500), (6, 750)]
        .into_iter()
        .filter_map(|(day, calories)| {
            NaiveDate::from_ymd_opt(2024, 10, day).map(|date| CaloriePoint { date, calories })
        })
        .collect()
});

fn friend(
    id: &str,
    name: &str,
    level: u32,
    last_workout: &str,
    color: &str,
    accessory: Accessory,
    expression: Expression,
) -> Friend {
    Friend {
        id: id.to_string(),
        name: name.to_string(),
        level,
        last_workout: last_workout.to_string(),
        avatar_config: AvatarConfig::new(color, accessory, expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::level_for_workouts;

    #[test]
    fn test_initial_progress_respects_leveling() {
        let progress = initial_progress();
        assert_eq!(progress.level, level_for_workouts(progress.total_workouts));
    }

    #[test]
    fn test_friends_and_history() {
        let names: Vec<&str> = FRIENDS.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lucas", "Ana", "Pedro"]);
        assert_eq!(CALORIE_HISTORY.len(), 6);
        assert_eq!(CALORIE_HISTORY[0].label(), "01/10");
        assert_eq!(CALORIE_HISTORY[5].calories, 750);
    }
}
