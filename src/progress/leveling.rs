//! Leveling rules
//!
//! Level is a pure function of the workout count; the avatar's expression and
//! accessory follow from the last workout and the new level.

use crate::domain::{Accessory, Expression};

/// Workouts needed per level
pub const WORKOUTS_PER_LEVEL: u32 = 3;

/// Workouts longer than this leave the avatar exhausted
pub const EXHAUSTION_THRESHOLD_MINUTES: u32 = 45;

/// Levels strictly above this earn the dumbbells
pub const DUMBBELLS_UNLOCK_LEVEL: u32 = 10;

/// Duration used when the form leaves it unset
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Fill of the dashboard XP bar.
///
/// Fixed placeholder: it is not derived from `UserProgress::experience`.
pub const XP_BAR_PROGRESS: f32 = 0.75;

/// `floor(total_workouts / 3) + 1`
pub fn level_for_workouts(total_workouts: u32) -> u32 {
    total_workouts / WORKOUTS_PER_LEVEL + 1
}

pub fn expression_for_duration(duration_minutes: u32) -> Expression {
    if duration_minutes > EXHAUSTION_THRESHOLD_MINUTES {
        Expression::Exhausted
    } else {
        Expression::Determined
    }
}

/// Accessory after reaching `level`. Upgrades only, never removes.
pub fn accessory_after(current: Accessory, level: u32) -> Accessory {
    if level > DUMBBELLS_UNLOCK_LEVEL {
        Accessory::Dumbbells
    } else {
        current
    }
}
