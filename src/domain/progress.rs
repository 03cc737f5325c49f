use serde::{Deserialize, Serialize};

use super::AvatarConfig;

/// In-memory progress record for the current user.
///
/// `level` always equals `total_workouts / 3 + 1` once a workout has been logged
/// through [`crate::progress::ProgressState::log_workout`]. `experience` is
/// displayed but not derived from anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub level: u32,
    pub experience: u32,
    pub streak: u32,
    pub total_workouts: u32,
    pub avatar_config: AvatarConfig,
}
