use serde::{Deserialize, Serialize};

use super::AvatarConfig;

/// A friend on the social leaderboard (read-only sample data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Free-text description of the friend's last workout
    pub last_workout: String,
    pub avatar_config: AvatarConfig,
}
