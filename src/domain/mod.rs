//! Core domain types for fitbuddy

mod avatar;
mod friend;
mod progress;
mod workout;

pub use avatar::{Accessory, AvatarConfig, Expression};
pub use friend::Friend;
pub use progress::UserProgress;
pub use workout::{CaloriePoint, Intensity, Workout};
