//! fitbuddy - level up a little avatar by working out
//!
//! A desktop fitness-gamification app. Logging a workout raises the level
//! (one level per three workouts), changes the avatar's expression, and at
//! level 11 hands it a pair of dumbbells. A short pep talk and a workout
//! suggestion are fetched once at startup from a text-generation API, with
//! built-in lines when the service is unavailable.
//!
//! ## Modules
//!
//! - [`avatar`]: pure vector renderer, painted by the GUI and exported as SVG
//! - [`progress`]: the leveling rules and the "log workout" transition
//! - [`motivation`]: prompt building, the Gemini client, and the startup fetch
//! - [`gui`]: the eframe app with dashboard, workout and social tabs

pub mod avatar;
pub mod config;
pub mod domain;
pub mod gui;
pub mod motivation;
pub mod progress;
pub mod sample_data;

pub use domain::*;
