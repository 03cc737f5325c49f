//! Desktop GUI
//!
//! An eframe app with a navigation sidebar and three tabs: the dashboard
//! (avatar, calorie chart, coach tip), workout logging, and the friends
//! leaderboard.

mod acknowledge;
pub mod app;
mod app_eframe;
mod app_theme;
mod app_types;
pub mod avatar_painter;
mod dashboard;
mod header;
mod nav;
mod runner;
mod social;
pub mod theme;
mod toast;
mod workout;

pub use app::FitBuddyApp;
pub use app_types::Tab;
pub use runner::run_gui;
