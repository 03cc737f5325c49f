//! Settings sections

use serde::{Deserialize, Serialize};

use crate::motivation::GEMINI_BASE_URL;

/// User profile used for the header and the coach prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Display name ("Olá, {name}!")
    #[serde(default = "default_name")]
    pub name: String,

    /// Last workout mentioned in the startup pep talk
    #[serde(default = "default_last_workout_type")]
    pub last_workout_type: String,

    /// Summary of past workouts sent with the suggestion request
    #[serde(default = "default_workout_history")]
    pub workout_history: String,
}

fn default_name() -> String {
    "Guerreiro".to_string()
}

fn default_last_workout_type() -> String {
    "Musculação".to_string()
}

fn default_workout_history() -> String {
    "Musculação, Corrida, Yoga".to_string()
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            last_workout_type: default_last_workout_type(),
            workout_history: default_workout_history(),
        }
    }
}

/// Text-generation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotivationSettings {
    /// Model identifier passed to the service
    #[serde(default = "default_model")]
    pub model: String,

    /// Service root, without the `/v1beta/...` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    GEMINI_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

impl Default for MotivationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// GUI-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width
    #[serde(default = "default_width")]
    pub width: f32,

    /// Initial window height
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1100.0
}

fn default_height() -> f32 {
    720.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}
