use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Effort class of a logged workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Classify by duration in minutes (<= 30 low, <= 45 medium, above that high)
    pub fn for_duration(duration_minutes: u32) -> Self {
        match duration_minutes {
            0..=30 => Intensity::Low,
            31..=45 => Intensity::Medium,
            _ => Intensity::High,
        }
    }

    /// Rough energy estimate used for the session log
    pub fn kcal_per_minute(&self) -> u32 {
        match self {
            Intensity::Low => 5,
            Intensity::Medium => 7,
            Intensity::High => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "leve",
            Intensity::Medium => "moderado",
            Intensity::High => "intenso",
        }
    }
}

/// A workout entry logged during the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes
    pub duration: u32,
    pub calories: u32,
    pub date: NaiveDate,
    pub intensity: Intensity,
}

impl Workout {
    /// Build an entry for a workout finished on `date`
    pub fn new(kind: impl Into<String>, duration: u32, date: NaiveDate) -> Self {
        let intensity = Intensity::for_duration(duration);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            duration,
            calories: duration.saturating_mul(intensity.kcal_per_minute()),
            date,
            intensity,
        }
    }
}

/// One point on the calorie-burn chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriePoint {
    pub date: NaiveDate,
    pub calories: u32,
}

impl CaloriePoint {
    /// Short axis label ("dd/mm")
    pub fn label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_thresholds() {
        assert_eq!(Intensity::for_duration(0), Intensity::Low);
        assert_eq!(Intensity::for_duration(30), Intensity::Low);
        assert_eq!(Intensity::for_duration(31), Intensity::Medium);
        assert_eq!(Intensity::for_duration(45), Intensity::Medium);
        assert_eq!(Intensity::for_duration(46), Intensity::High);
    }

    #[test]
    fn test_workout_estimates_calories_from_intensity() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 6).expect("valid date");
        let w = Workout::new("Corrida", 60, date);
        assert_eq!(w.intensity, Intensity::High);
        assert_eq!(w.calories, 600);
        assert!(!w.id.is_empty());

        let other = Workout::new("Corrida", 60, date);
        assert_ne!(w.id, other.id);
    }

    #[test]
    fn test_calorie_point_label() {
        let point = CaloriePoint {
            date: NaiveDate::from_ymd_opt(2024, 10, 1).expect("valid date"),
            calories: 300,
        };
        assert_eq!(point.label(), "01/10");
    }
}
