//! Data models for the FitTrack application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

/// User fitness profile
///
/// All fields are optional; a freshly registered account may carry none.
/// `activity_level`, `fitness_goals` and `experience_level` are free text
/// captured from the profile form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub fitness_goals: Option<String>,
    pub injuries: Option<String>,
    pub experience_level: Option<String>,
}

impl UserProfile {
    /// True when no field is set, i.e. an update with this profile is a no-op.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height_cm.is_none()
            && self.weight_kg.is_none()
            && self.activity_level.is_none()
            && self.fitness_goals.is_none()
            && self.injuries.is_none()
            && self.experience_level.is_none()
    }
}

/// A single body-metric measurement event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetric {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub date: NaiveDate,
}

impl BodyMetric {
    /// Body mass index (kg/m²); None when height is non-positive.
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_calculation() {
        let metric = BodyMetric {
            height_cm: 175.0,
            weight_kg: 70.0,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let bmi = metric.bmi().unwrap();
        assert!((bmi - 22.857).abs() < 0.01);
    }

    #[test]
    fn test_bmi_zero_height_is_none() {
        let metric = BodyMetric {
            height_cm: 0.0,
            weight_kg: 70.0,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        assert!(metric.bmi().is_none());
    }

    #[test]
    fn test_empty_profile() {
        assert!(UserProfile::default().is_empty());
        let profile = UserProfile {
            age: Some(30),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }
}
