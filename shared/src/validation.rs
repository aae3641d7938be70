//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Uses both custom validators and the `validator` crate for derive macros.

/// Validate username format (3-32 chars, letters/digits/underscore)
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 32 {
        return Err("Username too long".to_string());
    }
    let username_regex = regex_lite::Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
    if !username_regex.is_match(username) {
        return Err("Username may only contain letters, digits and underscores".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: i64) -> Result<(), String> {
    if age < 13 {
        return Err("Age must be at least 13".to_string());
    }
    if age > 120 {
        return Err("Age must be at most 120".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate workout duration in minutes
pub fn validate_duration_minutes(minutes: i64) -> Result<(), String> {
    if minutes < 0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate plan length in weeks
pub fn validate_duration_weeks(weeks: i64) -> Result<(), String> {
    if weeks < 1 {
        return Err("Plan must run for at least 1 week".to_string());
    }
    if weeks > 52 {
        return Err("Plan cannot exceed 52 weeks".to_string());
    }
    Ok(())
}

/// Validate perceived exertion (RPE, 1-10 scale)
pub fn validate_perceived_exertion(rpe: i64) -> Result<(), String> {
    if !(1..=10).contains(&rpe) {
        return Err("Perceived exertion must be between 1 and 10".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("alice_92").is_ok());
        assert!(validate_username("al").is_err());
        assert!(validate_username("alice smith").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@dot").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[rstest]
    #[case(70.0, true)]
    #[case(20.0, true)]
    #[case(500.0, true)]
    #[case(10.0, false)]
    #[case(600.0, false)]
    #[case(-70.0, false)]
    fn test_validate_weight_kg(#[case] weight: f64, #[case] ok: bool) {
        assert_eq!(validate_weight_kg(weight).is_ok(), ok);
    }

    #[test]
    fn test_validate_weight_rejects_non_finite() {
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[rstest]
    #[case(170.0, true)]
    #[case(50.0, true)]
    #[case(300.0, true)]
    #[case(49.9, false)]
    #[case(300.1, false)]
    fn test_validate_height_cm(#[case] height: f64, #[case] ok: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), ok);
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(25).is_ok());
        assert!(validate_age(13).is_ok());
        assert!(validate_age(120).is_ok());
        assert!(validate_age(12).is_err());
        assert!(validate_age(121).is_err());
    }

    #[test]
    fn test_validate_calories() {
        assert!(validate_calories(0.0).is_ok());
        assert!(validate_calories(2000.0).is_ok());
        assert!(validate_calories(-1.0).is_err());
        assert!(validate_calories(100000.0).is_err());
    }

    #[test]
    fn test_validate_duration_minutes() {
        assert!(validate_duration_minutes(45).is_ok());
        assert!(validate_duration_minutes(0).is_ok());
        assert!(validate_duration_minutes(-5).is_err());
        assert!(validate_duration_minutes(1441).is_err());
    }

    #[test]
    fn test_validate_perceived_exertion() {
        assert!(validate_perceived_exertion(1).is_ok());
        assert!(validate_perceived_exertion(10).is_ok());
        assert!(validate_perceived_exertion(0).is_err());
        assert!(validate_perceived_exertion(11).is_err());
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_valid_duration_weeks(weeks in 1i64..=52) {
            prop_assert!(validate_duration_weeks(weeks).is_ok());
        }

        #[test]
        fn prop_username_of_word_chars_valid(len in 3usize..=32) {
            let username: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_username(&username).is_ok());
        }
    }
}
