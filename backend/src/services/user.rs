//! User service: account creation and profile management
//!
//! Credentials are stored, never derived: `password_hash` arrives
//! pre-hashed from the caller and is treated as an opaque string.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use fittrack_shared::models::{User, UserProfile};
use fittrack_shared::types::CreateUserRequest;
use fittrack_shared::validation;
use sqlx::SqlitePool;
use tracing::info;
use validator::ValidateEmail;

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Create a new user account with an optional profile
    ///
    /// A duplicate username or email surfaces as `ConstraintViolation` from
    /// the unique indexes; there is no racy existence pre-check.
    pub async fn create_user(
        pool: &SqlitePool,
        req: &CreateUserRequest,
    ) -> Result<i64, ApiError> {
        validation::validate_username(&req.username).map_err(ApiError::Validation)?;

        if !req.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        if req.password_hash.trim().is_empty() {
            return Err(ApiError::Validation(
                "Password hash must not be empty".to_string(),
            ));
        }

        validate_profile(&req.profile)?;

        let user_id = UserRepository::create(
            pool,
            &req.username,
            &req.email,
            &req.password_hash,
            &req.profile,
        )
        .await?;

        info!(user_id, username = %req.username, "User created");

        Ok(user_id)
    }

    /// Fetch a user with their profile
    pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<User, ApiError> {
        let record = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))?;

        Ok(User {
            id: record.id,
            username: record.username.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            profile: record.profile(),
            created_at: record.created_at,
        })
    }

    /// Apply a partial profile update
    pub async fn update_profile(
        pool: &SqlitePool,
        user_id: i64,
        updates: &UserProfile,
    ) -> Result<(), ApiError> {
        if updates.is_empty() {
            return Err(ApiError::Validation(
                "No profile fields provided".to_string(),
            ));
        }

        validate_profile(updates)?;

        let rows = UserRepository::update_profile(pool, user_id, updates).await?;
        if rows == 0 {
            return Err(ApiError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(())
    }
}

/// Range-check the profile fields that carry one
fn validate_profile(profile: &UserProfile) -> Result<(), ApiError> {
    if let Some(age) = profile.age {
        validation::validate_age(age).map_err(ApiError::Validation)?;
    }
    if let Some(height_cm) = profile.height_cm {
        validation::validate_height_cm(height_cm).map_err(ApiError::Validation)?;
    }
    if let Some(weight_kg) = profile.weight_kg {
        validation::validate_weight_kg(weight_kg).map_err(ApiError::Validation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_profile_rejects_bad_ranges() {
        let profile = UserProfile {
            weight_kg: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            validate_profile(&profile),
            Err(ApiError::Validation(_))
        ));

        let profile = UserProfile {
            age: Some(7),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_validate_profile_accepts_empty() {
        assert!(validate_profile(&UserProfile::default()).is_ok());
    }
}
