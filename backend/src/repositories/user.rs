//! User repository for database operations

use chrono::{DateTime, Utc};
use fittrack_shared::models::UserProfile;
use sqlx::SqlitePool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
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
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Split off the profile portion of the record
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level.clone(),
            fitness_goals: self.fitness_goals.clone(),
            injuries: self.injuries.clone(),
            experience_level: self.experience_level.clone(),
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user row
    ///
    /// Uniqueness of username and email is left to the schema; violations
    /// surface as database errors for the caller to classify.
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
        profile: &UserProfile,
    ) -> sqlx::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name,
                               age, gender, height_cm, weight_kg, activity_level,
                               fitness_goals, injuries, experience_level, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(&profile.activity_level)
        .bind(&profile.fitness_goals)
        .bind(&profile.injuries)
        .bind(&profile.experience_level)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name,
                   age, gender, height_cm, weight_kg, activity_level,
                   fitness_goals, injuries, experience_level, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Partial profile update; unset fields keep their current value
    ///
    /// Returns the number of rows touched (0 when the user does not exist).
    pub async fn update_profile(
        pool: &SqlitePool,
        user_id: i64,
        updates: &UserProfile,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                age = COALESCE(?, age),
                gender = COALESCE(?, gender),
                height_cm = COALESCE(?, height_cm),
                weight_kg = COALESCE(?, weight_kg),
                activity_level = COALESCE(?, activity_level),
                fitness_goals = COALESCE(?, fitness_goals),
                injuries = COALESCE(?, injuries),
                experience_level = COALESCE(?, experience_level)
            WHERE id = ?
            "#,
        )
        .bind(&updates.first_name)
        .bind(&updates.last_name)
        .bind(updates.age)
        .bind(&updates.gender)
        .bind(updates.height_cm)
        .bind(updates.weight_kg)
        .bind(&updates.activity_level)
        .bind(&updates.fitness_goals)
        .bind(&updates.injuries)
        .bind(&updates.experience_level)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the integration tests in tests/, which run against a real
    // in-memory database with the production migrations applied.
}
