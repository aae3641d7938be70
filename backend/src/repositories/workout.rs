//! Workout repository: plans, days, exercise catalog, logs
//!
//! Plan creation and workout logging are multi-row writes and run inside a
//! single transaction each. The `exercises` table is a shared catalog
//! upserted by name, never duplicated per user.

use chrono::{DateTime, NaiveDate, Utc};
use fittrack_shared::lists::encode_list;
use fittrack_shared::types::{ExerciseLogInput, WorkoutPlanInput};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Workout plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutPlanRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: i64,
    pub ai_generated: bool,
    pub gemini_prompt: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Workout day record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutDayRecord {
    pub id: i64,
    pub workout_plan_id: i64,
    pub day_number: i64,
    pub day_name: Option<String>,
    pub focus_area: Option<String>,
}

/// Prescribed exercise joined with its catalog entry
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PrescribedExerciseRecord {
    pub exercise_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub muscle_groups: Option<String>,
    pub equipment: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    pub weight_kg: Option<f64>,
    pub rest_seconds: Option<i64>,
    pub notes: Option<String>,
}

/// Workout log record, joined with its workout day
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutLogRecord {
    pub id: i64,
    pub user_id: i64,
    pub workout_day_id: i64,
    pub plan_name: Option<String>,
    pub day_number: i64,
    pub day_name: Option<String>,
    pub completed_at: DateTime<Utc>,
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
}

/// Aggregated history row: one per (date, plan, day)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutHistoryRecord {
    pub date: NaiveDate,
    pub plan_name: Option<String>,
    pub day_number: i64,
    pub volume: f64,
    pub sessions: i64,
    pub avg_duration_minutes: Option<f64>,
}

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Insert a plan with its nested days and exercises in one transaction
    pub async fn create_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan: &WorkoutPlanInput,
    ) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;

        let plan_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workout_plans (user_id, name, description, duration_weeks,
                                       ai_generated, gemini_prompt, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.duration_weeks)
        .bind(plan.ai_generated)
        .bind(&plan.gemini_prompt)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for day in &plan.days {
            let day_id = sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO workout_days (workout_plan_id, day_number, day_name, focus_area)
                VALUES (?, ?, ?, ?)
                RETURNING id
                "#,
            )
            .bind(plan_id)
            .bind(day.day_number)
            .bind(&day.day_name)
            .bind(&day.focus_area)
            .fetch_one(&mut *tx)
            .await?;

            for exercise in &day.exercises {
                let exercise_id = Self::upsert_exercise(&mut tx, exercise).await?;

                sqlx::query(
                    r#"
                    INSERT INTO workout_exercises (workout_day_id, exercise_id, sets, reps,
                                                   weight_kg, rest_seconds, notes)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(day_id)
                .bind(exercise_id)
                .bind(exercise.sets)
                .bind(&exercise.reps)
                .bind(exercise.weight_kg)
                .bind(exercise.rest_seconds)
                .bind(&exercise.notes)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(plan_id)
    }

    /// Upsert a catalog exercise by name, returning its id
    ///
    /// The no-op `DO UPDATE` keeps RETURNING populated on conflict.
    async fn upsert_exercise(
        tx: &mut Transaction<'_, Sqlite>,
        exercise: &fittrack_shared::types::ExerciseInput,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO exercises (name, category, muscle_groups, equipment,
                                   difficulty_level, instructions)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (name) DO UPDATE SET name = excluded.name
            RETURNING id
            "#,
        )
        .bind(&exercise.name)
        .bind(&exercise.category)
        .bind(encode_list(&exercise.muscle_groups))
        .bind(encode_list(&exercise.equipment))
        .bind(&exercise.difficulty_level)
        .bind(&exercise.instructions)
        .fetch_one(&mut **tx)
        .await
    }

    /// All plans owned by a user, newest first
    pub async fn list_plans(
        pool: &SqlitePool,
        user_id: i64,
    ) -> sqlx::Result<Vec<WorkoutPlanRecord>> {
        sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, name, description, duration_weeks,
                   ai_generated, gemini_prompt, created_at
            FROM workout_plans
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find one plan by id
    pub async fn find_plan(pool: &SqlitePool, plan_id: i64) -> sqlx::Result<Option<WorkoutPlanRecord>> {
        sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, name, description, duration_weeks,
                   ai_generated, gemini_prompt, created_at
            FROM workout_plans
            WHERE id = ?
            "#,
        )
        .bind(plan_id)
        .fetch_optional(pool)
        .await
    }

    /// Plans of a user carrying a given display name, newest first
    pub async fn find_plans_by_name(
        pool: &SqlitePool,
        user_id: i64,
        name: &str,
    ) -> sqlx::Result<Vec<WorkoutPlanRecord>> {
        sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, name, description, duration_weeks,
                   ai_generated, gemini_prompt, created_at
            FROM workout_plans
            WHERE user_id = ? AND name = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_all(pool)
        .await
    }

    /// Days of a plan, ordered by day number
    pub async fn plan_days(pool: &SqlitePool, plan_id: i64) -> sqlx::Result<Vec<WorkoutDayRecord>> {
        sqlx::query_as::<_, WorkoutDayRecord>(
            r#"
            SELECT id, workout_plan_id, day_number, day_name, focus_area
            FROM workout_days
            WHERE workout_plan_id = ?
            ORDER BY day_number ASC
            "#,
        )
        .bind(plan_id)
        .fetch_all(pool)
        .await
    }

    /// Find one workout day by id
    pub async fn find_day(pool: &SqlitePool, day_id: i64) -> sqlx::Result<Option<WorkoutDayRecord>> {
        sqlx::query_as::<_, WorkoutDayRecord>(
            r#"
            SELECT id, workout_plan_id, day_number, day_name, focus_area
            FROM workout_days
            WHERE id = ?
            "#,
        )
        .bind(day_id)
        .fetch_optional(pool)
        .await
    }

    /// Prescribed exercises of a day, joined with the catalog
    pub async fn day_exercises(
        pool: &SqlitePool,
        day_id: i64,
    ) -> sqlx::Result<Vec<PrescribedExerciseRecord>> {
        sqlx::query_as::<_, PrescribedExerciseRecord>(
            r#"
            SELECT e.id AS exercise_id, e.name, e.category, e.muscle_groups, e.equipment,
                   we.sets, we.reps, we.weight_kg, we.rest_seconds, we.notes
            FROM workout_exercises we
            JOIN exercises e ON we.exercise_id = e.id
            WHERE we.workout_day_id = ?
            ORDER BY we.id ASC
            "#,
        )
        .bind(day_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a completed-workout log and its per-exercise rows
    #[allow(clippy::too_many_arguments)]
    pub async fn create_log(
        pool: &SqlitePool,
        user_id: i64,
        workout_day_id: i64,
        plan_name: Option<&str>,
        completed_at: DateTime<Utc>,
        duration_minutes: Option<i64>,
        notes: Option<&str>,
        exercises: &[ExerciseLogInput],
    ) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;

        let log_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workout_logs (user_id, workout_day_id, plan_name, completed_at,
                                      duration_minutes, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(workout_day_id)
        .bind(plan_name)
        .bind(completed_at)
        .bind(duration_minutes)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await?;

        for entry in exercises {
            sqlx::query(
                r#"
                INSERT INTO exercise_logs (workout_log_id, exercise_id, sets_completed,
                                           reps_completed, weight_used_kg, perceived_exertion, notes)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(log_id)
            .bind(entry.exercise_id)
            .bind(entry.sets_completed)
            .bind(entry.reps_completed)
            .bind(entry.weight_used_kg)
            .bind(entry.perceived_exertion)
            .bind(&entry.notes)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(log_id)
    }

    /// Logs of a user joined with their day, newest first
    pub async fn list_logs(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<WorkoutLogRecord>> {
        sqlx::query_as::<_, WorkoutLogRecord>(
            r#"
            SELECT wl.id, wl.user_id, wl.workout_day_id, wl.plan_name,
                   wd.day_number, wd.day_name,
                   wl.completed_at, wl.duration_minutes, wl.notes
            FROM workout_logs wl
            JOIN workout_days wd ON wl.workout_day_id = wd.id
            WHERE wl.user_id = ?
            ORDER BY wl.completed_at DESC, wl.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Aggregated training history since a cutoff date
    ///
    /// Volume is `Σ sets·reps·weight` over the logged exercises of each
    /// (date, plan, day) group.
    pub async fn history(
        pool: &SqlitePool,
        user_id: i64,
        since: DateTime<Utc>,
    ) -> sqlx::Result<Vec<WorkoutHistoryRecord>> {
        sqlx::query_as::<_, WorkoutHistoryRecord>(
            r#"
            SELECT
                DATE(wl.completed_at) AS date,
                wl.plan_name AS plan_name,
                wd.day_number AS day_number,
                COALESCE(SUM(el.sets_completed * el.reps_completed * el.weight_used_kg), 0.0) AS volume,
                COUNT(DISTINCT wl.id) AS sessions,
                AVG(wl.duration_minutes) AS avg_duration_minutes
            FROM workout_logs wl
            LEFT JOIN exercise_logs el ON wl.id = el.workout_log_id
            JOIN workout_days wd ON wl.workout_day_id = wd.id
            WHERE wl.user_id = ? AND DATE(wl.completed_at) >= DATE(?)
            GROUP BY DATE(wl.completed_at), wl.plan_name, wd.day_number
            ORDER BY DATE(wl.completed_at) ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Delete a plan and every dependent row
    ///
    /// The schema declares no cascades; deletion order matters under
    /// foreign-key enforcement: logs before exercises-per-day, days last.
    pub async fn delete_plan(pool: &SqlitePool, plan_id: i64) -> sqlx::Result<u64> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM exercise_logs WHERE workout_log_id IN (
                SELECT id FROM workout_logs WHERE workout_day_id IN (
                    SELECT id FROM workout_days WHERE workout_plan_id = ?
                )
            )
            "#,
        )
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM workout_logs WHERE workout_day_id IN (
                SELECT id FROM workout_days WHERE workout_plan_id = ?
            )
            "#,
        )
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM workout_exercises WHERE workout_day_id IN (
                SELECT id FROM workout_days WHERE workout_plan_id = ?
            )
            "#,
        )
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM workout_days WHERE workout_plan_id = ?")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM workout_plans WHERE id = ?")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
