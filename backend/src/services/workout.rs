//! Workout service: plan generation, workout logging, history
//!
//! Plans usually arrive from the AI flow already parsed into fields; this
//! layer only validates and persists them (the prompt that produced the
//! plan is stored alongside in `gemini_prompt`).

use crate::error::ApiError;
use crate::repositories::{WorkoutRepository, WorkoutDayRecord};
use chrono::{Duration, Utc};
use fittrack_shared::lists::decode_list;
use fittrack_shared::types::{
    LogWorkoutRequest, PrescribedExercise, WorkoutDayDetail, WorkoutHistoryEntry, WorkoutLogEntry,
    WorkoutPlanInput, WorkoutPlanSummary,
};
use fittrack_shared::validation;
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::{info, warn};

/// Workout service for plan and log operations
pub struct WorkoutService;

impl WorkoutService {
    /// Persist a workout plan with its days and exercises
    ///
    /// Day numbers must be unique within the plan; the schema does not
    /// declare that, so it is checked here before anything is written.
    pub async fn generate_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan: &WorkoutPlanInput,
    ) -> Result<i64, ApiError> {
        if plan.name.trim().is_empty() {
            return Err(ApiError::Validation("Plan name must not be empty".to_string()));
        }
        validation::validate_duration_weeks(plan.duration_weeks).map_err(ApiError::Validation)?;

        let mut seen_days = HashSet::new();
        for day in &plan.days {
            if !seen_days.insert(day.day_number) {
                return Err(ApiError::Validation(format!(
                    "Duplicate day_number {} in plan",
                    day.day_number
                )));
            }
            for exercise in &day.exercises {
                if exercise.name.trim().is_empty() {
                    return Err(ApiError::Validation(
                        "Exercise name must not be empty".to_string(),
                    ));
                }
            }
        }

        let plan_id = WorkoutRepository::create_plan(pool, user_id, plan).await?;

        info!(user_id, plan_id, name = %plan.name, "Workout plan saved");

        Ok(plan_id)
    }

    /// All plans of a user, newest first
    pub async fn list_plans(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<WorkoutPlanSummary>, ApiError> {
        let records = WorkoutRepository::list_plans(pool, user_id).await?;

        Ok(records
            .into_iter()
            .map(|r| WorkoutPlanSummary {
                id: r.id,
                name: r.name,
                description: r.description,
                duration_weeks: r.duration_weeks,
                ai_generated: r.ai_generated,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Days of a plan with their prescribed exercises
    pub async fn plan_days(
        pool: &SqlitePool,
        user_id: i64,
        plan_id: i64,
    ) -> Result<Vec<WorkoutDayDetail>, ApiError> {
        let plan = WorkoutRepository::find_plan(pool, plan_id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("Workout plan {} not found", plan_id)))?;

        let days = WorkoutRepository::plan_days(pool, plan.id).await?;

        let mut details = Vec::with_capacity(days.len());
        for day in days {
            let exercises = WorkoutRepository::day_exercises(pool, day.id).await?;
            details.push(WorkoutDayDetail {
                id: day.id,
                day_number: day.day_number,
                day_name: day.day_name,
                focus_area: day.focus_area,
                exercises: exercises
                    .into_iter()
                    .map(|e| PrescribedExercise {
                        exercise_id: e.exercise_id,
                        name: e.name,
                        category: e.category,
                        muscle_groups: e.muscle_groups.as_deref().map(decode_list).unwrap_or_default(),
                        equipment: e.equipment.as_deref().map(decode_list).unwrap_or_default(),
                        sets: e.sets,
                        reps: e.reps,
                        weight_kg: e.weight_kg,
                        rest_seconds: e.rest_seconds,
                        notes: e.notes,
                    })
                    .collect(),
            });
        }

        Ok(details)
    }

    /// Log a completed workout against a day, referencing the plan by name
    ///
    /// The plan reference is a display name, historically non-unique. When
    /// several of the user's plans share it, the most recently created one
    /// wins and the ambiguity is logged.
    pub async fn log_workout(
        pool: &SqlitePool,
        user_id: i64,
        req: &LogWorkoutRequest,
    ) -> Result<i64, ApiError> {
        if let Some(minutes) = req.duration_minutes {
            validation::validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
        }
        for entry in &req.exercises {
            if let Some(rpe) = entry.perceived_exertion {
                validation::validate_perceived_exertion(rpe).map_err(ApiError::Validation)?;
            }
        }

        let day = WorkoutRepository::find_day(pool, req.workout_day_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Workout day {} not found", req.workout_day_id))
            })?;

        let plan_name = Self::resolve_plan_name(pool, user_id, &req.plan_name, &day).await?;

        let log_id = WorkoutRepository::create_log(
            pool,
            user_id,
            day.id,
            Some(&plan_name),
            Utc::now(),
            req.duration_minutes,
            req.notes.as_deref(),
            &req.exercises,
        )
        .await?;

        info!(user_id, log_id, day_id = day.id, "Workout logged");

        Ok(log_id)
    }

    /// Resolve a plan display name against the user's plans
    async fn resolve_plan_name(
        pool: &SqlitePool,
        user_id: i64,
        plan_name: &str,
        day: &WorkoutDayRecord,
    ) -> Result<String, ApiError> {
        let candidates = WorkoutRepository::find_plans_by_name(pool, user_id, plan_name).await?;

        match candidates.len() {
            0 => Err(ApiError::NotFound(format!(
                "No workout plan named '{}' for this user",
                plan_name
            ))),
            1 => Ok(candidates[0].name.clone()),
            n => {
                let chosen = &candidates[0];
                if !candidates.iter().any(|p| p.id == day.workout_plan_id) {
                    warn!(
                        user_id,
                        plan_name,
                        day_id = day.id,
                        "Logged day does not belong to any plan with this name"
                    );
                }
                warn!(
                    user_id,
                    plan_name,
                    candidates = n,
                    chosen_plan_id = chosen.id,
                    "Plan name is ambiguous; using most recent plan"
                );
                Ok(chosen.name.clone())
            }
        }
    }

    /// Logged workouts of a user, joined with their day
    pub async fn list_logs(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<WorkoutLogEntry>, ApiError> {
        let records = WorkoutRepository::list_logs(pool, user_id).await?;

        Ok(records
            .into_iter()
            .map(|r| WorkoutLogEntry {
                id: r.id,
                workout_day_id: r.workout_day_id,
                plan_name: r.plan_name,
                day_number: r.day_number,
                day_name: r.day_name,
                completed_at: r.completed_at,
                duration_minutes: r.duration_minutes,
                notes: r.notes,
            })
            .collect())
    }

    /// Aggregated training history over the trailing `days` days
    pub async fn history(
        pool: &SqlitePool,
        user_id: i64,
        days: i64,
    ) -> Result<Vec<WorkoutHistoryEntry>, ApiError> {
        if !(1..=365).contains(&days) {
            return Err(ApiError::Validation(
                "History window must be between 1 and 365 days".to_string(),
            ));
        }

        let since = Utc::now() - Duration::days(days);
        let records = WorkoutRepository::history(pool, user_id, since).await?;

        Ok(records
            .into_iter()
            .map(|r| WorkoutHistoryEntry {
                date: r.date,
                plan_name: r.plan_name,
                day_number: r.day_number,
                volume: r.volume,
                sessions: r.sessions,
                avg_duration_minutes: r.avg_duration_minutes,
            })
            .collect())
    }

    /// Delete a plan the user owns, including all dependent rows
    pub async fn delete_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan_id: i64,
    ) -> Result<(), ApiError> {
        let plan = WorkoutRepository::find_plan(pool, plan_id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("Workout plan {} not found", plan_id)))?;

        WorkoutRepository::delete_plan(pool, plan.id).await?;

        info!(user_id, plan_id, "Workout plan deleted");

        Ok(())
    }
}
