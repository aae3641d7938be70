//! API request and response types

use crate::models::UserProfile;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_servings() -> i64 {
    1
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Identity & Sessions
// ============================================================================

/// Account creation request
///
/// `password_hash` is supplied pre-hashed by the caller; this service never
/// derives credentials itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Response carrying a freshly created row id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
}

/// Session creation request; the opaque token comes from the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: i64,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Workout Domain
// ============================================================================

/// Workout plan payload, typically parsed client-side from an AI response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanInput {
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: i64,
    #[serde(default = "default_true")]
    pub ai_generated: bool,
    pub gemini_prompt: Option<String>,
    #[serde(default)]
    pub days: Vec<WorkoutDayInput>,
}

/// One day inside a workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDayInput {
    pub day_number: i64,
    pub day_name: Option<String>,
    pub focus_area: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

/// Exercise prescription inside a workout day
///
/// `reps` is free text ("8-12", "AMRAP"); the catalog fields
/// (`name`..`instructions`) upsert into the shared `exercises` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseInput {
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub difficulty_level: Option<String>,
    pub instructions: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    pub weight_kg: Option<f64>,
    pub rest_seconds: Option<i64>,
    pub notes: Option<String>,
}

/// Workout plan list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: i64,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

/// Workout day with its prescribed exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDayDetail {
    pub id: i64,
    pub day_number: i64,
    pub day_name: Option<String>,
    pub focus_area: Option<String>,
    pub exercises: Vec<PrescribedExercise>,
}

/// One prescribed exercise, joined with its catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescribedExercise {
    pub exercise_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    pub weight_kg: Option<f64>,
    pub rest_seconds: Option<i64>,
    pub notes: Option<String>,
}

/// Completed-workout log request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWorkoutRequest {
    pub workout_day_id: i64,
    pub plan_name: String,
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseLogInput>,
}

/// Per-exercise actuals inside a workout log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLogInput {
    pub exercise_id: i64,
    pub sets_completed: Option<i64>,
    pub reps_completed: Option<i64>,
    pub weight_used_kg: Option<f64>,
    pub perceived_exertion: Option<i64>,
    pub notes: Option<String>,
}

/// One logged workout, joined with its day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub id: i64,
    pub workout_day_id: i64,
    pub plan_name: Option<String>,
    pub day_number: i64,
    pub day_name: Option<String>,
    pub completed_at: DateTime<Utc>,
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
}

/// Aggregated workout history row (one per day/plan/day-number)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    pub date: NaiveDate,
    pub plan_name: Option<String>,
    pub day_number: i64,
    pub volume: f64,
    pub sessions: i64,
    pub avg_duration_minutes: Option<f64>,
}

// ============================================================================
// Body Metrics
// ============================================================================

/// Append-only progress entry request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordProgressRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Defaults to today when omitted
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Diet Domain
// ============================================================================

/// Diet plan payload with nested meals and shopping items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanInput {
    pub name: String,
    pub calorie_target: Option<i64>,
    pub protein_target_g: Option<f64>,
    pub carb_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
    pub dietary_restrictions: Option<String>,
    #[serde(default = "default_true")]
    pub ai_generated: bool,
    pub gemini_prompt: Option<String>,
    #[serde(default)]
    pub meals: Vec<MealInput>,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingItemInput>,
}

/// One planned meal inside a diet plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealInput {
    pub day_number: i64,
    pub meal_type: String,
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub calories_per_serving: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    #[serde(default = "default_servings")]
    pub servings: i64,
}

/// Shopping list item inside a diet plan (or standalone)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItemInput {
    pub item_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
}

/// Diet plan list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanSummary {
    pub id: i64,
    pub name: String,
    pub calorie_target: Option<i64>,
    pub protein_target_g: Option<f64>,
    pub carb_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
    pub dietary_restrictions: Option<String>,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

/// Planned meal as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanDetail {
    pub id: i64,
    pub day_number: i64,
    pub meal_type: String,
    pub recipe_name: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub calories_per_serving: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub servings: i64,
}

/// Ad-hoc or plan-linked meal consumption log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMealRequest {
    pub meal_type: String,
    #[serde(default)]
    pub food_items: Vec<String>,
    pub calories_consumed: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub meal_plan_id: Option<i64>,
}

/// Daily nutrition totals with the active calorie target attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<i64>,
}

/// Pantry addition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFoodRequest {
    pub food_name: String,
}

/// Shopping list row as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: i64,
    pub item_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub purchased: bool,
    pub diet_plan_id: Option<i64>,
}

// ============================================================================
// AI Collaborator
// ============================================================================

/// Free-form text generation request; the prompt is assembled by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: String,
}

/// Free-form text generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    pub text: String,
}
