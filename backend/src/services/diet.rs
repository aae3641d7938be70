//! Diet service: diet plans, meal logging, nutrition summaries

use crate::error::ApiError;
use crate::repositories::DietRepository;
use chrono::{Duration, Utc};
use fittrack_shared::lists::decode_list;
use fittrack_shared::types::{
    DailyNutrition, DietPlanInput, DietPlanSummary, LogMealRequest, MealPlanDetail,
};
use fittrack_shared::validation;
use sqlx::SqlitePool;
use tracing::info;

/// Diet service for plan and meal-log operations
pub struct DietService;

impl DietService {
    /// Persist a diet plan with its meals and shopping list
    pub async fn generate_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan: &DietPlanInput,
    ) -> Result<i64, ApiError> {
        if plan.name.trim().is_empty() {
            return Err(ApiError::Validation("Plan name must not be empty".to_string()));
        }
        if let Some(target) = plan.calorie_target {
            validation::validate_calories(target as f64).map_err(ApiError::Validation)?;
        }
        for meal in &plan.meals {
            if meal.meal_type.trim().is_empty() {
                return Err(ApiError::Validation(
                    "Meal type must not be empty".to_string(),
                ));
            }
            if let Some(calories) = meal.calories_per_serving {
                validation::validate_calories(calories).map_err(ApiError::Validation)?;
            }
        }
        for item in &plan.shopping_list {
            if item.item_name.trim().is_empty() {
                return Err(ApiError::Validation(
                    "Shopping item name must not be empty".to_string(),
                ));
            }
        }

        let plan_id = DietRepository::create_plan(pool, user_id, plan).await?;

        info!(user_id, plan_id, name = %plan.name, "Diet plan saved");

        Ok(plan_id)
    }

    /// All diet plans of a user, newest first
    pub async fn list_plans(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<DietPlanSummary>, ApiError> {
        let records = DietRepository::list_plans(pool, user_id).await?;

        Ok(records
            .into_iter()
            .map(|r| DietPlanSummary {
                id: r.id,
                name: r.name,
                calorie_target: r.calorie_target,
                protein_target_g: r.protein_target_g,
                carb_target_g: r.carb_target_g,
                fat_target_g: r.fat_target_g,
                dietary_restrictions: r.dietary_restrictions,
                ai_generated: r.ai_generated,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Planned meals of a plan the user owns
    pub async fn plan_meals(
        pool: &SqlitePool,
        user_id: i64,
        plan_id: i64,
    ) -> Result<Vec<MealPlanDetail>, ApiError> {
        let plan = DietRepository::find_plan(pool, plan_id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("Diet plan {} not found", plan_id)))?;

        let meals = DietRepository::plan_meals(pool, plan.id).await?;

        Ok(meals
            .into_iter()
            .map(|m| MealPlanDetail {
                id: m.id,
                day_number: m.day_number,
                meal_type: m.meal_type,
                recipe_name: m.recipe_name,
                ingredients: m.ingredients.as_deref().map(decode_list).unwrap_or_default(),
                instructions: m.instructions,
                calories_per_serving: m.calories_per_serving,
                protein_g: m.protein_g,
                carbs_g: m.carbs_g,
                fat_g: m.fat_g,
                servings: m.servings,
            })
            .collect())
    }

    /// Log a consumed meal, optionally linked to a planned one
    pub async fn log_meal(
        pool: &SqlitePool,
        user_id: i64,
        req: &LogMealRequest,
    ) -> Result<i64, ApiError> {
        if req.meal_type.trim().is_empty() {
            return Err(ApiError::Validation("Meal type must not be empty".to_string()));
        }
        validation::validate_calories(req.calories_consumed).map_err(ApiError::Validation)?;

        let log_id = DietRepository::insert_meal_log(pool, user_id, req, Utc::now()).await?;

        info!(user_id, log_id, meal_type = %req.meal_type, "Meal logged");

        Ok(log_id)
    }

    /// Daily nutrition totals over the trailing `days` days
    ///
    /// The calorie target of the newest diet plan is attached to each row
    /// so clients can chart actual vs. target.
    pub async fn nutrition_summary(
        pool: &SqlitePool,
        user_id: i64,
        days: i64,
    ) -> Result<Vec<DailyNutrition>, ApiError> {
        if !(1..=365).contains(&days) {
            return Err(ApiError::Validation(
                "Summary window must be between 1 and 365 days".to_string(),
            ));
        }

        let since = Utc::now() - Duration::days(days);
        let target_calories = DietRepository::latest_calorie_target(pool, user_id).await?;
        let records = DietRepository::daily_nutrition(pool, user_id, since).await?;

        Ok(records
            .into_iter()
            .map(|r| DailyNutrition {
                date: r.date,
                calories: r.calories,
                protein: r.protein,
                carbs: r.carbs,
                fats: r.fats,
                target_calories,
            })
            .collect())
    }

    /// Delete a plan the user owns, detaching its meal logs
    pub async fn delete_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan_id: i64,
    ) -> Result<(), ApiError> {
        let plan = DietRepository::find_plan(pool, plan_id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("Diet plan {} not found", plan_id)))?;

        DietRepository::delete_plan(pool, plan.id).await?;

        info!(user_id, plan_id, "Diet plan deleted");

        Ok(())
    }
}
