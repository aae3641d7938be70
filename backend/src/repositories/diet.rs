//! Diet repository: diet plans, planned meals, meal logs

use chrono::{DateTime, NaiveDate, Utc};
use fittrack_shared::lists::encode_list;
use fittrack_shared::types::{DietPlanInput, LogMealRequest};
use sqlx::SqlitePool;

/// Diet plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DietPlanRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub calorie_target: Option<i64>,
    pub protein_target_g: Option<f64>,
    pub carb_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
    pub dietary_restrictions: Option<String>,
    pub ai_generated: bool,
    pub gemini_prompt: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Planned meal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealPlanRecord {
    pub id: i64,
    pub diet_plan_id: i64,
    pub day_number: i64,
    pub meal_type: String,
    pub recipe_name: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub calories_per_serving: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub servings: i64,
}

/// Meal log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealLogRecord {
    pub id: i64,
    pub user_id: i64,
    pub meal_plan_id: Option<i64>,
    pub meal_type: String,
    pub food_items: Option<String>,
    pub calories_consumed: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub logged_at: DateTime<Utc>,
}

/// Daily nutrition totals row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyNutritionRecord {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Diet repository for database operations
pub struct DietRepository;

impl DietRepository {
    /// Insert a diet plan with its meals and shopping items in one transaction
    pub async fn create_plan(
        pool: &SqlitePool,
        user_id: i64,
        plan: &DietPlanInput,
    ) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;

        let plan_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO diet_plans (user_id, name, calorie_target, protein_target_g,
                                    carb_target_g, fat_target_g, dietary_restrictions,
                                    ai_generated, gemini_prompt, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&plan.name)
        .bind(plan.calorie_target)
        .bind(plan.protein_target_g)
        .bind(plan.carb_target_g)
        .bind(plan.fat_target_g)
        .bind(&plan.dietary_restrictions)
        .bind(plan.ai_generated)
        .bind(&plan.gemini_prompt)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for meal in &plan.meals {
            sqlx::query(
                r#"
                INSERT INTO meal_plans (diet_plan_id, day_number, meal_type, recipe_name,
                                        ingredients, instructions, calories_per_serving,
                                        protein_g, carbs_g, fat_g, servings)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(plan_id)
            .bind(meal.day_number)
            .bind(&meal.meal_type)
            .bind(&meal.recipe_name)
            .bind(encode_list(&meal.ingredients))
            .bind(&meal.instructions)
            .bind(meal.calories_per_serving)
            .bind(meal.protein_g)
            .bind(meal.carbs_g)
            .bind(meal.fat_g)
            .bind(meal.servings)
            .execute(&mut *tx)
            .await?;
        }

        for item in &plan.shopping_list {
            sqlx::query(
                r#"
                INSERT INTO shopping_lists (user_id, diet_plan_id, item_name, quantity,
                                            unit, category, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(user_id)
            .bind(plan_id)
            .bind(&item.item_name)
            .bind(item.quantity)
            .bind(&item.unit)
            .bind(&item.category)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(plan_id)
    }

    /// All diet plans owned by a user, newest first
    pub async fn list_plans(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<DietPlanRecord>> {
        sqlx::query_as::<_, DietPlanRecord>(
            r#"
            SELECT id, user_id, name, calorie_target, protein_target_g, carb_target_g,
                   fat_target_g, dietary_restrictions, ai_generated, gemini_prompt, created_at
            FROM diet_plans
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find one diet plan by id
    pub async fn find_plan(pool: &SqlitePool, plan_id: i64) -> sqlx::Result<Option<DietPlanRecord>> {
        sqlx::query_as::<_, DietPlanRecord>(
            r#"
            SELECT id, user_id, name, calorie_target, protein_target_g, carb_target_g,
                   fat_target_g, dietary_restrictions, ai_generated, gemini_prompt, created_at
            FROM diet_plans
            WHERE id = ?
            "#,
        )
        .bind(plan_id)
        .fetch_optional(pool)
        .await
    }

    /// Planned meals of a diet plan, in day/meal order
    pub async fn plan_meals(
        pool: &SqlitePool,
        diet_plan_id: i64,
    ) -> sqlx::Result<Vec<MealPlanRecord>> {
        sqlx::query_as::<_, MealPlanRecord>(
            r#"
            SELECT id, diet_plan_id, day_number, meal_type, recipe_name, ingredients,
                   instructions, calories_per_serving, protein_g, carbs_g, fat_g, servings
            FROM meal_plans
            WHERE diet_plan_id = ?
            ORDER BY day_number ASC, id ASC
            "#,
        )
        .bind(diet_plan_id)
        .fetch_all(pool)
        .await
    }

    /// Calorie target of the most recently created plan, if any
    pub async fn latest_calorie_target(
        pool: &SqlitePool,
        user_id: i64,
    ) -> sqlx::Result<Option<i64>> {
        let target = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT calorie_target
            FROM diet_plans
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(target.flatten())
    }

    /// Insert a consumed-meal log
    ///
    /// `meal_plan_id` may be absent (ad-hoc meal); when present the foreign
    /// key is schema-enforced.
    pub async fn insert_meal_log(
        pool: &SqlitePool,
        user_id: i64,
        entry: &LogMealRequest,
        logged_at: DateTime<Utc>,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO meal_logs (user_id, meal_plan_id, meal_type, food_items,
                                   calories_consumed, protein_g, carbs_g, fat_g, logged_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(entry.meal_plan_id)
        .bind(&entry.meal_type)
        .bind(encode_list(&entry.food_items))
        .bind(entry.calories_consumed)
        .bind(entry.protein_g)
        .bind(entry.carbs_g)
        .bind(entry.fat_g)
        .bind(logged_at)
        .fetch_one(pool)
        .await
    }

    /// Daily nutrition totals since a cutoff date, oldest first
    pub async fn daily_nutrition(
        pool: &SqlitePool,
        user_id: i64,
        since: DateTime<Utc>,
    ) -> sqlx::Result<Vec<DailyNutritionRecord>> {
        sqlx::query_as::<_, DailyNutritionRecord>(
            r#"
            SELECT
                DATE(ml.logged_at) AS date,
                COALESCE(SUM(ml.calories_consumed), 0.0) AS calories,
                COALESCE(SUM(ml.protein_g), 0.0) AS protein,
                COALESCE(SUM(ml.carbs_g), 0.0) AS carbs,
                COALESCE(SUM(ml.fat_g), 0.0) AS fats
            FROM meal_logs ml
            WHERE ml.user_id = ? AND DATE(ml.logged_at) >= DATE(?)
            GROUP BY DATE(ml.logged_at)
            ORDER BY DATE(ml.logged_at) ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Delete a diet plan and its dependents
    ///
    /// Meal logs that pointed at the plan's meals are detached (their
    /// history stays, the link is nulled) before the meals go away.
    pub async fn delete_plan(pool: &SqlitePool, plan_id: i64) -> sqlx::Result<u64> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE meal_logs SET meal_plan_id = NULL
            WHERE meal_plan_id IN (SELECT id FROM meal_plans WHERE diet_plan_id = ?)
            "#,
        )
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM meal_plans WHERE diet_plan_id = ?")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM shopping_lists WHERE diet_plan_id = ?")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM diet_plans WHERE id = ?")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
