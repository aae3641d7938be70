//! Integration tests for the diet domain: plans, meals, pantry

mod common;

use fittrack_backend::error::ApiError;
use fittrack_backend::services::{DietService, PantryService};
use fittrack_shared::types::{DietPlanInput, LogMealRequest, MealInput, ShoppingItemInput};

fn cut_plan(name: &str) -> DietPlanInput {
    DietPlanInput {
        name: name.to_string(),
        calorie_target: Some(2000),
        protein_target_g: Some(120.0),
        carb_target_g: Some(250.0),
        fat_target_g: Some(67.0),
        dietary_restrictions: Some("None".to_string()),
        ai_generated: true,
        gemini_prompt: Some("7-day cut at 2000 kcal".to_string()),
        meals: vec![MealInput {
            day_number: 1,
            meal_type: "Breakfast".to_string(),
            recipe_name: Some("Protein Oatmeal Bowl".to_string()),
            ingredients: vec![
                "1 cup oats".to_string(),
                "1 scoop protein powder".to_string(),
                "1 banana".to_string(),
            ],
            instructions: Some("Cook oats, stir in the rest".to_string()),
            calories_per_serving: Some(450.0),
            protein_g: Some(25.0),
            carbs_g: Some(55.0),
            fat_g: Some(12.0),
            servings: 1,
        }],
        shopping_list: vec![ShoppingItemInput {
            item_name: "Quinoa".to_string(),
            quantity: Some(2.0),
            unit: Some("cups".to_string()),
            category: Some("Grains".to_string()),
        }],
    }
}

#[tokio::test]
async fn test_diet_plan_roundtrip() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let plan_id = DietService::generate_plan(&pool, alice, &cut_plan("Cut 2000"))
        .await
        .unwrap();

    let plans = DietService::list_plans(&pool, alice).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].calorie_target, Some(2000));

    let meals = DietService::plan_meals(&pool, alice, plan_id).await.unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].meal_type, "Breakfast");
    // Ordered ingredient list survives the column encoding
    assert_eq!(
        meals[0].ingredients,
        vec!["1 cup oats", "1 scoop protein powder", "1 banana"]
    );

    let items = PantryService::shopping_list(&pool, alice).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_name, "Quinoa");
    assert!(!items[0].purchased);
    assert_eq!(items[0].diet_plan_id, Some(plan_id));
}

#[tokio::test]
async fn test_toggle_purchased_twice_restores_flag() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    DietService::generate_plan(&pool, alice, &cut_plan("Cut 2000"))
        .await
        .unwrap();
    let items = PantryService::shopping_list(&pool, alice).await.unwrap();
    let item_id = items[0].id;
    let original = items[0].purchased;

    let flipped = PantryService::toggle_purchased(&pool, alice, item_id)
        .await
        .unwrap();
    assert_eq!(flipped, !original);

    let restored = PantryService::toggle_purchased(&pool, alice, item_id)
        .await
        .unwrap();
    assert_eq!(restored, original);
}

#[tokio::test]
async fn test_toggle_unknown_item_is_not_found() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let err = PantryService::toggle_purchased(&pool, alice, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_ad_hoc_meal_log_without_plan() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let log_id = DietService::log_meal(
        &pool,
        alice,
        &LogMealRequest {
            meal_type: "Lunch".to_string(),
            food_items: vec!["chicken wrap".to_string(), "apple".to_string()],
            calories_consumed: 640.0,
            protein_g: Some(42.0),
            carbs_g: Some(70.0),
            fat_g: Some(18.0),
            meal_plan_id: None,
        },
    )
    .await
    .unwrap();
    assert!(log_id > 0);
}

#[tokio::test]
async fn test_meal_log_with_dangling_plan_is_constraint_violation() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let err = DietService::log_meal(
        &pool,
        alice,
        &LogMealRequest {
            meal_type: "Dinner".to_string(),
            food_items: vec![],
            calories_consumed: 500.0,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            meal_plan_id: Some(999),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_negative_calories_rejected() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let err = DietService::log_meal(
        &pool,
        alice,
        &LogMealRequest {
            meal_type: "Snack".to_string(),
            food_items: vec![],
            calories_consumed: -120.0,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            meal_plan_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_nutrition_summary_sums_todays_meals() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    DietService::generate_plan(&pool, alice, &cut_plan("Cut 2000"))
        .await
        .unwrap();

    for (meal_type, calories, protein) in
        [("Breakfast", 450.0, 25.0), ("Lunch", 640.0, 42.0)]
    {
        DietService::log_meal(
            &pool,
            alice,
            &LogMealRequest {
                meal_type: meal_type.to_string(),
                food_items: vec![],
                calories_consumed: calories,
                protein_g: Some(protein),
                carbs_g: None,
                fat_g: None,
                meal_plan_id: None,
            },
        )
        .await
        .unwrap();
    }

    let summary = DietService::nutrition_summary(&pool, alice, 7).await.unwrap();
    assert_eq!(summary.len(), 1);
    assert!((summary[0].calories - 1090.0).abs() < f64::EPSILON);
    assert!((summary[0].protein - 67.0).abs() < f64::EPSILON);
    // The newest plan's calorie target rides along for charting
    assert_eq!(summary[0].target_calories, Some(2000));
}

#[tokio::test]
async fn test_food_inventory_tolerates_duplicates() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    assert!(PantryService::add_food(&pool, alice, "Oats").await.unwrap());
    assert!(!PantryService::add_food(&pool, alice, "Oats").await.unwrap());
    assert!(PantryService::add_food(&pool, alice, "Bananas").await.unwrap());

    let foods = PantryService::list_foods(&pool, alice).await.unwrap();
    assert_eq!(foods, vec!["Bananas", "Oats"]);
}

#[tokio::test]
async fn test_delete_diet_plan_detaches_meal_logs() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let plan_id = DietService::generate_plan(&pool, alice, &cut_plan("Cut 2000"))
        .await
        .unwrap();
    let meals = DietService::plan_meals(&pool, alice, plan_id).await.unwrap();

    let log_id = DietService::log_meal(
        &pool,
        alice,
        &LogMealRequest {
            meal_type: "Breakfast".to_string(),
            food_items: vec!["oatmeal".to_string()],
            calories_consumed: 450.0,
            protein_g: Some(25.0),
            carbs_g: None,
            fat_g: None,
            meal_plan_id: Some(meals[0].id),
        },
    )
    .await
    .unwrap();

    DietService::delete_plan(&pool, alice, plan_id).await.unwrap();

    assert!(DietService::list_plans(&pool, alice).await.unwrap().is_empty());
    assert!(PantryService::shopping_list(&pool, alice).await.unwrap().is_empty());

    // The consumption history survives, unlinked from the deleted plan
    let meal_plan_id: Option<i64> =
        sqlx::query_scalar("SELECT meal_plan_id FROM meal_logs WHERE id = ?")
            .bind(log_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(meal_plan_id, None);
}
