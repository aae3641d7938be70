//! Pantry service: food inventory and shopping lists

use crate::error::ApiError;
use crate::repositories::{FoodInventoryRepository, ShoppingListRepository};
use fittrack_shared::types::ShoppingListItem;
use sqlx::SqlitePool;
use tracing::info;

/// Pantry service for inventory and shopping operations
pub struct PantryService;

impl PantryService {
    /// Add a food to the user's inventory; duplicates are a quiet no-op
    ///
    /// Returns true when the food was newly added.
    pub async fn add_food(
        pool: &SqlitePool,
        user_id: i64,
        food_name: &str,
    ) -> Result<bool, ApiError> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            return Err(ApiError::Validation("Food name must not be empty".to_string()));
        }

        let added = FoodInventoryRepository::add(pool, user_id, food_name).await?;

        if added {
            info!(user_id, food_name, "Food added to inventory");
        }

        Ok(added)
    }

    /// All foods available to the user
    pub async fn list_foods(pool: &SqlitePool, user_id: i64) -> Result<Vec<String>, ApiError> {
        Ok(FoodInventoryRepository::list_names(pool, user_id).await?)
    }

    /// The user's shopping items, most recent first
    pub async fn shopping_list(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<ShoppingListItem>, ApiError> {
        let records = ShoppingListRepository::list_for_user(pool, user_id).await?;

        Ok(records
            .into_iter()
            .map(|r| ShoppingListItem {
                id: r.id,
                item_name: r.item_name,
                quantity: r.quantity,
                unit: r.unit,
                category: r.category,
                purchased: r.purchased,
                diet_plan_id: r.diet_plan_id,
            })
            .collect())
    }

    /// Flip the purchased flag on an item the user owns
    ///
    /// This is a toggle, not a set: applying it twice restores the
    /// original value. Returns the new flag state.
    pub async fn toggle_purchased(
        pool: &SqlitePool,
        user_id: i64,
        item_id: i64,
    ) -> Result<bool, ApiError> {
        let item = ShoppingListRepository::find_item(pool, item_id)
            .await?
            .filter(|i| i.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("Shopping item {} not found", item_id)))?;

        let purchased = ShoppingListRepository::toggle_purchased(pool, item.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Shopping item {} not found", item_id)))?;

        Ok(purchased)
    }
}
