//! Pantry repositories: food inventory and shopping lists

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Food inventory record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: i64,
    pub user_id: i64,
    pub food_name: String,
    pub added_at: DateTime<Utc>,
}

/// Shopping list record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShoppingItemRecord {
    pub id: i64,
    pub user_id: i64,
    pub diet_plan_id: Option<i64>,
    pub item_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub purchased: bool,
}

/// Food inventory repository
pub struct FoodInventoryRepository;

impl FoodInventoryRepository {
    /// Add a food to the user's inventory
    ///
    /// Duplicate adds are tolerated: the (user_id, food_name) pair is unique
    /// and a conflicting insert is a no-op. Returns true when a row was
    /// actually inserted.
    pub async fn add(pool: &SqlitePool, user_id: i64, food_name: &str) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO food_inventory (user_id, food_name, added_at)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, food_name) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(food_name)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All food names available to the user
    pub async fn list_names(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT food_name FROM food_inventory
            WHERE user_id = ?
            ORDER BY food_name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

/// Shopping list repository
pub struct ShoppingListRepository;

impl ShoppingListRepository {
    /// All shopping items for a user, most recent list first
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> sqlx::Result<Vec<ShoppingItemRecord>> {
        sqlx::query_as::<_, ShoppingItemRecord>(
            r#"
            SELECT id, user_id, diet_plan_id, item_name, quantity, unit, category, purchased
            FROM shopping_lists
            WHERE user_id = ?
            ORDER BY id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find one shopping item by id
    pub async fn find_item(
        pool: &SqlitePool,
        item_id: i64,
    ) -> sqlx::Result<Option<ShoppingItemRecord>> {
        sqlx::query_as::<_, ShoppingItemRecord>(
            r#"
            SELECT id, user_id, diet_plan_id, item_name, quantity, unit, category, purchased
            FROM shopping_lists
            WHERE id = ?
            "#,
        )
        .bind(item_id)
        .fetch_optional(pool)
        .await
    }

    /// Flip the purchased flag on an item
    ///
    /// Returns the new flag value, or None when the item does not exist.
    pub async fn toggle_purchased(pool: &SqlitePool, item_id: i64) -> sqlx::Result<Option<bool>> {
        sqlx::query_scalar::<_, bool>(
            r#"
            UPDATE shopping_lists
            SET purchased = NOT purchased
            WHERE id = ?
            RETURNING purchased
            "#,
        )
        .bind(item_id)
        .fetch_optional(pool)
        .await
    }
}
