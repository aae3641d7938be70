//! Pantry routes: food inventory and shopping list

use crate::auth::SessionUser;
use crate::error::ApiResult;
use crate::services::PantryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fittrack_shared::types::{AddFoodRequest, ShoppingListItem};
use serde::Serialize;

/// Create pantry routes
pub fn pantry_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", post(add_food).get(list_foods))
        .route("/shopping", get(shopping_list))
        .route("/shopping/:id/toggle", post(toggle_purchased))
}

/// Food addition response
#[derive(Serialize)]
struct FoodAdded {
    added: bool,
}

/// Add a food to the inventory (duplicate-tolerant)
///
/// POST /api/v1/pantry/foods
async fn add_food(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<AddFoodRequest>,
) -> ApiResult<Json<FoodAdded>> {
    let added = PantryService::add_food(&state.db, session.user_id, &req.food_name).await?;
    Ok(Json(FoodAdded { added }))
}

/// All foods available to the user
///
/// GET /api/v1/pantry/foods
async fn list_foods(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<String>>> {
    let foods = PantryService::list_foods(&state.db, session.user_id).await?;
    Ok(Json(foods))
}

/// The user's shopping items
///
/// GET /api/v1/pantry/shopping
async fn shopping_list(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<ShoppingListItem>>> {
    let items = PantryService::shopping_list(&state.db, session.user_id).await?;
    Ok(Json(items))
}

/// Toggle response carrying the new flag state
#[derive(Serialize)]
struct ToggleResult {
    purchased: bool,
}

/// Flip the purchased flag on a shopping item
///
/// POST /api/v1/pantry/shopping/:id/toggle
async fn toggle_purchased(
    State(state): State<AppState>,
    session: SessionUser,
    Path(item_id): Path<i64>,
) -> ApiResult<Json<ToggleResult>> {
    let purchased = PantryService::toggle_purchased(&state.db, session.user_id, item_id).await?;
    Ok(Json(ToggleResult { purchased }))
}
