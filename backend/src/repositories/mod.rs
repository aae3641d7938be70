//! Database repositories
//!
//! Provides data access layer for database operations. Repositories return
//! `sqlx::Result` so constraint failures keep their database error kind for
//! classification in the error layer.

pub mod diet;
pub mod pantry;
pub mod progress;
pub mod session;
pub mod user;
pub mod workout;

pub use diet::{
    DailyNutritionRecord, DietPlanRecord, DietRepository, MealLogRecord, MealPlanRecord,
};
pub use pantry::{
    FoodInventoryRepository, FoodRecord, ShoppingItemRecord, ShoppingListRepository,
};
pub use progress::{ProgressRecord, ProgressRepository};
pub use session::{SessionRecord, SessionRepository};
pub use user::{UserRecord, UserRepository};
pub use workout::{
    PrescribedExerciseRecord, WorkoutDayRecord, WorkoutHistoryRecord, WorkoutLogRecord,
    WorkoutPlanRecord, WorkoutRepository,
};
