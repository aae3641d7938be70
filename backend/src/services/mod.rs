//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod diet;
pub mod pantry;
pub mod progress;
pub mod session;
pub mod user;
pub mod workout;

pub use diet::DietService;
pub use pantry::PantryService;
pub use progress::ProgressService;
pub use session::SessionService;
pub use user::UserService;
pub use workout::WorkoutService;
