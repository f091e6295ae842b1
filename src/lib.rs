pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{RecommendError, Result};
pub use models::{DietRecommendation, FoodItem, MealResult, MealSlot, SelectedFood, UserProfile};
pub use planner::{DietPlanner, PlannerConfig};
