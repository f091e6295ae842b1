pub mod food;
pub mod plan;
pub mod profile;

pub use food::FoodItem;
pub use plan::{DietRecommendation, MealResult, MealSlot, RecommendedDiet, SelectedFood};
pub use profile::{BmiStatus, UserInfo, UserProfile};
