pub mod allocation;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod diet;
pub mod selection;
pub mod targets;

pub use allocation::{MealRatios, MealTargets, allocate};
pub use classifier::{FoodGroup, classify, classify_item};
pub use config::{ComponentShare, ComponentShares, MealComponent, PlannerConfig, load_config};
pub use constants::*;
pub use diet::{DietPlanner, PlanRun, PlanStage, profile_targets};
pub use selection::{ScoredCandidate, distance_score, rank_candidates, round_to, select_food, size_portion};
pub use targets::{
    EnergyBudget, GoalProfile, GoalType, NutrientTargets, bmi_factor, compute_targets,
    targets_for_goal,
};
