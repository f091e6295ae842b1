use crate::planner::targets::GoalProfile;

/// kcal per gram of carbohydrate and of protein.
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI correction of the energy budget
// ─────────────────────────────────────────────────────────────────────────────

/// Below this BMI the budget is raised.
pub const BMI_UNDERWEIGHT_UPPER: f64 = 18.5;

/// At or above this BMI the budget is lowered.
pub const BMI_NORMAL_UPPER: f64 = 23.0;

/// Upper bound of the overweight class (status label only).
pub const BMI_OVERWEIGHT_UPPER: f64 = 25.0;

pub const BMI_UNDERWEIGHT_FACTOR: f64 = 1.1;
pub const BMI_NORMAL_FACTOR: f64 = 1.0;
pub const BMI_OVER_FACTOR: f64 = 0.9;

// ─────────────────────────────────────────────────────────────────────────────
// Meal allocation
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the daily targets given to each slot.
pub const BREAKFAST_RATIO: f64 = 0.20;
pub const LUNCH_RATIO: f64 = 0.35;
pub const SNACK_RATIO: f64 = 0.15;
pub const DINNER_RATIO: f64 = 0.30;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Meal ratios further than this from summing to 1 are logged.
pub const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Number of best-scoring candidates the random pick draws from.
pub const TOP_K: usize = 10;

/// Chance that lunch tries a brunch-group food first.
pub const BRUNCH_PROBABILITY: f64 = 0.5;

/// Decimal places kept in portions and scaled nutrients.
pub const ROUNDING_DECIMALS: i32 = 2;

// Standard-meal component shares of the slot target, as
// (carb, protein, fat, calories).
pub const RICE_SHARE: (f64, f64, f64, f64) = (0.5, 0.5, 0.0, 0.5);
pub const MAIN_DISH_SHARE: (f64, f64, f64, f64) = (0.0, 0.4, 0.4, 0.4);
pub const SIDE_DISH_SHARE: (f64, f64, f64, f64) = (0.1, 0.1, 0.1, 0.1);

// ─────────────────────────────────────────────────────────────────────────────
// Sentinel messages
// ─────────────────────────────────────────────────────────────────────────────

pub const NO_SNACK_MESSAGE: &str = "no suitable snack found";

/// Sentinel for a slot other than snack.
pub fn no_food_message(slot: &str) -> String {
    format!("no suitable food found for {}", slot)
}

// ─────────────────────────────────────────────────────────────────────────────
// Goal macro ratios (carb, protein, fat share of the energy budget)
// ─────────────────────────────────────────────────────────────────────────────

pub const LOW_FAT_HIGH_PROTEIN_PROFILE: GoalProfile = GoalProfile::new(0.4, 0.4, 0.2);
pub const BALANCED_PROFILE: GoalProfile = GoalProfile::new(0.5, 0.3, 0.2);
pub const BULK_PROFILE: GoalProfile = GoalProfile::new(0.6, 0.3, 0.1);
