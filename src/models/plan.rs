use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::models::UserInfo;

/// One of the four daily eating occasions, in planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// The slot planned after this one, if any.
    pub fn next(&self) -> Option<MealSlot> {
        match self {
            MealSlot::Breakfast => Some(MealSlot::Lunch),
            MealSlot::Lunch => Some(MealSlot::Snack),
            MealSlot::Snack => Some(MealSlot::Dinner),
            MealSlot::Dinner => None,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealSlot {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecommendError::InvalidInput(format!("Unknown meal slot: {}", s)))
    }
}

/// A food chosen for a slot or component, scaled to its portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFood {
    pub food_name: String,

    /// Portion relative to the 100 g baseline (100 = one baseline unit).
    #[serde(rename = "portion")]
    pub portion_percent: f64,

    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
}

/// Result for a single meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MealResult {
    /// One food fills the slot (snack).
    Single(SelectedFood),

    /// Lunch replaced by a single brunch-group food.
    Brunch { brunch: SelectedFood },

    /// Standard rice + main dish + side dish meal.
    Composite {
        rice: SelectedFood,
        main_dish: SelectedFood,
        side_dish: SelectedFood,
    },

    /// No suitable food could be placed.
    Unavailable { message: String },
}

impl MealResult {
    pub fn unavailable(message: impl Into<String>) -> Self {
        MealResult::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, MealResult::Unavailable { .. })
    }

    /// Every food placed in this slot.
    pub fn foods(&self) -> Vec<&SelectedFood> {
        match self {
            MealResult::Single(food) => vec![food],
            MealResult::Brunch { brunch } => vec![brunch],
            MealResult::Composite {
                rice,
                main_dish,
                side_dish,
            } => vec![rice, main_dish, side_dish],
            MealResult::Unavailable { .. } => Vec::new(),
        }
    }

    /// Total calories across the slot's foods.
    pub fn total_calories(&self) -> f64 {
        self.foods().iter().map(|f| f.calories).sum()
    }
}

/// A full day's recommendation, one result per slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedDiet {
    pub breakfast: MealResult,
    pub lunch: MealResult,
    pub snack: MealResult,
    pub dinner: MealResult,
}

impl RecommendedDiet {
    pub fn get(&self, slot: MealSlot) -> &MealResult {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Slots paired with their results, in planning order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealResult)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Names of every food placed anywhere in the plan.
    pub fn food_names(&self) -> Vec<&str> {
        self.iter()
            .flat_map(|(_, meal)| meal.foods())
            .map(|f| f.food_name.as_str())
            .collect()
    }

    pub fn total_calories(&self) -> f64 {
        self.iter().map(|(_, meal)| meal.total_calories()).sum()
    }
}

/// Planner output: the targets used plus the day's meals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietRecommendation {
    pub user_info: UserInfo,
    pub recommended_diet: RecommendedDiet,
}

impl DietRecommendation {
    /// Result for a single meal time.
    pub fn meal(&self, slot: MealSlot) -> &MealResult {
        self.recommended_diet.get(slot)
    }
}
