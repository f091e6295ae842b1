use serde::{Deserialize, Serialize};

use crate::models::MealSlot;
use crate::planner::constants::*;
use crate::planner::targets::NutrientTargets;

/// Fraction of the daily targets assigned to each slot.
///
/// The four fractions need not sum to exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealRatios {
    pub breakfast: f64,
    pub lunch: f64,
    pub snack: f64,
    pub dinner: f64,
}

impl Default for MealRatios {
    fn default() -> Self {
        Self {
            breakfast: BREAKFAST_RATIO,
            lunch: LUNCH_RATIO,
            snack: SNACK_RATIO,
            dinner: DINNER_RATIO,
        }
    }
}

impl MealRatios {
    pub fn ratio(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Snack => self.snack,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn total(&self) -> f64 {
        MealSlot::ALL.iter().map(|s| self.ratio(*s)).sum()
    }
}

/// Per-slot targets for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealTargets {
    pub breakfast: NutrientTargets,
    pub lunch: NutrientTargets,
    pub snack: NutrientTargets,
    pub dinner: NutrientTargets,
}

impl MealTargets {
    pub fn get(&self, slot: MealSlot) -> &NutrientTargets {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Split daily targets across the four meal slots.
pub fn allocate(daily: &NutrientTargets, ratios: &MealRatios) -> MealTargets {
    MealTargets {
        breakfast: daily.scaled(ratios.breakfast),
        lunch: daily.scaled(ratios.lunch),
        snack: daily.scaled(ratios.snack),
        dinner: daily.scaled(ratios.dinner),
    }
}
