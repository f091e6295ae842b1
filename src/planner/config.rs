use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RecommendError, Result};
use crate::planner::allocation::MealRatios;
use crate::planner::classifier::FoodGroup;
use crate::planner::constants::*;
use crate::planner::targets::NutrientTargets;

/// Part of a standard rice + main dish + side dish meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealComponent {
    Rice,
    MainDish,
    SideDish,
}

impl MealComponent {
    pub const ALL: [MealComponent; 3] = [
        MealComponent::Rice,
        MealComponent::MainDish,
        MealComponent::SideDish,
    ];

    /// Food group the component's candidates are drawn from.
    pub fn group(&self) -> FoodGroup {
        match self {
            MealComponent::Rice => FoodGroup::Rice,
            MealComponent::MainDish => FoodGroup::Soup,
            MealComponent::SideDish => FoodGroup::SideDish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MealComponent::Rice => "rice",
            MealComponent::MainDish => "main_dish",
            MealComponent::SideDish => "side_dish",
        }
    }
}

/// Share of a slot target handed to one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentShare {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
}

impl ComponentShare {
    const fn from_tuple(share: (f64, f64, f64, f64)) -> Self {
        Self {
            carb: share.0,
            protein: share.1,
            fat: share.2,
            calories: share.3,
        }
    }

    /// Sub-target for this component within a slot.
    pub fn apply(&self, slot: &NutrientTargets) -> NutrientTargets {
        slot.weighted(self.carb, self.protein, self.fat, self.calories)
    }

    fn values(&self) -> [f64; 4] {
        [self.carb, self.protein, self.fat, self.calories]
    }
}

/// Component shares of a standard meal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentShares {
    pub rice: ComponentShare,
    pub main_dish: ComponentShare,
    pub side_dish: ComponentShare,
}

impl Default for ComponentShares {
    fn default() -> Self {
        Self {
            rice: ComponentShare::from_tuple(RICE_SHARE),
            main_dish: ComponentShare::from_tuple(MAIN_DISH_SHARE),
            side_dish: ComponentShare::from_tuple(SIDE_DISH_SHARE),
        }
    }
}

impl ComponentShares {
    pub fn get(&self, component: MealComponent) -> &ComponentShare {
        match component {
            MealComponent::Rice => &self.rice,
            MealComponent::MainDish => &self.main_dish,
            MealComponent::SideDish => &self.side_dish,
        }
    }
}

/// Tunable planner settings.
///
/// Every field falls back to the values in [`crate::planner::constants`],
/// so a config file may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub meal_ratios: MealRatios,
    pub top_k: usize,
    pub brunch_probability: f64,
    pub components: ComponentShares,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            meal_ratios: MealRatios::default(),
            top_k: TOP_K,
            brunch_probability: BRUNCH_PROBABILITY,
            components: ComponentShares::default(),
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(RecommendError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.brunch_probability) {
            return Err(RecommendError::InvalidInput(format!(
                "brunch_probability must be within [0, 1], got {}",
                self.brunch_probability
            )));
        }

        let ratios = [
            self.meal_ratios.breakfast,
            self.meal_ratios.lunch,
            self.meal_ratios.snack,
            self.meal_ratios.dinner,
        ];
        let shares = MealComponent::ALL
            .iter()
            .flat_map(|c| self.components.get(*c).values());

        if ratios
            .into_iter()
            .chain(shares)
            .any(|v| !v.is_finite() || v < 0.0)
        {
            return Err(RecommendError::InvalidInput(
                "meal ratios and component shares must be non-negative".to_string(),
            ));
        }

        // A zero calorie share leaves nothing to size a portion against.
        if ratios.into_iter().any(|v| v <= 0.0) {
            return Err(RecommendError::InvalidInput(
                "every meal ratio must be positive".to_string(),
            ));
        }
        if let Some(component) = MealComponent::ALL
            .into_iter()
            .find(|c| self.components.get(*c).calories <= 0.0)
        {
            return Err(RecommendError::InvalidInput(format!(
                "{} calorie share must be positive",
                component.name()
            )));
        }

        let total = self.meal_ratios.total();
        if (total - 1.0).abs() > RATIO_SUM_TOLERANCE {
            warn!(total, "meal ratios do not sum to 1");
        }

        Ok(())
    }
}

/// Load and validate a planner config from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
