use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::error::{RecommendError, Result};
use crate::planner::constants::*;

/// Minimum similarity before an unknown goal label gets a suggestion.
const GOAL_SUGGESTION_THRESHOLD: f64 = 0.7;

/// Named macro-ratio preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalType {
    LowFatHighProtein,
    Balanced,
    Bulk,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [GoalType::LowFatHighProtein, GoalType::Balanced, GoalType::Bulk];

    /// Canonical label as stored in user profiles.
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::LowFatHighProtein => "저지방 고단백",
            GoalType::Balanced => "균형 식단",
            GoalType::Bulk => "벌크업",
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            GoalType::LowFatHighProtein => "low-fat-high-protein",
            GoalType::Balanced => "balanced",
            GoalType::Bulk => "bulk",
        }
    }

    pub fn profile(&self) -> GoalProfile {
        match self {
            GoalType::LowFatHighProtein => LOW_FAT_HIGH_PROTEIN_PROFILE,
            GoalType::Balanced => BALANCED_PROFILE,
            GoalType::Bulk => BULK_PROFILE,
        }
    }

    /// Closest known label for an unrecognised input.
    pub fn suggest(input: &str) -> Option<&'static str> {
        let input = input.trim().to_lowercase();
        GoalType::ALL
            .iter()
            .flat_map(|g| [g.label(), g.alias()])
            .map(|label| (label, jaro_winkler(label, &input)))
            .filter(|(_, score)| *score >= GOAL_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label)
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalType {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        GoalType::ALL
            .into_iter()
            .find(|g| g.label() == trimmed || g.alias().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RecommendError::InvalidGoal {
                label: s.to_string(),
                suggestion: GoalType::suggest(s),
            })
    }
}

/// Share of the energy budget given to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProfile {
    pub carb_ratio: f64,
    pub protein_ratio: f64,
    pub fat_ratio: f64,
}

impl GoalProfile {
    pub const fn new(carb_ratio: f64, protein_ratio: f64, fat_ratio: f64) -> Self {
        Self {
            carb_ratio,
            protein_ratio,
            fat_ratio,
        }
    }
}

/// Energy budget (kcal/day) that has been through the BMI correction.
///
/// Only constructible through [`EnergyBudget::adjusted_for_bmi`] or
/// [`EnergyBudget::preadjusted`], so the correction is applied exactly once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EnergyBudget(f64);

impl EnergyBudget {
    /// Apply the BMI multiplier to a raw active metabolic rate.
    pub fn adjusted_for_bmi(active_metabolic_rate: f64, bmi: f64) -> Result<Self> {
        ensure_positive("active metabolic rate", active_metabolic_rate)?;
        ensure_positive("BMI", bmi)?;
        Ok(Self(active_metabolic_rate * bmi_factor(bmi)))
    }

    /// Wrap a figure that was already corrected upstream.
    pub fn preadjusted(kcal: f64) -> Result<Self> {
        ensure_positive("energy budget", kcal)?;
        Ok(Self(kcal))
    }

    pub fn kcal(&self) -> f64 {
        self.0
    }
}

/// BMI multiplier for the energy budget.
pub fn bmi_factor(bmi: f64) -> f64 {
    if bmi < BMI_UNDERWEIGHT_UPPER {
        BMI_UNDERWEIGHT_FACTOR
    } else if bmi < BMI_NORMAL_UPPER {
        BMI_NORMAL_FACTOR
    } else {
        BMI_OVER_FACTOR
    }
}

fn ensure_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RecommendError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            what, value
        )))
    }
}

/// Calorie and macro gram targets for a day, a slot, or a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTargets {
    pub calorie_target: f64,
    pub carb_target: f64,
    pub protein_target: f64,
    pub fat_target: f64,
}

impl NutrientTargets {
    /// All four targets multiplied by the same ratio.
    pub fn scaled(&self, ratio: f64) -> Self {
        self.weighted(ratio, ratio, ratio, ratio)
    }

    /// Each target multiplied by its own share.
    pub fn weighted(&self, carb: f64, protein: f64, fat: f64, calories: f64) -> Self {
        Self {
            calorie_target: self.calorie_target * calories,
            carb_target: self.carb_target * carb,
            protein_target: self.protein_target * protein,
            fat_target: self.fat_target * fat,
        }
    }
}

/// Convert an energy budget and goal label into daily gram targets.
pub fn compute_targets(budget: EnergyBudget, goal_label: &str) -> Result<NutrientTargets> {
    let goal: GoalType = goal_label.parse()?;
    Ok(targets_for_goal(budget, goal))
}

/// Gram targets for an already-parsed goal.
pub fn targets_for_goal(budget: EnergyBudget, goal: GoalType) -> NutrientTargets {
    let ratios = goal.profile();
    let kcal = budget.kcal();
    NutrientTargets {
        calorie_target: kcal,
        carb_target: kcal * ratios.carb_ratio / KCAL_PER_GRAM_CARB,
        protein_target: kcal * ratios.protein_ratio / KCAL_PER_GRAM_PROTEIN,
        fat_target: kcal * ratios.fat_ratio / KCAL_PER_GRAM_FAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_parse_labels_and_aliases() {
        assert_eq!("균형 식단".parse::<GoalType>().unwrap(), GoalType::Balanced);
        assert_eq!("balanced".parse::<GoalType>().unwrap(), GoalType::Balanced);
        assert_eq!("BULK".parse::<GoalType>().unwrap(), GoalType::Bulk);
        assert_eq!(
            " 저지방 고단백 ".parse::<GoalType>().unwrap(),
            GoalType::LowFatHighProtein
        );
    }

    #[test]
    fn test_unknown_goal_is_error() {
        let err = "invalid".parse::<GoalType>().unwrap_err();
        assert!(matches!(err, RecommendError::InvalidGoal { ref label, .. } if label == "invalid"));
    }

    #[test]
    fn test_unknown_goal_suggestion() {
        assert_eq!(GoalType::suggest("balancd"), Some("balanced"));
        assert_eq!(GoalType::suggest("zzzzzz"), None);
    }

    #[test]
    fn test_goal_ratio_table() {
        assert_eq!(GoalType::LowFatHighProtein.profile(), GoalProfile::new(0.4, 0.4, 0.2));
        assert_eq!(GoalType::Balanced.profile(), GoalProfile::new(0.5, 0.3, 0.2));
        assert_eq!(GoalType::Bulk.profile(), GoalProfile::new(0.6, 0.3, 0.1));
    }

    #[test]
    fn test_every_goal_has_ratios() {
        for goal in GoalType::ALL {
            let p = goal.profile();
            assert!((p.carb_ratio + p.protein_ratio + p.fat_ratio - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bmi_factor_thresholds() {
        assert_eq!(bmi_factor(17.0), 1.1);
        assert_eq!(bmi_factor(18.5), 1.0);
        assert_eq!(bmi_factor(22.9), 1.0);
        assert_eq!(bmi_factor(23.0), 0.9);
        assert_eq!(bmi_factor(31.0), 0.9);
    }

    #[test]
    fn test_adjusted_budget() {
        let low = EnergyBudget::adjusted_for_bmi(2000.0, 17.0).unwrap();
        assert!((low.kcal() - 2200.0).abs() < 1e-9);

        let high = EnergyBudget::adjusted_for_bmi(2000.0, 27.0).unwrap();
        assert!((high.kcal() - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_rejects_bad_numbers() {
        assert!(EnergyBudget::preadjusted(-1.0).is_err());
        assert!(EnergyBudget::preadjusted(0.0).is_err());
        assert!(EnergyBudget::adjusted_for_bmi(0.0, 21.0).is_err());
        assert!(EnergyBudget::preadjusted(f64::NAN).is_err());
        assert!(EnergyBudget::adjusted_for_bmi(2000.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_scaled_targets() {
        let daily = NutrientTargets {
            calorie_target: 2000.0,
            carb_target: 250.0,
            protein_target: 150.0,
            fat_target: 40.0,
        };
        let half = daily.scaled(0.5);
        assert!((half.calorie_target - 1000.0).abs() < 1e-9);
        assert!((half.fat_target - 20.0).abs() < 1e-9);

        let rice = daily.weighted(0.5, 0.5, 0.0, 0.5);
        assert_eq!(rice.fat_target, 0.0);
        assert!((rice.carb_target - 125.0).abs() < 1e-9);
    }
}
