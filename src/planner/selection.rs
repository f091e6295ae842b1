use rand::Rng;
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::models::{FoodItem, SelectedFood};
use crate::planner::constants::ROUNDING_DECIMALS;
use crate::planner::targets::NutrientTargets;

/// Candidate paired with its distance from the target.
///
/// Scores live here for the duration of one selection call; catalog items
/// are never written to.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub item: &'a FoodItem,
    pub score: f64,
}

/// Sum of absolute per-100g deviations from the macro targets.
///
/// Lower is better. Not normalised and not weighted.
pub fn distance_score(item: &FoodItem, target: &NutrientTargets) -> f64 {
    (item.carbs - target.carb_target).abs()
        + (item.protein - target.protein_target).abs()
        + (item.fat - target.fat_target).abs()
}

/// Score every candidate and sort ascending by score.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank_candidates<'a>(
    candidates: &[&'a FoodItem],
    target: &NutrientTargets,
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|item| ScoredCandidate {
            item,
            score: distance_score(item, target),
        })
        .collect();

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Size a portion of `item` that supplies `calorie_budget` kcal.
///
/// Fails with [`RecommendError::DivisionByZero`] when the item has no
/// positive calorie value, and with [`RecommendError::InvalidInput`] when
/// the budget is not positive. Portions above 100 are not clamped.
pub fn size_portion(item: &FoodItem, calorie_budget: f64) -> Result<SelectedFood> {
    if !(calorie_budget.is_finite() && calorie_budget > 0.0) {
        return Err(RecommendError::InvalidInput(format!(
            "calorie budget must be positive, got {}",
            calorie_budget
        )));
    }
    if !item.has_positive_calories() {
        return Err(RecommendError::DivisionByZero(item.name.clone()));
    }

    let portion = (calorie_budget / item.calories) * 100.0;
    let scale = portion / 100.0;

    Ok(SelectedFood {
        food_name: item.name.clone(),
        portion_percent: round_to(portion, ROUNDING_DECIMALS),
        carb: round_to(item.carbs * scale, ROUNDING_DECIMALS),
        protein: round_to(item.protein * scale, ROUNDING_DECIMALS),
        fat: round_to(item.fat * scale, ROUNDING_DECIMALS),
        calories: round_to(item.calories * scale, ROUNDING_DECIMALS),
    })
}

/// Choose one food that best matches `target` and size its portion.
///
/// The `top_k` closest candidates form a pool and one is drawn uniformly
/// from it with `rng`. A drawn item without positive calories is dropped,
/// the next-ranked candidate takes its place, and the draw repeats. Fails
/// only once every candidate has been rejected.
pub fn select_food<R: Rng + ?Sized>(
    candidates: &[&FoodItem],
    target: &NutrientTargets,
    top_k: usize,
    rng: &mut R,
) -> Result<SelectedFood> {
    if candidates.is_empty() {
        return Err(RecommendError::EmptyCandidateSet);
    }

    let mut ranked = rank_candidates(candidates, target).into_iter();
    let mut pool: Vec<ScoredCandidate> = ranked.by_ref().take(top_k.max(1)).collect();

    let mut last_rejected = String::new();
    while !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let chosen = pool[idx];

        match size_portion(chosen.item, target.calorie_target) {
            Ok(selected) => {
                debug!(
                    food = %chosen.item.name,
                    score = chosen.score,
                    portion = selected.portion_percent,
                    "selected food"
                );
                return Ok(selected);
            }
            Err(RecommendError::DivisionByZero(name)) => {
                debug!(food = %name, "rejected candidate without positive calories");
                pool.remove(idx);
                pool.extend(ranked.next());
                last_rejected = name;
            }
            Err(e) => return Err(e),
        }
    }

    Err(RecommendError::DivisionByZero(last_rejected))
}
