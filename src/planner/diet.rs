use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::FoodCatalog;
use crate::error::{RecommendError, Result};
use crate::models::{
    BmiStatus, DietRecommendation, FoodItem, MealResult, MealSlot, RecommendedDiet, SelectedFood,
    UserInfo, UserProfile,
};
use crate::planner::allocation::{MealTargets, allocate};
use crate::planner::classifier::FoodGroup;
use crate::planner::config::{MealComponent, PlannerConfig};
use crate::planner::constants::{NO_SNACK_MESSAGE, ROUNDING_DECIMALS, no_food_message};
use crate::planner::selection::{round_to, select_food};
use crate::planner::targets::{EnergyBudget, NutrientTargets, compute_targets};

/// Where a planning run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStage {
    Init,
    AllocatingMeals,
    Slot(MealSlot),
    Done,
}

/// Targets a profile is planned against, plus the user-info echo.
///
/// Applies the BMI correction to the profile's metabolic rate exactly once.
pub fn profile_targets(profile: &UserProfile) -> Result<(UserInfo, NutrientTargets)> {
    let budget = EnergyBudget::adjusted_for_bmi(profile.target_active_metabolic_rate, profile.bmi)?;
    let daily = compute_targets(budget, &profile.goal_type)?;

    let info = UserInfo {
        current_weight: profile.current_weight,
        target_weight: profile.target_weight,
        height: profile.height,
        age: profile.age,
        gender: profile.gender.clone(),
        activity_level: profile.activity_level,
        goal_type: profile.goal_type.clone(),
        bmi: profile.bmi,
        bmi_status: BmiStatus::from_bmi(profile.bmi),
        target_amr: round_to(budget.kcal(), ROUNDING_DECIMALS),
        carb_target: round_to(daily.carb_target, ROUNDING_DECIMALS),
        protein_target: round_to(daily.protein_target, ROUNDING_DECIMALS),
        fat_target: round_to(daily.fat_target, ROUNDING_DECIMALS),
    };
    Ok((info, daily))
}

/// Builds day plans from one catalog snapshot.
///
/// Holds no per-request state, so one planner can serve concurrent
/// requests as long as each brings its own random source.
#[derive(Debug, Clone)]
pub struct DietPlanner {
    catalog: FoodCatalog,
    config: PlannerConfig,
}

impl DietPlanner {
    pub fn new(catalog: FoodCatalog, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn with_defaults(catalog: FoodCatalog) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a full day's plan for a user profile.
    ///
    /// Fails only for an unknown goal, bad profile numbers, or an empty
    /// catalog. Slots that cannot be filled come back as sentinels.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<DietRecommendation> {
        let (user_info, daily) = profile_targets(profile)?;
        let recommended_diet = self.plan_for_targets(&daily, rng)?;
        Ok(DietRecommendation {
            user_info,
            recommended_diet,
        })
    }

    /// Build a plan directly from daily targets.
    pub fn plan_for_targets<R: Rng + ?Sized>(
        &self,
        daily: &NutrientTargets,
        rng: &mut R,
    ) -> Result<RecommendedDiet> {
        if self.catalog.is_empty() {
            return Err(RecommendError::CatalogUnavailable(
                "catalog has no foods".to_string(),
            ));
        }

        let mut run = PlanRun::new(self, *daily);
        while run.step(rng) != PlanStage::Done {}
        run.finish()
    }
}

/// State of one planning request.
///
/// Owns the used-food set and the partial plan; discarded when the
/// request completes.
pub struct PlanRun<'a> {
    planner: &'a DietPlanner,
    daily: NutrientTargets,
    stage: PlanStage,
    meal_targets: MealTargets,
    used: HashSet<String>,
    breakfast: Option<MealResult>,
    lunch: Option<MealResult>,
    snack: Option<MealResult>,
    dinner: Option<MealResult>,
}

impl<'a> PlanRun<'a> {
    pub fn new(planner: &'a DietPlanner, daily: NutrientTargets) -> Self {
        Self {
            planner,
            daily,
            stage: PlanStage::Init,
            meal_targets: allocate(&daily, &planner.config.meal_ratios),
            used: HashSet::new(),
            breakfast: None,
            lunch: None,
            snack: None,
            dinner: None,
        }
    }

    pub fn stage(&self) -> PlanStage {
        self.stage
    }

    /// Names chosen so far in this run.
    pub fn used_foods(&self) -> &HashSet<String> {
        &self.used
    }

    /// Perform the work of the current stage and advance to the next.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PlanStage {
        self.stage = match self.stage {
            PlanStage::Init => PlanStage::AllocatingMeals,
            PlanStage::AllocatingMeals => {
                debug!(
                    calories = self.daily.calorie_target,
                    breakfast = self.meal_targets.breakfast.calorie_target,
                    lunch = self.meal_targets.lunch.calorie_target,
                    snack = self.meal_targets.snack.calorie_target,
                    dinner = self.meal_targets.dinner.calorie_target,
                    "allocated daily targets"
                );
                PlanStage::Slot(MealSlot::Breakfast)
            }
            PlanStage::Slot(slot) => {
                let result = self.plan_slot(slot, rng);
                self.store(slot, result);
                slot.next().map(PlanStage::Slot).unwrap_or(PlanStage::Done)
            }
            PlanStage::Done => PlanStage::Done,
        };
        self.stage
    }

    /// Assemble the finished plan.
    pub fn finish(self) -> Result<RecommendedDiet> {
        match (self.breakfast, self.lunch, self.snack, self.dinner) {
            (Some(breakfast), Some(lunch), Some(snack), Some(dinner)) => {
                let diet = RecommendedDiet {
                    breakfast,
                    lunch,
                    snack,
                    dinner,
                };
                info!(
                    foods = self.used.len(),
                    calories = diet.total_calories(),
                    "meal plan complete"
                );
                Ok(diet)
            }
            _ => Err(RecommendError::InvalidInput(
                "plan finished before every slot was planned".to_string(),
            )),
        }
    }

    fn store(&mut self, slot: MealSlot, result: MealResult) {
        let entry = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
        };
        *entry = Some(result);
    }

    fn plan_slot<R: Rng + ?Sized>(&mut self, slot: MealSlot, rng: &mut R) -> MealResult {
        let target = *self.meal_targets.get(slot);
        debug!(%slot, calories = target.calorie_target, "planning slot");

        match slot {
            MealSlot::Snack => self.plan_snack(&target, rng),
            MealSlot::Lunch => {
                if rng.gen_bool(self.planner.config.brunch_probability) {
                    if let Some(brunch) = self.try_brunch(&target, rng) {
                        return brunch;
                    }
                }
                self.plan_standard(slot, &target, rng)
            }
            MealSlot::Breakfast | MealSlot::Dinner => self.plan_standard(slot, &target, rng),
        }
    }

    fn plan_snack<R: Rng + ?Sized>(&mut self, target: &NutrientTargets, rng: &mut R) -> MealResult {
        let candidates = self.available(FoodGroup::Dessert);
        if candidates.is_empty() {
            warn!(slot = "snack", "no dessert candidates left");
            return MealResult::unavailable(NO_SNACK_MESSAGE);
        }

        match select_food(&candidates, target, self.planner.config.top_k, rng) {
            Ok(food) => {
                self.used.insert(food.food_name.clone());
                MealResult::Single(food)
            }
            Err(e) => {
                warn!(slot = "snack", error = %e, "snack selection failed");
                MealResult::unavailable(NO_SNACK_MESSAGE)
            }
        }
    }

    /// Brunch substitution for lunch. `None` falls through to the standard meal.
    fn try_brunch<R: Rng + ?Sized>(
        &mut self,
        target: &NutrientTargets,
        rng: &mut R,
    ) -> Option<MealResult> {
        let candidates = self.available(FoodGroup::Brunch);
        if candidates.is_empty() {
            debug!("no brunch candidates; using standard lunch");
            return None;
        }

        match select_food(&candidates, target, self.planner.config.top_k, rng) {
            Ok(food) => {
                self.used.insert(food.food_name.clone());
                Some(MealResult::Brunch { brunch: food })
            }
            Err(e) => {
                warn!(error = %e, "brunch selection failed; using standard lunch");
                None
            }
        }
    }

    fn plan_standard<R: Rng + ?Sized>(
        &mut self,
        slot: MealSlot,
        target: &NutrientTargets,
        rng: &mut R,
    ) -> MealResult {
        let missing = MealComponent::ALL
            .into_iter()
            .find(|c| self.available(c.group()).is_empty());
        if let Some(component) = missing {
            warn!(%slot, component = component.name(), "no candidates for meal component");
            return MealResult::unavailable(no_food_message(slot.name()));
        }

        match self.select_components(target, rng) {
            Ok([rice, main_dish, side_dish]) => {
                for food in [&rice, &main_dish, &side_dish] {
                    self.used.insert(food.food_name.clone());
                }
                MealResult::Composite {
                    rice,
                    main_dish,
                    side_dish,
                }
            }
            Err(e) => {
                warn!(%slot, error = %e, "meal selection failed");
                MealResult::unavailable(no_food_message(slot.name()))
            }
        }
    }

    /// Pick rice, main dish and side dish. Names picked earlier in the same
    /// meal are excluded from later components.
    fn select_components<R: Rng + ?Sized>(
        &self,
        target: &NutrientTargets,
        rng: &mut R,
    ) -> Result<[SelectedFood; 3]> {
        let config = &self.planner.config;
        let mut taken = self.used.clone();
        let mut picks = Vec::with_capacity(MealComponent::ALL.len());

        for component in MealComponent::ALL {
            let candidates: Vec<&FoodItem> = self
                .planner
                .catalog
                .available_in_group(component.group(), &taken);
            let sub_target = config.components.get(component).apply(target);
            let food = select_food(&candidates, &sub_target, config.top_k, rng)?;
            taken.insert(food.food_name.clone());
            picks.push(food);
        }

        let mut picks = picks.into_iter();
        match (picks.next(), picks.next(), picks.next()) {
            (Some(rice), Some(main_dish), Some(side_dish)) => Ok([rice, main_dish, side_dish]),
            _ => Err(RecommendError::EmptyCandidateSet),
        }
    }

    fn available(&self, group: FoodGroup) -> Vec<&'a FoodItem> {
        self.planner.catalog.available_in_group(group, &self.used)
    }
}
