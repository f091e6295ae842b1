use std::collections::BTreeMap;

use crate::models::{DietRecommendation, MealResult, MealSlot, SelectedFood, UserInfo};
use crate::planner::classifier::FoodGroup;

fn food_line(label: &str, food: &SelectedFood) -> String {
    format!(
        "  {:<10} {} - {:.2}g | {:.2} kcal (C:{:.2} P:{:.2} F:{:.2})",
        label, food.food_name, food.portion_percent, food.calories, food.carb, food.protein, food.fat
    )
}

/// Render one slot as display lines.
pub fn meal_lines(slot: MealSlot, meal: &MealResult) -> Vec<String> {
    let mut lines = vec![format!("[{}]", slot)];
    match meal {
        MealResult::Single(food) => lines.push(food_line(slot.name(), food)),
        MealResult::Brunch { brunch } => lines.push(food_line("brunch", brunch)),
        MealResult::Composite {
            rice,
            main_dish,
            side_dish,
        } => {
            lines.push(food_line("rice", rice));
            lines.push(food_line("main_dish", main_dish));
            lines.push(food_line("side_dish", side_dish));
        }
        MealResult::Unavailable { message } => lines.push(format!("  {}", message)),
    }
    lines
}

/// Display the user-info echo.
pub fn display_user_info(info: &UserInfo) {
    println!();
    println!("=== Targets ===");
    println!("Goal: {}", info.goal_type);
    println!("BMI: {:.2} ({})", info.bmi, info.bmi_status);
    println!("Energy budget: {:.2} kcal", info.target_amr);
    println!(
        "Carbs: {:.2}g  Protein: {:.2}g  Fat: {:.2}g",
        info.carb_target, info.protein_target, info.fat_target
    );
    println!();
}

/// Display a recommendation, optionally restricted to one slot.
pub fn display_recommendation(recommendation: &DietRecommendation, only: Option<MealSlot>) {
    display_user_info(&recommendation.user_info);

    println!("=== Recommended Meals ===");
    println!();

    let diet = &recommendation.recommended_diet;
    for (slot, meal) in diet.iter() {
        if only.is_some_and(|s| s != slot) {
            continue;
        }
        for line in meal_lines(slot, meal) {
            println!("{}", line);
        }
    }

    if only.is_none() {
        println!();
        println!("--- Summary ---");
        println!("Total foods: {}", diet.food_names().len());
        println!("Total calories: {:.0}", diet.total_calories());
    }
    println!();
}

/// Display the number of catalog items per group.
pub fn display_group_counts(counts: &BTreeMap<FoodGroup, usize>, total: usize) {
    println!();
    println!("=== Catalog ({} items) ===", total);
    println!();
    for group in FoodGroup::ALL {
        let count = counts.get(&group).copied().unwrap_or(0);
        println!("  {:<8} {:>6}", group.label(), count);
    }
    println!();
}
