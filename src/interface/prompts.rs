use dialoguer::{Confirm, Input, Select};

use crate::error::{RecommendError, Result};
use crate::models::UserProfile;
use crate::planner::targets::GoalType;

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| RecommendError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(RecommendError::InvalidInput(format!(
            "Expected a non-negative number, got {}",
            value
        )));
    }

    Ok(value)
}

/// Prompt for a gender label.
pub fn prompt_gender() -> Result<String> {
    let options = ["Male", "Female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for an activity level from 1 (sedentary) to 4 (very active).
pub fn prompt_activity_level() -> Result<u8> {
    let options = [
        "1 (almost no activity)",
        "2 (light activity)",
        "3 (moderate activity)",
        "4 (very active)",
    ];
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;
    Ok(selection as u8 + 1)
}

/// Prompt for a goal label, offering the closest known goal for typos.
pub fn prompt_goal() -> Result<GoalType> {
    loop {
        let input: String = Input::new()
            .with_prompt("Goal (저지방 고단백 / 균형 식단 / 벌크업, or low-fat-high-protein / balanced / bulk)")
            .default(GoalType::Balanced.label().to_string())
            .interact_text()?;

        match input.parse::<GoalType>() {
            Ok(goal) => return Ok(goal),
            Err(RecommendError::InvalidGoal {
                suggestion: Some(label),
                ..
            }) => {
                let accept = prompt_yes_no(&format!("Did you mean '{}'?", label), true)?;
                if accept {
                    return label.parse();
                }
            }
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full user profile.
///
/// BMI and the target active metabolic rate come from the profile service
/// and are entered as-is.
pub fn collect_profile() -> Result<UserProfile> {
    let current_weight = prompt_number("Current weight (kg)", "70")?;
    let target_weight = prompt_number("Target weight (kg)", "65")?;
    let height = prompt_number("Height (cm)", "170")?;
    let age = prompt_number("Age", "30")?.round() as u32;
    let gender = prompt_gender()?;
    let activity_level = prompt_activity_level()?;
    let goal = prompt_goal()?;
    let target_active_metabolic_rate =
        prompt_number("Target active metabolic rate (kcal/day)", "2000")?;
    let bmi = prompt_number("BMI", "22")?;

    Ok(UserProfile {
        current_weight,
        target_weight,
        height,
        age,
        gender,
        activity_level,
        goal_type: goal.label().to_string(),
        target_active_metabolic_rate,
        bmi,
    })
}
