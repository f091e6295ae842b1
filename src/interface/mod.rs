pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_gender, prompt_goal, prompt_yes_no,
};
pub use render::{display_group_counts, display_recommendation, display_user_info, meal_lines};
