pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, collect_targets, prompt_activity_level, prompt_goal, prompt_sex};
pub use render::{display_diet_options, display_food_list, display_plan, display_targets};
