pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_plan_csv, write_plan_csv};
pub use prompts::{collect_profile, parse_positive, prompt_yes_no};
pub use render::{display_plan, render_plan};
