pub mod report;
pub mod utils;

pub use report::{print_points, render_points_json, print_publish_report, print_story_ids, print_teams};
pub use utils::{format_id_list, mask_token, truncate};
