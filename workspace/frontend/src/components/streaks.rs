mod milestone_list;
mod mission_list;
mod reward_list;
mod view;

pub use view::Streaks;
