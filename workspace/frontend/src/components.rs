pub mod chat;
pub mod community;
pub mod dashboard;
pub mod feed;
pub mod fx;
pub mod grocery;
pub mod layout;
pub mod market;
pub mod more;
pub mod perks;
pub mod profile;
pub mod rewards;
pub mod squad;
pub mod streaks;
pub mod widgets;
