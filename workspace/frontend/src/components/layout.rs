pub mod bottom_nav;
pub mod layout;
pub mod sidebar;
pub mod top_bar;
