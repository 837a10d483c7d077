mod funds;
mod hero;
mod missions;
mod runway;
mod view;

pub use view::Dashboard;
