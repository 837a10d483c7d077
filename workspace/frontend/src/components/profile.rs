mod rows;
mod view;

pub use view::Profile;
