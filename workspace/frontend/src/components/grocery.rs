mod basket_summary;
mod item_card;
mod view;

pub use view::Grocery;
