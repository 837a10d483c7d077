mod listing_card;
mod view;

pub use view::Market;
