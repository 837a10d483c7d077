mod clipboard;
mod perk_card;
mod sidebars;
mod view;

pub use view::Perks;
