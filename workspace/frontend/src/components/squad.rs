mod leaderboard;
mod member_card;
mod split_modal;
mod view;

pub use view::Squad;

/// How long squad action toasts stay up.
pub(crate) const TOAST_MS: u32 = 3000;
