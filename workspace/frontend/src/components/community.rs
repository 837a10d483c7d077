mod composer;
mod post_card;
mod view;

pub use view::Community;

/// Posts and comments are published under the demo user.
pub(crate) const AUTHOR: &str = "Jaya D.";
pub(crate) const AUTHOR_INITIALS: &str = "JD";
