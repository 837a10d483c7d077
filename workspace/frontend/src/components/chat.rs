mod view;

pub use view::ChatPage;
