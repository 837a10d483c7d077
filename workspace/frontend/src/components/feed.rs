mod expense_modal;
mod receipt_modal;
mod transaction_row;
mod view;

pub use view::Feed;
