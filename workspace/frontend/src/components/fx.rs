mod rate_chart;
mod view;

pub use view::FxAdvisor;
