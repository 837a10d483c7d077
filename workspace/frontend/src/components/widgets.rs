pub mod ai_insight_card;
pub mod badge;
pub mod card;
pub mod floating_chat;
pub mod fuel_gauge;
pub mod transcript;

pub use ai_insight_card::AiInsightCard;
pub use badge::{Badge, BadgeVariant};
pub use card::{Card, CardVariant};
pub use floating_chat::{ChatPanelContext, ChatPanelProvider, FloatingChat};
pub use fuel_gauge::FuelGauge;
