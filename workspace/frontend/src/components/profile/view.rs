use stash_common::feed::local_day;
use stash_common::format::{capitalize, short_date};
use stash_common::ProfileData;
use yew::prelude::*;
use yew_router::prelude::*;

use super::rows::{InfoRow, StatRow, StatTile};
use crate::api_client::profile;
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::{AiInsightCard, Card, CardVariant};

/// `"Sep 2024"`, or the raw value when it is not a date.
fn joined_label(raw: &str) -> String {
    local_day(raw)
        .map(|day| day.format("%b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn on_off(value: bool, on: &str, off: &str) -> String {
    (if value { on } else { off }).to_string()
}

#[function_component(Profile)]
pub fn profile_page() -> Html {
    let (state, refetch) = use_fetch(profile::get_profile);
    let navigator = use_navigator();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let body = render_fetch(&state, 6, Some(refetch), |data| html! { <ProfileBody data={data.clone()} /> });

    html! {
        <div class="max-w-2xl mx-auto flex flex-col gap-5 pb-8">
            <div class="md:hidden">
                <button class="btn btn-sm btn-ghost gap-1.5" onclick={on_back}>
                    <i class="fas fa-arrow-left"></i>{"Back"}
                </button>
            </div>
            <AiInsightCard feature="profile" />
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileBodyProps {
    data: ProfileData,
}

#[function_component(ProfileBody)]
fn profile_body(props: &ProfileBodyProps) -> Html {
    let data = &props.data;
    let stats = &data.stats;
    let prefs = &data.preferences;

    html! {
        <>
            <Card variant={CardVariant::Gradient} hover={false}>
                <div class="flex flex-col items-center text-center sm:flex-row sm:text-left sm:items-start gap-5">
                    <div class="w-20 h-20 sm:w-24 sm:h-24 rounded-2xl bg-gradient-to-br from-primary to-accent flex items-center justify-center text-2xl sm:text-3xl font-bold text-primary-content shrink-0">
                        {&data.initials}
                    </div>
                    <div class="flex-1 min-w-0 space-y-2">
                        <div>
                            <h1 class="text-xl sm:text-2xl font-bold truncate">{&data.name}</h1>
                            <p class="text-sm opacity-60 mt-0.5">{&data.bio}</p>
                        </div>
                        <div class="flex flex-wrap gap-2 justify-center sm:justify-start">
                            <span class="badge badge-primary badge-outline gap-1"><i class="fas fa-graduation-cap text-[10px]"></i>{&data.course}</span>
                            <span class="badge badge-accent badge-outline gap-1"><i class="fas fa-location-dot text-[10px]"></i>{&data.location}</span>
                            <span class="badge badge-warning badge-outline gap-1"><i class="fas fa-calendar text-[10px]"></i>{format!("Since {}", joined_label(&data.joined_date))}</span>
                        </div>
                    </div>
                </div>
            </Card>

            <div class="grid grid-cols-2 sm:grid-cols-4 gap-3">
                <StatTile icon="fas fa-wallet" label="Balance" value={format!("€{}", data.balance.normalize())} tone="primary" />
                <StatTile icon="fas fa-arrow-trend-up" label="Saved" value={format!("€{}", stats.total_saved.normalize())} tone="success" />
                <StatTile icon="fas fa-fire" label="Streak" value={format!("{}d", data.current_streak)} tone="warning" />
                <StatTile icon="fas fa-trophy" label="Hit Rate" value={format!("{}%", stats.budget_hit_rate)} tone="accent" />
            </div>

            <Card hover={false}>
                <h2 class="text-sm font-semibold mb-4 flex items-center gap-2">
                    <i class="fas fa-chart-column text-primary"></i>{"Statistics"}
                </h2>
                <StatRow label="Avg. Daily Spend" value={format!("€{}", stats.avg_daily_spend.normalize())} />
                <StatRow label="Monthly Budget" value={format!("€{}", data.monthly_budget.normalize())} />
                <StatRow label="Safe to Spend" value={format!("€{}", data.safe_to_spend.normalize())} />
                <StatRow label="Total Transactions" value={stats.transaction_count.to_string()} />
                <StatRow label="Top Category" value={stats.top_category.clone()} />
                <StatRow label="Longest Streak" value={format!("{} days", stats.longest_streak)} />
            </Card>

            <Card hover={false}>
                <h2 class="text-sm font-semibold mb-4 flex items-center gap-2">
                    <i class="fas fa-trophy text-accent"></i>{"Achievements"}
                </h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-2.5">
                    { for data.achievements.iter().map(|a| html! {
                        <div key={a.id.clone()} class="flex items-center gap-2.5 p-3 rounded-xl bg-base-200 border border-base-300">
                            <span class="text-xl">{&a.emoji}</span>
                            <div class="min-w-0">
                                <p class="text-xs font-medium truncate">{&a.label}</p>
                                <p class="text-[10px] opacity-60">{local_day(&a.date).map(short_date).unwrap_or_default()}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </Card>

            <Card hover={false}>
                <h2 class="text-sm font-semibold mb-4 flex items-center gap-2">
                    <i class="fas fa-shield-halved text-info"></i>{"Account Details"}
                </h2>
                <InfoRow icon="fas fa-envelope" label="Email" value={data.email.clone()} />
                <InfoRow icon="fas fa-phone" label="Phone" value={data.phone.clone()} />
                <InfoRow icon="fas fa-graduation-cap" label="University" value={data.university.clone()} />
                <InfoRow icon="fas fa-id-card" label="Student ID" value={data.student_id.clone()} />
                <InfoRow icon="fas fa-location-dot" label="Location" value={data.location.clone()} />
            </Card>

            <Card hover={false}>
                <h2 class="text-sm font-semibold mb-4 flex items-center gap-2">
                    <i class="fas fa-gear opacity-70"></i>{"Preferences"}
                </h2>
                <InfoRow chip={true} icon="fas fa-bell" label="Notifications" value={on_off(prefs.notifications, "On", "Off")} />
                <InfoRow chip={true} icon="fas fa-file-lines" label="Weekly Report" value={on_off(prefs.weekly_report, "Enabled", "Disabled")} />
                <InfoRow chip={true} icon="fas fa-bolt" label="AI Roast Level" value={capitalize(&prefs.roast_level)} />
                <InfoRow chip={true} icon="fas fa-wallet" label="Display Currency" value={prefs.currency.clone()} />
            </Card>

            <div class="space-y-2">
                <button class="w-full flex items-center justify-between p-4 rounded-2xl bg-base-100 border border-base-300 hover:border-primary/30">
                    <span class="flex items-center gap-3 text-sm font-medium"><i class="fas fa-gear opacity-70"></i>{"Edit Profile"}</span>
                    <i class="fas fa-chevron-right opacity-40"></i>
                </button>
                <button class="w-full flex items-center justify-between p-4 rounded-2xl bg-base-100 border border-base-300 hover:border-error/30">
                    <span class="flex items-center gap-3 text-sm font-medium text-error"><i class="fas fa-right-from-bracket"></i>{"Sign Out"}</span>
                    <i class="fas fa-chevron-right opacity-40"></i>
                </button>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_label() {
        assert_eq!(joined_label("2024-09-01"), "Sep 2024");
        assert_eq!(joined_label("2024-09-01T10:00:00"), "Sep 2024");
        assert_eq!(joined_label("last autumn"), "last autumn");
    }

    #[test]
    fn test_on_off() {
        assert_eq!(on_off(true, "On", "Off"), "On");
        assert_eq!(on_off(false, "Enabled", "Disabled"), "Disabled");
    }
}
