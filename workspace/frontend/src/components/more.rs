use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::Card;
use crate::router::Route;

struct MoreLink {
    route: Route,
    icon: &'static str,
    label: &'static str,
    description: &'static str,
    tone: &'static str,
}

const LINKS: [MoreLink; 3] = [
    MoreLink {
        route: Route::Squad,
        icon: "fa-users",
        label: "Squad",
        description: "Split bills & track IOUs",
        tone: "text-primary",
    },
    MoreLink {
        route: Route::Perks,
        icon: "fa-gift",
        label: "Perks",
        description: "Student discounts & offers",
        tone: "text-accent",
    },
    MoreLink {
        route: Route::Market,
        icon: "fa-store",
        label: "Market",
        description: "Secondhand deals & barter",
        tone: "text-success",
    },
];

/// Entry point for the pages that do not fit in the bottom navigation.
#[function_component(MoreMenu)]
pub fn more_menu() -> Html {
    html! {
        <div class="space-y-3.5 max-w-3xl mx-auto">
            <div>
                <h1 class="text-2xl font-bold mb-1 flex items-center gap-2.5">
                    <div class="w-9 h-9 rounded-xl bg-accent/15 flex items-center justify-center">
                        <i class="fas fa-compass text-accent"></i>
                    </div>
                    {"Explore More"}
                </h1>
                <p class="text-sm opacity-70">{"Additional tools & features"}</p>
            </div>

            <div class="grid gap-3">
                { for LINKS.iter().map(|link| html! {
                    <Link<Route> key={link.label} to={link.route} classes="block group">
                        <Card class="flex-row items-center gap-4">
                            <div class={classes!("w-11", "h-11", "rounded-xl", "bg-base-200", "flex", "items-center", "justify-center", link.tone)}>
                                <i class={classes!("fas", link.icon, "text-lg")}></i>
                            </div>
                            <div class="flex-1">
                                <div class="text-sm font-semibold">{link.label}</div>
                                <div class="text-xs opacity-60">{link.description}</div>
                            </div>
                            <span class="opacity-40 text-lg group-hover:text-accent transition-colors">{"›"}</span>
                        </Card>
                    </Link<Route>>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_cover_secondary_pages() {
        let routes: Vec<Route> = LINKS.iter().map(|l| l.route).collect();
        assert_eq!(routes, vec![Route::Squad, Route::Perks, Route::Market]);
        assert!(LINKS.iter().all(|l| !l.description.is_empty()));
    }
}
