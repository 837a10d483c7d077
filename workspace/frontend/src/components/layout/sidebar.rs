use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::ChatPanelContext;
use crate::Route;

struct NavItem {
    route: Route,
    icon: &'static str,
    label: &'static str,
}

struct NavSection {
    title: &'static str,
    items: &'static [NavItem],
}

const NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        title: "Overview",
        items: &[
            NavItem { route: Route::Home, icon: "fa-house", label: "Dashboard" },
            NavItem { route: Route::Feed, icon: "fa-receipt", label: "Transactions" },
        ],
    },
    NavSection {
        title: "Finance",
        items: &[
            NavItem { route: Route::Grocery, icon: "fa-cart-shopping", label: "Grocery" },
            NavItem { route: Route::Fx, icon: "fa-arrow-trend-up", label: "FX Advisor" },
        ],
    },
    NavSection {
        title: "Social",
        items: &[
            NavItem { route: Route::Community, icon: "fa-users", label: "Community" },
            NavItem { route: Route::Streaks, icon: "fa-fire", label: "Streaks" },
            NavItem { route: Route::Rewards, icon: "fa-coins", label: "Rewards" },
        ],
    },
    NavSection {
        title: "More",
        items: &[
            NavItem { route: Route::Squad, icon: "fa-user-group", label: "Squad" },
            NavItem { route: Route::Perks, icon: "fa-gift", label: "Perks" },
            NavItem { route: Route::Market, icon: "fa-store", label: "Market" },
        ],
    },
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let collapsed = use_state(|| false);
    let current = use_route::<Route>();
    let chat_panel = use_context::<ChatPanelContext>();

    let on_collapse = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Sidebar collapsed: {}", !*collapsed);
            collapsed.set(!*collapsed);
        })
    };

    let on_assistant = Callback::from(move |_: MouseEvent| {
        if let Some(panel) = &chat_panel {
            panel.set_open.emit(true);
        }
    });

    html! {
        <aside class={classes!(
            "hidden", "md:flex", "flex-col", "bg-base-100", "border-r", "border-base-300", "h-full",
            "transition-all", "duration-300", "z-50",
            if *collapsed { "w-[72px]" } else { "w-64" },
        )}>
            <Link<Route> to={Route::Dashboard} classes="flex items-center gap-3 px-5 py-6 border-b border-base-300">
                <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-warning to-accent flex items-center justify-center shrink-0">
                    <span class="text-base-100 font-extrabold text-sm tracking-tight">{"S"}</span>
                </div>
                if !*collapsed {
                    <div class="flex flex-col">
                        <span class="text-base font-bold tracking-tight leading-tight">{"Stash"}</span>
                        <span class="text-[9px] opacity-60 font-semibold tracking-[0.2em] uppercase">{"Student Finance"}</span>
                    </div>
                }
            </Link<Route>>

            <nav class="flex-1 py-5 overflow-y-auto">
                { for NAV_SECTIONS.iter().enumerate().map(|(index, section)| html! {
                    <div key={section.title} class="mb-4">
                        if !*collapsed {
                            <div class="px-5 mb-2">
                                <span class="text-[9px] font-bold uppercase tracking-[0.2em] opacity-50">{section.title}</span>
                            </div>
                        }
                        <ul class="menu menu-sm px-3 py-0">
                            { for section.items.iter().map(|item| {
                                let active = item.route.is_active(current.as_ref());
                                html! {
                                    <li key={item.label}>
                                        <Link<Route> to={item.route} classes={classes!(active.then_some("active"))}>
                                            <i class={classes!("fas", item.icon, "w-5")}></i>
                                            if !*collapsed {
                                                <span>{item.label}</span>
                                            }
                                        </Link<Route>>
                                    </li>
                                }
                            }) }
                        </ul>
                        if index < NAV_SECTIONS.len() - 1 {
                            <div class="divider mx-5 my-2"></div>
                        }
                    </div>
                }) }
            </nav>

            if !*collapsed {
                <div class="mx-3 mb-3">
                    <button class="w-full flex items-center gap-3 px-4 py-3.5 rounded-xl bg-accent/5 border border-accent/20 hover:border-accent/40 transition-all" onclick={on_assistant}>
                        <div class="w-9 h-9 rounded-lg bg-accent/15 flex items-center justify-center">
                            <i class="fas fa-wand-magic-sparkles text-accent"></i>
                        </div>
                        <div class="flex-1 text-left">
                            <div class="text-xs font-semibold">{"AI Assistant"}</div>
                            <div class="text-[10px] opacity-60">{"Powered by Stash"}</div>
                        </div>
                    </button>
                </div>
            }

            <button class="flex items-center justify-center py-3.5 border-t border-base-300 opacity-60 hover:opacity-100" onclick={on_collapse}>
                <i class={if *collapsed { "fas fa-chevron-right" } else { "fas fa-chevron-left" }}></i>
            </button>
        </aside>
    }
}
