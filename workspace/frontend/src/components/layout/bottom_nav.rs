use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const TABS: [(Route, &str, &str); 5] = [
    (Route::Home, "fa-house", "Home"),
    (Route::Market, "fa-store", "Market"),
    (Route::Feed, "fa-plus", "Add"),
    (Route::Community, "fa-users", "Social"),
    (Route::More, "fa-ellipsis", "More"),
];

/// Mobile tab bar; the centre "Add" tab opens the feed.
#[function_component(BottomNav)]
pub fn bottom_nav() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="md:hidden fixed bottom-4 left-4 right-4 z-50">
            <div class="bg-base-100/90 backdrop-blur rounded-2xl border border-base-300 shadow-xl">
                <div class="flex items-center justify-around py-2.5 px-2 max-w-md mx-auto">
                    { for TABS.iter().map(|(route, icon, label)| {
                        if *route == Route::Feed {
                            html! {
                                <Link<Route> to={*route} classes="flex flex-col items-center -mt-7">
                                    <div class="w-13 h-13 p-4 rounded-xl bg-gradient-to-br from-accent to-warning flex items-center justify-center shadow-lg ring-4 ring-base-200">
                                        <i class={classes!("fas", *icon, "text-base-100", "text-lg")}></i>
                                    </div>
                                    <span class="text-[10px] mt-1 font-semibold text-accent tracking-wide">{*label}</span>
                                </Link<Route>>
                            }
                        } else {
                            let active = route.is_active(current.as_ref());
                            html! {
                                <Link<Route> to={*route} classes={classes!(
                                    "relative", "flex", "flex-col", "items-center", "py-1.5", "px-3",
                                    if active { "text-accent" } else { "opacity-60" },
                                )}>
                                    <i class={classes!("fas", *icon)}></i>
                                    <span class={classes!("text-[10px]", "mt-1", "tracking-wide", if active { "font-bold" } else { "font-medium" })}>{*label}</span>
                                </Link<Route>>
                            }
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
