use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::coins;
use crate::common::fetch_hook::use_fetch;
use crate::theme::ThemeContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_else(|| "JD".to_string())]
    pub initials: String,
}

#[function_component(TopBar)]
pub fn top_bar(props: &Props) -> Html {
    let theme = use_context::<ThemeContext>();
    let (balance, _) = use_fetch(coins::get_balance);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme) = &theme {
                log::debug!("Toggling theme from {}", theme.theme.as_str());
                theme.toggle();
            }
        })
    };

    let is_dark = theme.as_ref().map_or(true, ThemeContext::is_dark);
    let coin_label = balance
        .data()
        .map(|b| b.balance.to_string())
        .unwrap_or_else(|| "—".to_string());

    html! {
        <header class="navbar sticky top-0 z-40 bg-base-100/80 backdrop-blur border-b border-base-300 px-4 md:px-8">
            <div class="flex-1 gap-2.5">
                <Link<Route> to={Route::Dashboard} classes="md:hidden flex items-center gap-2">
                    <div class="w-8 h-8 rounded-lg bg-gradient-to-br from-warning to-accent flex items-center justify-center">
                        <span class="text-base-100 font-extrabold text-[10px]">{"S"}</span>
                    </div>
                    <span class="text-base font-bold tracking-tight">{"Stash"}</span>
                </Link<Route>>
                <h1 class="hidden md:block text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none flex items-center gap-2">
                <Link<Route> to={Route::Rewards} classes="btn btn-sm btn-ghost border border-accent/20 text-accent">
                    <i class="fas fa-coins"></i>
                    <span class="font-bold tabular-nums">{coin_label}</span>
                </Link<Route>>
                <button class="btn btn-sm btn-ghost btn-square" aria-label="Toggle theme" onclick={on_toggle_theme}>
                    <i class={if is_dark { "fas fa-sun" } else { "fas fa-moon" }}></i>
                </button>
                <Link<Route> to={Route::Profile} classes="relative ml-1.5">
                    <div class="w-9 h-9 rounded-xl bg-gradient-to-br from-accent to-warning flex items-center justify-center text-xs font-bold text-base-100">
                        {&props.initials}
                    </div>
                    <span class="absolute -bottom-0.5 -right-0.5 w-3 h-3 bg-success rounded-full ring-2 ring-base-100"></span>
                </Link<Route>>
            </div>
        </header>
    }
}
