use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat::ChatPage;
use crate::components::community::Community;
use crate::components::dashboard::Dashboard;
use crate::components::feed::Feed;
use crate::components::fx::FxAdvisor;
use crate::components::grocery::Grocery;
use crate::components::layout::layout::Layout;
use crate::components::market::Market;
use crate::components::more::MoreMenu;
use crate::components::perks::Perks;
use crate::components::profile::Profile;
use crate::components::rewards::Rewards;
use crate::components::squad::Squad;
use crate::components::streaks::Streaks;

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/feed")]
    Feed,
    #[at("/fx")]
    Fx,
    #[at("/grocery")]
    Grocery,
    #[at("/community")]
    Community,
    #[at("/squad")]
    Squad,
    #[at("/perks")]
    Perks,
    #[at("/market")]
    Market,
    #[at("/streaks")]
    Streaks,
    #[at("/rewards")]
    Rewards,
    #[at("/more")]
    More,
    #[at("/profile")]
    Profile,
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// `/` and `/dashboard` are the same page.
    pub fn is_active(&self, current: Option<&Route>) -> bool {
        match (self, current) {
            (Route::Home | Route::Dashboard, Some(Route::Home | Route::Dashboard)) => true,
            (route, Some(current)) => route == current,
            (_, None) => false,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Feed => {
            log::trace!("Rendering Feed page");
            html! { <Layout title="Transactions"><Feed /></Layout> }
        }
        Route::Fx => {
            log::trace!("Rendering FX page");
            html! { <Layout title="FX Advisor"><FxAdvisor /></Layout> }
        }
        Route::Grocery => {
            log::trace!("Rendering Grocery page");
            html! { <Layout title="Grocery"><Grocery /></Layout> }
        }
        Route::Community => {
            log::trace!("Rendering Community page");
            html! { <Layout title="Community"><Community /></Layout> }
        }
        Route::Squad => {
            log::trace!("Rendering Squad page");
            html! { <Layout title="Squad"><Squad /></Layout> }
        }
        Route::Perks => {
            log::trace!("Rendering Perks page");
            html! { <Layout title="Perks"><Perks /></Layout> }
        }
        Route::Market => {
            log::trace!("Rendering Market page");
            html! { <Layout title="Market"><Market /></Layout> }
        }
        Route::Streaks => {
            log::trace!("Rendering Streaks page");
            html! { <Layout title="Streaks"><Streaks /></Layout> }
        }
        Route::Rewards => {
            log::trace!("Rendering Rewards page");
            html! { <Layout title="Rewards"><Rewards /></Layout> }
        }
        Route::More => {
            log::trace!("Rendering More menu");
            html! { <Layout title="More"><MoreMenu /></Layout> }
        }
        Route::Profile => {
            log::trace!("Rendering Profile page");
            html! { <Layout title="Profile"><Profile /></Layout> }
        }
        Route::Chat => {
            log::trace!("Rendering Chat page");
            html! { <Layout title="Stash AI"><ChatPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title="404">
                    <div class="flex flex-col items-center gap-4 py-16">
                        <h1 class="text-3xl font-bold">{"404 Not Found"}</h1>
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary btn-sm">
                            <i class="fas fa-home"></i>{" Back to Dashboard"}
                        </Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Fx.to_path(), "/fx");
        assert_eq!(Route::recognize("/community"), Some(Route::Community));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn test_home_and_dashboard_share_active_state() {
        assert!(Route::Home.is_active(Some(&Route::Dashboard)));
        assert!(Route::Dashboard.is_active(Some(&Route::Home)));
        assert!(!Route::Feed.is_active(Some(&Route::Home)));
        assert!(!Route::Feed.is_active(None));
    }
}
