use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
mod components;
pub mod hooks;
mod router;
pub mod settings;
pub mod storage;
pub mod theme;

pub use router::Route;

use common::toast::ToastProvider;
use components::widgets::ChatPanelProvider;
use theme::ThemeProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <ThemeProvider>
                <ChatPanelProvider>
                    <BrowserRouter>
                        <Switch<Route> render={router::switch} />
                    </BrowserRouter>
                </ChatPanelProvider>
            </ThemeProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings decide the log level, so they load before the logger
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Stash Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
