use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
pub mod hooks;
mod pages;
pub mod router;
pub mod session;
pub mod settings;
pub mod shared;

use router::{switch, Route};
use session::SessionProvider;
use shared::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== ChainFund Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);
    if settings.fail_actions {
        log::warn!("Marketplace actions are configured to fail");
    }

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
