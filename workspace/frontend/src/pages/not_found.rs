use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        let path = path.clone();
        use_effect_with(path, |path| {
            log::warn!("404: no route matches {}", path);
        });
    }

    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-4 text-center">
            <h1 class="text-8xl font-bold text-primary">{"404"}</h1>
            <h2 class="text-2xl font-bold">{"This page went to the moon"}</h2>
            <p class="opacity-70">{"The page you're looking for doesn't exist."}</p>
            <p class="text-sm font-mono opacity-60">{format!("Path: {}", path)}</p>
            <div class="flex gap-2">
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    <i class="fas fa-home"></i>{"Go Home"}
                </Link<Route>>
                <Link<Route> to={Route::Assets} classes="btn btn-outline">
                    <i class="fas fa-search"></i>{"Browse Assets"}
                </Link<Route>>
            </div>
        </div>
    }
}
