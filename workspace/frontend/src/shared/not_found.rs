use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundPanelProps {
    /// Record kind, e.g. "Bid"
    pub kind: AttrValue,
    pub back_to: Route,
    pub back_label: AttrValue,
}

/// Detail-page fallback for an id missing from the catalog.
#[function_component(NotFoundPanel)]
pub fn not_found_panel(props: &NotFoundPanelProps) -> Html {
    log::warn!("{} not found", props.kind);

    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-4 text-center">
            <h1 class="text-3xl font-bold">{format!("{} Not Found", props.kind)}</h1>
            <p class="opacity-70">
                {format!("The {} you're looking for doesn't exist.", props.kind.to_lowercase())}
            </p>
            <Link<Route> to={props.back_to.clone()} classes="btn btn-primary">
                <i class="fas fa-arrow-left"></i>
                {format!(" {}", props.back_label)}
            </Link<Route>>
        </div>
    }
}
