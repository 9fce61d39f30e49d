use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_else(|| AttrValue::from("fas fa-search"))]
    pub icon: AttrValue,
    #[prop_or_default]
    pub on_reset: Option<Callback<()>>,
}

/// Placeholder shown when a list has nothing to display.
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-3 text-center">
            <i class={classes!(props.icon.to_string(), "text-4xl", "opacity-40")}></i>
            <h3 class="text-lg font-semibold">{&props.title}</h3>
            <p class="text-sm opacity-70 max-w-md">{&props.message}</p>
            {if let Some(on_reset) = &props.on_reset {
                let on_reset = on_reset.clone();
                html! {
                    <button
                        class="btn btn-outline btn-sm mt-2"
                        onclick={Callback::from(move |_| {
                            log::debug!("User cleared list filters");
                            on_reset.emit(());
                        })}
                    >
                        <i class="fas fa-undo"></i>
                        {" Clear Filters"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
