use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub show: bool,
    pub is_submitting: bool,
    pub form_ref: NodeRef,
    pub on_submit: Callback<SubmitEvent>,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Dialog wrapping one create form.
#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = props.is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(())
            }
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{&props.title}</h3>

                <form ref={props.form_ref.clone()} onsubmit={props.on_submit.clone()} class="py-4 space-y-4" novalidate={true}>
                    { for props.children.iter() }

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close} disabled={props.is_submitting}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                            {if props.is_submitting {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! {}
                            }}
                            {&props.submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
