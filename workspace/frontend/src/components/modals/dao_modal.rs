use common::client::DaoDraft;
use common::validation::FormInput;
use common::MarketplaceClient;
use yew::prelude::*;

use super::{CreateModalProps, FormModal};
use crate::api_client;
use crate::components::form::{read_form, reset, text};
use crate::shared::toast::use_toast;

#[function_component(DaoModal)]
pub fn dao_modal(props: &CreateModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let toast = use_toast();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let Some(data) = read_form(&form_ref) else {
                return;
            };

            let draft = DaoDraft {
                name: text(&data, "name"),
                description: text(&data, "description"),
                image_url: text(&data, "image_url"),
            };
            let draft = match draft.validated() {
                Ok(draft) => draft,
                Err(e) => {
                    toast.show_error("Invalid DAO", e.to_string());
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let on_close = on_close.clone();
            let form_ref = form_ref.clone();
            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("create_dao", client.create_dao(&draft)).await {
                    Ok(id) => {
                        toast.show_success("DAO Created!", format!("{} was founded as {}.", draft.name, id));
                        reset(&form_ref);
                        on_close.emit(());
                    }
                    Err(e) => toast.show_error("DAO Creation Failed", e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    let disabled = *is_submitting;
    html! {
        <FormModal title="Create a DAO" submit_label="Create DAO" show={props.show}
            is_submitting={disabled} form_ref={form_ref} {on_submit} on_close={props.on_close.clone()}>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Name"}</span></label>
                <input type="text" name="name" class="input input-bordered w-full" {disabled} />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Mission"}</span></label>
                <textarea name="description" class="textarea textarea-bordered w-full" {disabled} />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Image URL"}</span></label>
                <input type="url" name="image_url" class="input input-bordered w-full" {disabled} />
            </div>
        </FormModal>
    }
}
