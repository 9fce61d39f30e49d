use chrono::Utc;
use common::client::CampaignDraft;
use common::validation::{parse_amount, FormInput};
use common::MarketplaceClient;
use yew::prelude::*;

use super::{CreateModalProps, FormModal};
use crate::api_client;
use crate::components::form::{
    deadline_select, parse_deadline, parse_party, party_select, read_form, reset, text,
};
use crate::session::use_session;
use crate::shared::toast::use_toast;

#[function_component(CampaignModal)]
pub fn campaign_modal(props: &CreateModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let toast = use_toast();
    let session = use_session();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let on_close = props.on_close.clone();
        let user_id = session.user.as_ref().map(|u| u.id.clone()).unwrap_or_default();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let Some(data) = read_form(&form_ref) else {
                return;
            };

            let draft = parse_amount(&text(&data, "target_amount")).and_then(|target_amount| {
                CampaignDraft {
                    title: text(&data, "title"),
                    description: text(&data, "description"),
                    target_amount,
                    currency: text(&data, "currency"),
                    category: text(&data, "category"),
                    image_url: text(&data, "image_url"),
                    creator: Some(parse_party(&text(&data, "creator"), &user_id)),
                    end_date: parse_deadline(&text(&data, "duration"), Utc::now()),
                }
                .validated()
            });
            let draft = match draft {
                Ok(draft) => draft,
                Err(e) => {
                    toast.show_error("Invalid campaign", e.to_string());
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
                match api_client::call("create_campaign", client.create_campaign(&draft)).await {
                    Ok(id) => {
                        toast.show_success("Campaign Launched!", format!("{} is live as {}.", draft.title, id));
                        reset(&form_ref);
                        on_close.emit(());
                    }
                    Err(e) => toast.show_error("Launch Failed", e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    let disabled = *is_submitting;
    html! {
        <FormModal title="Launch a Campaign" submit_label="Launch Campaign" show={props.show}
            is_submitting={disabled} form_ref={form_ref} {on_submit} on_close={props.on_close.clone()}>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Title"}</span></label>
                <input type="text" name="title" class="input input-bordered w-full" {disabled} />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Description"}</span></label>
                <textarea name="description" class="textarea textarea-bordered w-full" {disabled} />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Funding Goal"}</span></label>
                    <input type="number" step="any" min="0" name="target_amount" class="input input-bordered w-full" {disabled} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Currency"}</span></label>
                    <select name="currency" class="select select-bordered w-full" {disabled}>
                        <option value="ETH">{"ETH"}</option>
                        <option value="USDC">{"USDC"}</option>
                    </select>
                </div>
            </div>
            <div class="grid grid-cols-3 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Category"}</span></label>
                    <input type="text" name="category" class="input input-bordered w-full" placeholder="Technology" {disabled} />
                </div>
                {party_select("creator", "Creator", disabled)}
                {deadline_select("duration", true, disabled)}
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Image URL"}</span></label>
                <input type="url" name="image_url" class="input input-bordered w-full" {disabled} />
            </div>
        </FormModal>
    }
}
