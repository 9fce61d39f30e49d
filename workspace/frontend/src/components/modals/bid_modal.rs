use chrono::Utc;
use common::catalog::catalog;
use common::client::BidDraft;
use common::validation::{parse_amount, FormInput};
use common::MarketplaceClient;
use yew::prelude::*;

use super::{CreateModalProps, FormModal};
use crate::api_client;
use crate::components::form::{deadline_select, parse_deadline, read_form, reset, text};
use crate::shared::toast::use_toast;

#[function_component(BidModal)]
pub fn bid_modal(props: &CreateModalProps) -> Html {
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

            let draft = parse_amount(&text(&data, "starting_price")).and_then(|starting_price| {
                BidDraft {
                    title: text(&data, "title"),
                    description: text(&data, "description"),
                    asset_id: text(&data, "asset_id"),
                    starting_price,
                    currency: text(&data, "currency"),
                    end_date: parse_deadline(&text(&data, "duration"), Utc::now()),
                }
                .validated()
            });
            let draft = match draft {
                Ok(draft) => draft,
                Err(e) => {
                    toast.show_error("Invalid auction", e.to_string());
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
                match api_client::call("create_bid", client.create_bid(&draft)).await {
                    Ok(id) => {
                        toast.show_success("Auction Created!", format!("{} opened as {}.", draft.title, id));
                        reset(&form_ref);
                        on_close.emit(());
                    }
                    Err(e) => toast.show_error("Auction Failed", e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    let disabled = *is_submitting;
    html! {
        <FormModal title="Start an Auction" submit_label="Create Auction" show={props.show}
            is_submitting={disabled} form_ref={form_ref} {on_submit} on_close={props.on_close.clone()}>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Title"}</span></label>
                <input type="text" name="title" class="input input-bordered w-full" {disabled} />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Description"}</span></label>
                <textarea name="description" class="textarea textarea-bordered w-full" {disabled} />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Asset"}</span></label>
                <select name="asset_id" class="select select-bordered w-full" {disabled}>
                    <option value="" selected={true}>{"Select an asset"}</option>
                    {for catalog().assets.iter().map(|asset| html! {
                        <option value={asset.id.clone()}>{&asset.name}</option>
                    })}
                </select>
            </div>
            <div class="grid grid-cols-3 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Starting Price"}</span></label>
                    <input type="number" step="any" min="0" name="starting_price" class="input input-bordered w-full" {disabled} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Currency"}</span></label>
                    <select name="currency" class="select select-bordered w-full" {disabled}>
                        <option value="ETH">{"ETH"}</option>
                        <option value="USDC">{"USDC"}</option>
                    </select>
                </div>
                {deadline_select("duration", false, disabled)}
            </div>
        </FormModal>
    }
}
