use common::catalog::catalog;
use common::client::ActingAs;
use common::countdown::CountdownStyle;
use common::format::{format_long_date, format_percent, format_price};
use common::models::{CampaignStatus, Party};
use common::validation::funding_amount;
use common::MarketplaceClient;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::acting_as::ActingAsPicker;
use crate::components::cards::{avatar, campaign_status_class};
use crate::components::layout::Layout;
use crate::hooks::use_countdown;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::not_found::NotFoundPanel;
use crate::shared::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component(CampaignDetailPage)]
pub fn campaign_detail_page(props: &Props) -> Html {
    let catalog = catalog();
    let campaign = catalog.campaign(&props.id);

    let session = use_session();
    let toast = use_toast();
    let acting_as = use_state(ActingAs::default);
    let is_funding = use_state(|| false);
    let amount_ref = use_node_ref();
    let countdown = use_countdown(
        campaign.as_ref().ok().and_then(|c| c.end_date),
        CountdownStyle::Coarse,
    );

    let campaign = match campaign {
        Ok(campaign) => campaign,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="Campaign Not Found">
                    <NotFoundPanel kind="Campaign" back_to={Route::Campaigns} back_label="Back to Campaigns" />
                </Layout>
            };
        }
    };

    let on_submit = {
        let campaign_id = campaign.id.clone();
        let currency = campaign.currency.clone();
        let amount_ref = amount_ref.clone();
        let acting_as = acting_as.clone();
        let is_funding = is_funding.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_funding {
                return;
            }
            let Some(input) = amount_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let amount = match funding_amount(&input.value()) {
                Ok(amount) => amount,
                Err(e) => {
                    toast.show_error("Invalid Amount", e.to_string());
                    return;
                }
            };
            is_funding.set(true);

            let campaign_id = campaign_id.clone();
            let currency = currency.clone();
            let acting_as = (*acting_as).clone();
            let is_funding = is_funding.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call(
                    "fund_campaign",
                    client.fund_campaign(&campaign_id, amount, &acting_as),
                )
                .await
                {
                    Ok(receipt) => {
                        toast.show_success(
                            "Thank You for Your Support!",
                            format!(
                                "Contributed {} as {}. Transaction {}",
                                format_price(amount, &currency),
                                acting_as.describe(),
                                receipt.transaction_hash
                            ),
                        );
                        input.set_value("");
                    }
                    Err(e) => toast.show_error("Funding Failed", e.to_string()),
                }
                is_funding.set(false);
            });
        })
    };

    let on_acting_as = {
        let acting_as = acting_as.clone();
        Callback::from(move |value: ActingAs| acting_as.set(value))
    };

    let creator_name = catalog.party_name(&campaign.creator).unwrap_or("Unknown");
    let creator_link = match &campaign.creator {
        Party::Dao(id) => html! {
            <Link<Route> to={Route::GroupDetail { id: id.clone() }} classes="link font-semibold">{creator_name}</Link<Route>>
        },
        Party::Individual(_) => html! { <span class="font-semibold">{creator_name}</span> },
    };
    let disabled = *is_funding;

    let fund_form = if campaign.status != CampaignStatus::Active {
        html! {
            <div class="alert alert-info">
                <i class="fas fa-flag-checkered"></i>
                <span>{format!("This campaign is {}.", campaign.status.label().to_lowercase())}</span>
            </div>
        }
    } else if session.user.is_none() {
        html! {
            <div class="alert">
                <i class="fas fa-lock"></i>
                <span>{"Sign in to back this campaign."}</span>
                <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">{"Sign In"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <form onsubmit={on_submit} class="space-y-4" novalidate={true}>
                <ActingAsPicker value={(*acting_as).clone()} on_change={on_acting_as} {disabled} />
                <div class="form-control">
                    <label class="label"><span class="label-text">{format!("Amount ({})", campaign.currency)}</span></label>
                    <input ref={amount_ref} type="number" step="any" min="0" class="input input-bordered w-full" {disabled} />
                </div>
                <button type="submit" class="btn btn-primary w-full" {disabled}>
                    {if disabled {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-hand-holding-usd"></i> }
                    }}
                    {"Fund Campaign"}
                </button>
            </form>
        }
    };

    html! {
        <Layout title={campaign.title.clone()}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Campaigns}>{"Campaigns"}</Link<Route>></li>
                    <li>{&campaign.title}</li>
                </ul>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    <figure class="rounded-box overflow-hidden shadow">
                        <img src={campaign.image_url.clone()} alt={campaign.title.clone()} class="w-full max-h-96 object-cover" />
                    </figure>
                    <div class="flex items-start justify-between gap-4">
                        <h1 class="text-3xl font-bold">{&campaign.title}</h1>
                        <span class={classes!("badge", campaign_status_class(campaign.status))}>{campaign.status.label()}</span>
                    </div>
                    <div class="flex gap-2">
                        <span class="badge badge-outline">{&campaign.category}</span>
                        <span class="badge badge-ghost">{campaign.creator.kind().label()}</span>
                    </div>
                    <p class="opacity-80">{&campaign.description}</p>
                    <div class="flex items-center gap-3">
                        {avatar(creator_name, catalog.party_avatar(&campaign.creator))}
                        <div>
                            <div class="text-xs opacity-60">{"Created by"}</div>
                            {creator_link}
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body gap-3">
                            <div class="text-3xl font-bold text-primary">{format_price(campaign.raised_amount, &campaign.currency)}</div>
                            <div class="text-sm opacity-70">{format!("raised of {} goal", format_price(campaign.target_amount, &campaign.currency))}</div>
                            <progress class="progress progress-primary w-full" value={format!("{:.0}", campaign.progress_bar_percent())} max="100"></progress>
                            <div class="flex justify-between text-sm">
                                <span>{format!("{} funded", format_percent(campaign.funding_progress()))}</span>
                                <span>{format!("{} to go", format_price(campaign.remaining_amount(), &campaign.currency))}</span>
                            </div>
                            <div class="text-sm opacity-70">
                                <i class="far fa-clock mr-1"></i>
                                {match countdown {
                                    Some(label) => label,
                                    None => "No end date".to_string(),
                                }}
                            </div>
                            <div class="text-xs opacity-60">{format!("Started {}", format_long_date(campaign.created_at))}</div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Back this Campaign"}</h2>
                            {fund_form}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
